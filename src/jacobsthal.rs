//! Plans the order in which pending losers are inserted into the main chain.
//!
//! Inserting in blocks bounded by Jacobsthal numbers keeps every binary search inside a window of
//! `2^k - 1` elements, which is what makes merge-insertion spend close to `ceil(log2(n!))`
//! comparisons.

/// Returns the terms `1, 3, 5, 11, 21, 43, ...` (`J(k) = J(k-1) + 2 * J(k-2)`), up to and
/// including the first term that is `>= n`. Empty for `n == 0`.
pub fn jacobsthal_numbers(n: usize) -> Vec<usize> {
    let mut terms = Vec::new();
    if n == 0 {
        return terms;
    }

    let (mut prev, mut curr) = (1usize, 3usize);
    terms.push(prev);
    if prev >= n {
        return terms;
    }

    loop {
        terms.push(curr);
        if curr >= n {
            break;
        }

        // Saturating, so the final term stops the walk instead of wrapping around.
        let next = curr.saturating_add(prev.saturating_mul(2));
        prev = curr;
        curr = next;
    }

    terms
}

/// Returns the order in which `pend[1..size]` is inserted, as pend indices.
///
/// `pend[0]` is placed at the front of the chain for free and is never part of the order. A term
/// `t` of [`jacobsthal_numbers`] covers `pend[..t]`, each block of newly covered indices is
/// emitted highest index first. For `size == 5` this yields `[2, 1, 4, 3]`.
pub fn insertion_order(size: usize) -> Vec<usize> {
    if size <= 1 {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(size - 1);
    let mut covered = 1;

    // Terms are exclusive bounds, not indices: term 5 covers pend[..5], so its block is 4, 3.
    // Treating them as indices never schedules pend[1] and leans on the safety net.
    for term in jacobsthal_numbers(size).into_iter().skip(1) {
        let top = term.min(size);
        order.extend((covered..top).rev());
        covered = covered.max(top);

        if covered == size {
            break;
        }
    }

    complete_order(&mut order, size);
    order
}

/// Drops entries outside `1..size` and repeated entries, then appends every index of `1..size`
/// the walk never produced, in ascending order.
///
/// For a correct walk there is nothing to append, so doing so trips a debug assertion.
pub(crate) fn complete_order(order: &mut Vec<usize>, size: usize) {
    let mut seen = vec![false; size];
    order.retain(|&idx| {
        if idx == 0 || idx >= size || seen[idx] {
            return false;
        }

        seen[idx] = true;
        true
    });

    let missing = (1..size).filter(|&idx| !seen[idx]).collect::<Vec<_>>();
    debug_assert!(
        missing.is_empty(),
        "insertion order left pend indices {missing:?} unscheduled for size {size}"
    );

    order.extend(missing);
}
