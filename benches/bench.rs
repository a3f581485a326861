use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use merge_insertion::containers::{deque, vec};
use merge_insertion::patterns;
use merge_insertion::sequence::Sequence;
use merge_insertion::timing;
use merge_insertion::Sort;

fn bench_sort<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<u32>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    // Filling the container happens in the setup closure, only the sort call is measured.
    c.bench_function(&format!("{}-{pattern_name}-{test_size}", S::name()), |b| {
        b.iter_batched(
            || <S::Seq<u32>>::from_items(pattern_provider(test_size)),
            |mut test_data| S::sort(black_box(&mut test_data)),
            batch_size,
        )
    });
}

fn measure_comp_count<S: Sort>(
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<u32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 {
        10_000
    } else if test_size < 10_000 {
        300
    } else {
        10
    };

    let mut comp_count = 0u64;
    for _ in 0..run_count {
        let mut test_data = <S::Seq<u32>>::from_items(pattern_provider(test_size));
        S::sort_by(black_box(&mut test_data), |a, b| {
            comp_count += 1;
            a.cmp(b)
        });
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!(
        "{}-comp-{pattern_name}-{test_size}: mean comparisons: {total}",
        S::name()
    );
}

fn bench_impl<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<u32>,
) {
    if env::var("MEASURE_COMP").is_ok() {
        measure_comp_count::<S>(test_size, pattern_name, pattern_provider);
    } else {
        bench_sort::<S>(c, test_size, pattern_name, pattern_provider);
    }
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<u32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as u32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
        ("pair_ties", patterns::pair_ties),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        bench_impl::<vec::SortImpl>(c, test_size, pattern_name, pattern_provider);
        bench_impl::<deque::SortImpl>(c, test_size, pattern_name, pattern_provider);
    }
}

fn bench_harness(c: &mut Criterion, test_size: usize) {
    // The end to end comparison as a caller sees it, both containers back to back.
    c.bench_function(&format!("harness-compare-random-{test_size}"), |b| {
        b.iter_batched(
            || patterns::random(test_size),
            |values| timing::compare(black_box(&values)),
            BatchSize::LargeInput,
        )
    });
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    // The fixed seed used by the tests would make every random input identical.
    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 7, 8, 9, 11, 13, 15, 16, 17, 19, 20, 24, 28, 31, 36, 50, 101, 200, 500,
        1_000, 3_000, 10_000,
    ];

    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_size in test_sizes {
        bench_patterns(c, test_size);
    }

    if env::var("MEASURE_COMP").is_err() {
        bench_harness(c, 3_000);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
