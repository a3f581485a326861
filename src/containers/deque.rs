use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::merge_insertion;

sort_impl!("merge_insertion_deque", VecDeque);

#[inline]
pub fn sort<T>(v: &mut VecDeque<T>)
where
    T: Ord,
{
    merge_insertion::sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut VecDeque<T>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_insertion::sort_by(v, compare);
}
