use std::cmp::Ordering;

use crate::merge_insertion;

sort_impl!("merge_insertion_vec", Vec);

#[inline]
pub fn sort<T>(v: &mut Vec<T>)
where
    T: Ord,
{
    merge_insertion::sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut Vec<T>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_insertion::sort_by(v, compare);
}
