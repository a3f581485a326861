use std::cmp::Ordering;

use sequence::Sequence;

/// Common interface of the container specific entry points, so that tests and benchmarks can be
/// written once and instantiated per container.
pub trait Sort {
    /// The container family this implementation sorts.
    type Seq<T>: Sequence<Item = T>;

    fn name() -> String;

    fn sort<T>(seq: &mut Self::Seq<T>)
    where
        T: Ord;

    fn sort_by<T, F>(seq: &mut Self::Seq<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr, $seq:ident) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            type Seq<T> = $seq<T>;

            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(seq: &mut $seq<T>)
            where
                T: Ord,
            {
                sort(seq);
            }

            #[inline]
            fn sort_by<T, F>(seq: &mut $seq<T>, compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(seq, compare);
            }
        }
    };
}

pub mod containers;
pub mod jacobsthal;
pub mod merge_insertion;
pub mod patterns;
pub mod sequence;
pub mod timing;
