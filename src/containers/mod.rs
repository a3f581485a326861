//! Container specific entry points. Both run the exact same algorithm body, only the storage of
//! the chains differs.

pub mod deque;
pub mod vec;
