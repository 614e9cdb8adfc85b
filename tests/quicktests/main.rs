//! Property tests run against the public API of the tree.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An operation to apply to both a tree and a model of it.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value
    Insert(T),
    /// Remove the value
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
