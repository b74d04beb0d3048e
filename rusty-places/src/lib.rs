pub mod name;
pub use name::*;

pub mod graph;
pub use graph::*;

pub mod index;
pub use index::*;

pub mod augment;
pub use augment::*;

#[inline]
pub(crate) fn default<T: Default>() -> T {
    T::default()
}

pub type Id = u64;
