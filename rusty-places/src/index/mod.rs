mod point_index;
pub use point_index::*;
mod trie;
pub use trie::*;

use geo_types::Point;

/// Nearest-neighbor structure over a fixed point set. Built once, in bulk;
/// tie-breaking between equidistant points is left to the implementation.
pub trait NearestNeighbor: Sized {
    fn from_points(points: Vec<Point<f64>>) -> Self;

    /// The stored point closest to (lon, lat) under euclidean distance.
    /// `None` only when the structure is empty.
    fn nearest(&self, lon: f64, lat: f64) -> Option<Point<f64>>;
}

/// Prefix-searchable string set, populated incrementally.
pub trait PrefixSearch: Default {
    type Keys<'a>: Iterator<Item = String>
    where
        Self: 'a;

    /// Adds a key, re-adding an existing key is a no-op.
    fn add(&mut self, key: &str);

    /// All stored keys starting with `prefix`, in implementation-defined
    /// order. The empty prefix matches every key.
    fn keys_with_prefix<'a>(&'a self, prefix: &str) -> Self::Keys<'a>;
}
