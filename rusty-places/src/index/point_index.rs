use geo_types::Point;
use rstar::RTree;

use crate::NearestNeighbor;

/// Rtree over node coordinates, the default spatial index behind closest
/// queries.
#[derive(Debug, Clone, Default)]
pub struct PointIndex {
    index: RTree<Point<f64>>,
}

impl PointIndex {
    pub fn size(&self) -> usize {
        self.index.size()
    }

    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }
}

impl NearestNeighbor for PointIndex {
    fn from_points(points: Vec<Point<f64>>) -> Self {
        Self {
            index: RTree::bulk_load(points),
        }
    }

    fn nearest(&self, lon: f64, lat: f64) -> Option<Point<f64>> {
        self.index.nearest_neighbor(&Point::new(lon, lat)).copied()
    }
}

/// Hash key for a point, equal exactly when both coordinate bit patterns
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey(u64, u64);

impl From<Point<f64>> for PointKey {
    fn from(point: Point<f64>) -> Self {
        Self(point.x().to_bits(), point.y().to_bits())
    }
}
