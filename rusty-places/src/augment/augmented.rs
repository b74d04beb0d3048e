use std::collections::HashMap;

use geo_types::Point;
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use crate::{
    normalize_name, Id, NearestNeighbor, PointIndex, PointKey, PrefixSearch, StreetGraph, TrieSet,
};

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum AugmentError {
    #[error("spatial index is empty, no node has a connected edge")]
    EmptySpatialIndex,

    #[error("nearest point ({0}, {1}) has no recorded node id")]
    UnindexedPoint(f64, f64),
}

/// One exact-name match, shaped like the serving layer's json response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub id: Id,
}

/// A street graph augmented with two query-ready indices: a spatial index
/// over the coordinates of connected nodes and a prefix index over
/// normalized display names. Built once from a fully loaded graph, read-only
/// afterwards, so shared references are safe across threads.
#[derive(Debug, Clone)]
pub struct AugmentedGraph<S = PointIndex, P = TrieSet> {
    graph: StreetGraph,
    spatial: S,
    names: P,
    point_ids: HashMap<PointKey, Id>,
    name_table: HashMap<String, Vec<usize>>,
}

impl AugmentedGraph {
    /// Augmentation of `graph` with the default indices.
    pub fn new(graph: StreetGraph) -> Self {
        Self::from_graph(graph)
    }
}

impl<S, P> AugmentedGraph<S, P>
where
    S: NearestNeighbor,
    P: PrefixSearch,
{
    /// Single pass over the loaded graph: nodes with at least one edge feed
    /// the spatial point set and the point-to-id map, nodes whose name
    /// survives normalization feed the prefix index and the name table. The
    /// spatial index itself is built once, in bulk, after the pass.
    pub fn from_graph(graph: StreetGraph) -> Self {
        let mut points = Vec::new();
        let mut point_ids = HashMap::new();
        let mut names = P::default();
        let mut name_table: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, node) in graph.nodes().iter().enumerate() {
            if graph.has_edges(node.id) {
                let point = Point::new(node.lon, node.lat);
                // keep-first on coordinate collisions
                point_ids.entry(PointKey::from(point)).or_insert(node.id);
                points.push(point);
            }
            if let Some(name) = node.name.as_deref() {
                let cleaned = normalize_name(name);
                // a name that normalizes to nothing is treated as no name
                if !cleaned.is_empty() {
                    names.add(&cleaned);
                    name_table.entry(cleaned).or_default().push(position);
                }
            }
        }

        Self {
            spatial: S::from_points(points),
            graph,
            names,
            point_ids,
            name_table,
        }
    }

    /// Id of the connected node closest to the target coordinate. Isolated
    /// nodes are never candidates. Errs when no node has an edge.
    pub fn closest(&self, lon: f64, lat: f64) -> Result<Id, AugmentError> {
        let point = self
            .spatial
            .nearest(lon, lat)
            .ok_or(AugmentError::EmptySpatialIndex)?;
        self.point_ids
            .get(&PointKey::from(point))
            .copied()
            .ok_or(AugmentError::UnindexedPoint(point.x(), point.y()))
    }

    /// Display names of every location whose cleaned name starts with the
    /// cleaned prefix, deduplicated by exact value, in no particular order.
    pub fn locations_by_prefix(&self, prefix: &str) -> Vec<String> {
        let cleaned = normalize_name(prefix);
        self.names
            .keys_with_prefix(&cleaned)
            .filter_map(|key| self.name_table.get(&key))
            .flatten()
            .filter_map(|&position| self.graph.nodes().get(position))
            .filter_map(|node| node.name.clone())
            .unique()
            .collect()
    }

    /// Full records for every location whose cleaned name equals the
    /// cleaned query, in graph enumeration order. Empty when unknown.
    pub fn locations_by_exact_name(&self, name: &str) -> Vec<Location> {
        let Some(positions) = self.name_table.get(&normalize_name(name)) else {
            return Vec::new();
        };
        positions
            .iter()
            .filter_map(|&position| {
                let node = self.graph.nodes().get(position)?;
                Some(Location {
                    lat: node.lat,
                    lon: node.lon,
                    name: node.name.clone()?,
                    id: node.id,
                })
            })
            .collect()
    }

    /// The underlying street graph.
    pub fn graph(&self) -> &StreetGraph {
        &self.graph
    }
}
