mod street_graph;
pub use street_graph::*;
