#[cfg(test)]
mod tests {
    use geo_types::Point;
    use rand::*;
    use rusty_places::*;

    const NAME_POOL: [&str; 6] = [
        "Oak St",
        "Oak Ave",
        "Main St.",
        "Østergade",
        "Park Blvd",
        "Parkvej 9",
    ];

    fn random_node(id: Id) -> Node {
        Node {
            id,
            lon: random_range(-180.0..180.0),
            lat: random_range(-90.0..90.0),
            name: (random_range(0..3) != 0)
                .then(|| NAME_POOL[random_range(0..NAME_POOL.len())].to_string()),
        }
    }

    /// Chain graph, every node connected to its successor.
    fn connected_graph(count: Id) -> StreetGraph {
        let mut graph: StreetGraph = (0..count).map(random_node).collect();
        for id in 1..count {
            graph
                .add_edge(id - 1, id)
                .expect("failed to connect chain nodes");
        }
        graph
    }

    #[test]
    fn closest_matches_own_coordinates() {
        let graph = connected_graph(100);
        let nodes = graph.nodes().to_vec();
        let augmented = AugmentedGraph::new(graph);
        for node in nodes {
            assert_eq!(augmented.closest(node.lon, node.lat), Ok(node.id));
        }
    }

    #[test]
    fn closest_never_returns_isolated_nodes() {
        // even ids form a chain, odd ids stay isolated
        let mut graph: StreetGraph = (0..100).map(random_node).collect();
        for id in (2..100u64).step_by(2) {
            graph
                .add_edge(id - 2, id)
                .expect("failed to connect chain nodes");
        }
        let augmented = AugmentedGraph::new(graph);

        for _ in 0..500 {
            let id = augmented
                .closest(random_range(-180.0..180.0), random_range(-90.0..90.0))
                .expect("index is non-empty");
            assert_eq!(id % 2, 0, "isolated node {id} was returned");
        }
    }

    #[test]
    fn normalization_idempotent_on_random_input() {
        const CHARS: [char; 16] = [
            'a', 'B', 'c', 'Ø', 'æ', ' ', '.', '\'', '&', '7', '!', 'Z', 'q', '-', '#', 'e',
        ];
        for _ in 0..200 {
            let raw: String = (0..random_range(0..32))
                .map(|_| CHARS[random_range(0..CHARS.len())])
                .collect();
            let once = normalize_name(&raw);
            assert_eq!(normalize_name(&once), once);
            assert!(once.chars().all(|c| c == ' ' || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn prefix_results_start_with_the_cleaned_prefix() {
        let augmented = AugmentedGraph::new(connected_graph(200));
        for prefix in ["", "o", "Oak", "main", "PARK", "Øst", "zzz"] {
            let cleaned = normalize_name(prefix);
            for name in augmented.locations_by_prefix(prefix) {
                assert!(
                    normalize_name(&name).starts_with(&cleaned),
                    "{name:?} does not match prefix {prefix:?}"
                );
            }
        }
    }

    #[test]
    fn empty_prefix_returns_every_distinct_name() {
        let graph = connected_graph(150);
        let mut expected: Vec<String> = graph
            .nodes()
            .iter()
            .filter_map(|n| n.name.clone())
            .filter(|n| !normalize_name(n).is_empty())
            .collect();
        expected.sort();
        expected.dedup();

        let augmented = AugmentedGraph::new(graph);
        let mut res = augmented.locations_by_prefix("");
        res.sort();
        assert_eq!(res, expected);
    }

    #[test]
    fn exact_name_invariant_under_normalization_variants() {
        let augmented = AugmentedGraph::new(connected_graph(150));
        for (a, b) in [
            ("Main St.", "MAIN st"),
            ("Oak Ave", "OAK AVE!"),
            ("Parkvej 9", "parkvej 1"),
        ] {
            assert_eq!(
                augmented.locations_by_exact_name(a),
                augmented.locations_by_exact_name(b),
                "{a:?} and {b:?} clean to the same key"
            );
        }
    }

    #[test]
    fn exact_name_records_mirror_their_nodes() {
        let graph = connected_graph(150);
        let nodes = graph.nodes().to_vec();
        let augmented = AugmentedGraph::new(graph);
        for name in NAME_POOL {
            for loc in augmented.locations_by_exact_name(name) {
                let node = nodes
                    .iter()
                    .find(|n| n.id == loc.id)
                    .expect("record points at a real node");
                assert_eq!((loc.lon, loc.lat), (node.lon, node.lat));
                assert_eq!(Some(loc.name.as_str()), node.name.as_deref());
            }
        }
    }

    #[test]
    fn point_index_nearest_is_the_true_minimum() {
        let points: Vec<Point<f64>> = (0..200)
            .map(|_| Point::new(random_range(-10.0..10.0), random_range(-10.0..10.0)))
            .collect();
        let index = PointIndex::from_points(points.clone());

        for _ in 0..100 {
            let (qx, qy) = (random_range(-12.0..12.0), random_range(-12.0..12.0));
            let dist = |p: &Point<f64>| (p.x() - qx).powi(2) + (p.y() - qy).powi(2);
            let nearest = index.nearest(qx, qy).expect("index is non-empty");
            let best = points.iter().map(dist).fold(f64::INFINITY, f64::min);
            assert!((dist(&nearest) - best).abs() < 1e-12);
        }
    }

    /// Brute-force stand-in for the rtree, to check that alternate spatial
    /// indices slot in behind the capability trait.
    struct LinearScan(Vec<Point<f64>>);

    impl NearestNeighbor for LinearScan {
        fn from_points(points: Vec<Point<f64>>) -> Self {
            Self(points)
        }

        fn nearest(&self, lon: f64, lat: f64) -> Option<Point<f64>> {
            let dist = |p: &Point<f64>| (p.x() - lon).powi(2) + (p.y() - lat).powi(2);
            self.0
                .iter()
                .min_by(|a, b| dist(a).partial_cmp(&dist(b)).expect("non-nan distance"))
                .copied()
        }
    }

    #[test]
    fn alternate_spatial_index_substitutes() {
        let graph = connected_graph(80);
        let brute: AugmentedGraph<LinearScan> = AugmentedGraph::from_graph(graph.clone());
        let rtree = AugmentedGraph::new(graph);

        for _ in 0..200 {
            let (lon, lat) = (random_range(-180.0..180.0), random_range(-90.0..90.0));
            assert_eq!(brute.closest(lon, lat), rtree.closest(lon, lat));
        }
    }
}
