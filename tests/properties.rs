use maximum_flow::edmonds_karp::EdmondsKarp;
use maximum_flow::graph::Graph;
use proptest::prelude::*;

fn arb_network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (2usize..8).prop_flat_map(|num_nodes| {
        let edge = (0..num_nodes, 0..num_nodes, 0u32..30);
        (Just(num_nodes), proptest::collection::vec(edge, 0..40))
    })
}

fn solve(num_nodes: usize, edges: &[(usize, usize, u32)]) -> (Graph<u32>, EdmondsKarp<u32>, u32) {
    let mut graph = Graph::default();
    graph.add_nodes(num_nodes);
    for &(from, to, capacity) in edges {
        graph.add_directed_edge(from, to, capacity).unwrap();
    }

    let mut solver = EdmondsKarp::default();
    let flow = solver.solve(0, num_nodes - 1, &mut graph).unwrap();
    (graph, solver, flow)
}

proptest! {
    // every edge carries at most its capacity
    #[test]
    fn capacities_are_respected((num_nodes, edges) in arb_network()) {
        let (graph, _, _) = solve(num_nodes, &edges);

        for edge_id in 0..graph.num_edges() {
            let edge = graph.get_edge(edge_id).unwrap();
            prop_assert!(edge.flow <= edge.capacity);
        }
    }

    // flow into an internal node equals flow out of it
    #[test]
    fn flow_is_conserved((num_nodes, edges) in arb_network()) {
        let (graph, _, flow) = solve(num_nodes, &edges);
        let (source, sink) = (0, num_nodes - 1);

        for node in 0..num_nodes {
            if node == source || node == sink {
                continue;
            }
            let mut incoming = 0u32;
            let mut outgoing = 0u32;
            for edge_id in 0..graph.num_edges() {
                let edge = graph.get_edge(edge_id).unwrap();
                if edge.to == node {
                    incoming += edge.flow;
                }
                if edge.from == node {
                    outgoing += edge.flow;
                }
            }
            prop_assert_eq!(incoming, outgoing);
        }

        prop_assert_eq!(graph.flow_value(source), flow);
    }

    // the residual-reachable set certifies optimality: the cut it induces
    // has capacity exactly equal to the returned flow
    #[test]
    fn flow_equals_minimum_cut_capacity((num_nodes, edges) in arb_network()) {
        let (graph, solver, flow) = solve(num_nodes, &edges);
        let (source, sink) = (0, num_nodes - 1);

        let cut = solver.minimum_cut(source);
        prop_assert!(cut.contains(&source));
        prop_assert!(!cut.contains(&sink));

        let mut in_cut = vec![false; num_nodes];
        for &node in &cut {
            in_cut[node] = true;
        }

        let mut cut_capacity = 0u32;
        for edge_id in 0..graph.num_edges() {
            let edge = graph.get_edge(edge_id).unwrap();
            if in_cut[edge.from] && !in_cut[edge.to] {
                cut_capacity += edge.capacity;
            }
        }
        prop_assert_eq!(cut_capacity, flow);
    }

    // rebuilding from the same input yields the identical result
    #[test]
    fn recomputation_is_deterministic((num_nodes, edges) in arb_network()) {
        let (first_graph, _, first_flow) = solve(num_nodes, &edges);
        let (second_graph, _, second_flow) = solve(num_nodes, &edges);

        prop_assert_eq!(first_flow, second_flow);
        for edge_id in 0..first_graph.num_edges() {
            prop_assert_eq!(first_graph.get_edge(edge_id), second_graph.get_edge(edge_id));
        }
    }
}
