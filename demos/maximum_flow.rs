use maximum_flow::edmonds_karp::EdmondsKarp;
use maximum_flow::graph::Graph;

fn main() {
    let mut graph = Graph::default();
    graph.add_nodes(4);

    let edges = vec![
        graph.add_directed_edge(0, 1, 3).unwrap(),
        graph.add_directed_edge(0, 2, 2).unwrap(),
        graph.add_directed_edge(1, 2, 1).unwrap(),
        graph.add_directed_edge(1, 3, 2).unwrap(),
        graph.add_directed_edge(2, 3, 3).unwrap(),
    ];

    let mut solver = EdmondsKarp::default();
    match solver.solve(0, 3, &mut graph) {
        Ok(flow) => {
            println!("maximum flow:{}", flow);
            for edge_id in edges {
                println!("{:?}", graph.get_edge(edge_id).unwrap());
            }
            println!("minimum cut (source side):{:?}", solver.minimum_cut(0));
        }
        Err(err) => eprintln!("{}", err),
    }
}
