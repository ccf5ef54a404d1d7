use crate::graph::Graph;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::Sub;

#[derive(Default, PartialEq, Debug)]
pub(crate) struct ResidualArc<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
    pub rev: usize,
}

impl<Flow> ResidualArc<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.flow
    }
}

// arc store in compressed-sparse-row layout; for every input edge (u, v)
// there is a forward arc at u and a paired reverse arc at v, each recording
// the index of its partner
#[derive(Default)]
pub(crate) struct Residual<Flow> {
    pub num_nodes: usize,
    pub num_edges: usize,
    edge_index_to_arc_index: Vec<usize>,

    pub start: Vec<usize>,
    pub arcs: Vec<ResidualArc<Flow>>,
}

impl<Flow> Residual<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    // arcs of a node keep the input edge order, so every traversal of the
    // residual network visits neighbors in the same order
    pub fn build(&mut self, graph: &Graph<Flow>) {
        self.num_nodes = graph.num_nodes();
        self.num_edges = graph.num_edges();

        self.edge_index_to_arc_index = vec![usize::MAX; self.num_edges];
        self.start = vec![0; self.num_nodes + 1];
        self.arcs = (0..2 * self.num_edges).map(|_| ResidualArc { to: 0, flow: Flow::zero(), capacity: Flow::zero(), rev: 0 }).collect();

        let mut degree = vec![0; self.num_nodes];
        for edge in graph.edges.iter() {
            degree[edge.to] += 1;
            degree[edge.from] += 1;
        }

        for i in 1..=self.num_nodes {
            self.start[i] += self.start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; self.num_nodes];
        for (edge_index, e) in graph.edges.iter().enumerate() {
            let (u, v) = (e.from, e.to);
            let arc_index_u = self.start[u] + counter[u];
            counter[u] += 1;
            let arc_index_v = self.start[v] + counter[v];
            counter[v] += 1;
            self.edge_index_to_arc_index[edge_index] = arc_index_u;

            // forward arc starts with the whole capacity left, the paired
            // reverse arc starts saturated (residual zero)
            self.arcs[arc_index_u] = ResidualArc { to: v, flow: Flow::zero(), capacity: e.capacity, rev: arc_index_v };
            self.arcs[arc_index_v] = ResidualArc { to: u, flow: e.capacity, capacity: e.capacity, rev: arc_index_u };
        }
    }

    pub fn set_flow(&self, graph: &mut Graph<Flow>) {
        for edge_id in 0..graph.num_edges() {
            let i = self.edge_index_to_arc_index[edge_id];
            graph.edges[edge_id].flow = self.arcs[i].flow;
        }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<ResidualArc<Flow>> {
        self.arcs[self.start[u]..self.start[u + 1]].iter()
    }

    #[inline]
    pub fn push_flow(&mut self, arc_index: usize, flow: Flow) {
        let rev = self.arcs[arc_index].rev;

        // moving flow forward frees the same amount on the reverse arc, so
        // residual(arc) + residual(rev) stays constant
        self.arcs[arc_index].flow += flow;
        self.arcs[rev].flow -= flow;
    }

    // apply one augmentation along the parent chain built by a path search;
    // `amount` must not exceed the bottleneck of the chain
    pub fn push_path(&mut self, prev: &[(usize, usize)], source: usize, sink: usize, amount: Flow) {
        let mut v = sink;
        while v != source {
            let (u, arc_index) = prev[v];
            self.push_flow(arc_index, amount);
            v = u;
        }
    }

    // nodes reachable from `source` through strictly positive residual arcs
    pub fn reachable_from(&self, source: usize) -> Vec<usize> {
        let mut visited = vec![false; self.num_nodes];
        let mut reachable = Vec::new();
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = queue.pop_front() {
            reachable.push(u);
            for arc in self.neighbors(u) {
                if !visited[arc.to] && arc.residual_capacity() > Flow::zero() {
                    visited[arc.to] = true;
                    queue.push_back(arc.to);
                }
            }
        }

        reachable
    }
}
