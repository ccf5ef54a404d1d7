use crate::error::FlowError;
use crate::graph::Graph;
use crate::residual::Residual;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;

#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    residual: Residual<Flow>,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
{
    // maximum flow from `source` to `sink`; also writes the per-edge flow
    // assignment back into `graph`
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, FlowError> {
        for node in [source, sink] {
            if node >= graph.num_nodes() {
                return Err(FlowError::NodeOutOfRange { node, num_nodes: graph.num_nodes() });
            }
        }

        // total flow never exceeds the capacity leaving the source; if that
        // sum is representable, every later accumulation is too
        let mut bound = Flow::zero();
        for edge in graph.edges.iter().filter(|e| e.from == source) {
            bound = bound.checked_add(&edge.capacity).ok_or(FlowError::CapacityOverflow)?;
        }

        self.residual.build(graph);
        if source == sink {
            return Ok(Flow::zero());
        }

        let mut prev = vec![(usize::MAX, usize::MAX); self.residual.num_nodes];
        let mut visited = vec![false; self.residual.num_nodes];

        let mut flow = Flow::zero();
        loop {
            prev.fill((usize::MAX, usize::MAX));
            visited.fill(false);

            if !self.find_path(source, sink, &mut prev, &mut visited) {
                break;
            }

            // bottleneck over the parent chain
            let mut delta = self.residual.arcs[prev[sink].1].residual_capacity();
            let mut v = sink;
            while v != source {
                let (u, arc_index) = prev[v];
                delta = delta.min(self.residual.arcs[arc_index].residual_capacity());
                v = u;
            }

            self.residual.push_path(&prev, source, sink, delta);
            flow += delta;
        }

        self.residual.set_flow(graph);
        Ok(flow)
    }

    // bfs over arcs with positive residual capacity, in the arc order the
    // residual network stores them; fills `prev` with (parent, arc index)
    // and reports whether `sink` was reached
    fn find_path(&self, source: usize, sink: usize, prev: &mut [(usize, usize)], visited: &mut [bool]) -> bool {
        visited[source] = true;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for arc_index in self.residual.start[u]..self.residual.start[u + 1] {
                let arc = &self.residual.arcs[arc_index];
                if visited[arc.to] || arc.residual_capacity() == Flow::zero() {
                    continue;
                }

                visited[arc.to] = true;
                prev[arc.to] = (u, arc_index);
                if arc.to == sink {
                    return true;
                }
                queue.push_back(arc.to);
            }
        }

        false
    }

    // source side of a minimum cut, from residual reachability; meaningful
    // once `solve` has run
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        if source >= self.residual.num_nodes {
            return vec![source];
        }
        self.residual.reachable_from(source)
    }
}
