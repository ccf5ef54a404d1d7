use crate::error::FlowError;
use num_traits::NumAssign;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
}

#[derive(Default)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    // parallel edges between the same ordered pair are kept as separate
    // edges, so their capacities add up
    pub fn add_directed_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<usize, FlowError> {
        for node in [from, to] {
            if node >= self.num_nodes {
                return Err(FlowError::NodeOutOfRange { node, num_nodes: self.num_nodes });
            }
        }
        if capacity < Flow::zero() {
            return Err(FlowError::NegativeCapacity { from, to });
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), capacity });

        self.num_edges += 1;
        Ok(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    // net flow leaving `source`, from the per-edge flows a solver wrote back
    pub fn flow_value(&self, source: usize) -> Flow {
        let mut outgoing = Flow::zero();
        let mut incoming = Flow::zero();
        for edge in self.edges.iter() {
            if edge.from == source {
                outgoing += edge.flow;
            }
            if edge.to == source {
                incoming += edge.flow;
            }
        }
        outgoing - incoming
    }
}
