use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("node {node} is not in the graph ({num_nodes} nodes)")]
    NodeOutOfRange { node: usize, num_nodes: usize },
    #[error("negative capacity on edge {from} -> {to}")]
    NegativeCapacity { from: usize, to: usize },
    #[error("capacity sum out of the source does not fit in the flow type")]
    CapacityOverflow,
}
