/// Domain services - pure logic over domain objects, no I/O
mod dependency_partitioner;
mod tree_renderer;

pub use dependency_partitioner::DependencyPartitioner;
pub use tree_renderer::TreeRenderer;
