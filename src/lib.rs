#[macro_use] extern crate log;
extern crate rand;
extern crate serde_json;

mod edge;
mod graph;
mod disjoint_set;
mod min_heap;
mod kruskal;
pub mod input;
pub mod generate;
pub mod output;

pub use edge::{Weight, WeightedEdge};
pub use graph::{Graph, AdjIter};
pub use disjoint_set::DisjointSet;
pub use min_heap::MinHeap;
pub use kruskal::KruskalMst;
pub use input::read_graph;
pub use output::{format_weight, write_plain};
