use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::Graph;

/// Random undirected graph that is connected by construction.
///
/// A spanning path is laid over a shuffled vertex order, then `extra_edges`
/// more edges are added between uniformly chosen endpoints. Self-loops and
/// parallel edges can appear. Weights are drawn from `weights`.
pub fn random_connected_graph<R: Rng>(rng: &mut R, vertices: usize, extra_edges: usize,
                                      weights: Range<i64>) -> Graph<i64> {
    let mut g = Graph::new(vertices, false);
    if vertices == 0 {
        return g;
    }

    let mut order: Vec<usize> = (0..vertices).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        g.add_edge(pair[0], pair[1], rng.gen_range(weights.clone()));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        g.add_edge(a, b, rng.gen_range(weights.clone()));
    }
    g
}
