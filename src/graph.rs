use std::fmt;
use std::slice;

use crate::edge::WeightedEdge;

/// Sparse graph stored as adjacency lists.
///
/// An undirected edge `v-w` (v != w) is stored twice, once in each
/// endpoint's list with that endpoint as `from_vertex`. `edge_count`
/// counts `add_edge` calls, not stored records.
#[derive(Debug, Clone)]
pub struct Graph<W> {
    vertex_count: usize,
    edge_count: usize,
    directed: bool,
    adj: Vec<Vec<WeightedEdge<W>>>,
}

impl<W: Copy> Graph<W> {
    pub fn new(vertex_count: usize, directed: bool) -> Graph<W> {
        Graph {
            vertex_count,
            edge_count: 0,
            directed,
            adj: (0..vertex_count).map(|_| Vec::new()).collect(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Parallel edges are kept; no duplicate detection.
    pub fn add_edge(&mut self, v: usize, w: usize, weight: W) {
        self.check_vertex(v);
        self.check_vertex(w);

        self.adj[v].push(WeightedEdge::new(v, w, weight));
        if v != w && !self.directed {
            self.adj[w].push(WeightedEdge::new(w, v, weight));
        }
        self.edge_count += 1;
    }

    /// Linear scan of `v`'s adjacency list.
    pub fn has_edge(&self, v: usize, w: usize) -> bool {
        self.check_vertex(v);
        self.check_vertex(w);
        self.adj[v].iter().any(|e| e.other(v) == w)
    }

    /// Edges incident to `v` in insertion order. Each call starts a fresh pass.
    pub fn adj(&self, v: usize) -> AdjIter<W> {
        self.check_vertex(v);
        AdjIter { inner: self.adj[v].iter() }
    }

    pub fn degree(&self, v: usize) -> usize {
        self.check_vertex(v);
        self.adj[v].len()
    }

    fn check_vertex(&self, v: usize) {
        assert!(v < self.vertex_count,
            "vertex {} out of range for graph with {} vertices", v, self.vertex_count);
    }
}

/// Borrowing iterator over one vertex's adjacency list.
#[derive(Debug, Clone)]
pub struct AdjIter<'a, W: 'a> {
    inner: slice::Iter<'a, WeightedEdge<W>>,
}

impl<'a, W> Iterator for AdjIter<'a, W> {
    type Item = &'a WeightedEdge<W>;

    fn next(&mut self) -> Option<&'a WeightedEdge<W>> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, W> ExactSizeIterator for AdjIter<'a, W> {}

impl<W: Copy + fmt::Display> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (v, edges) in self.adj.iter().enumerate() {
            write!(f, "vertex {}:\t", v)?;
            for e in edges {
                write!(f, "( to:{},wt:{})\t", e.to_vertex(), e.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
