use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// What an edge weight must support: copying, ordering, a zero and sums.
pub trait Weight: Copy + PartialOrd + Default + Add<Output = Self> + fmt::Display {}

impl<T> Weight for T
    where T: Copy + PartialOrd + Default + Add<Output = T> + fmt::Display {}

/// One weighted edge between two vertex ids.
///
/// Comparisons look at the weight only: two distinct edges with the same
/// weight compare equal. That is what the heap orders by, so do not use
/// `==` to test whether two edges join the same vertices.
#[derive(Debug, Clone, Copy)]
pub struct WeightedEdge<W> {
    a: usize,
    b: usize,
    weight: W,
}

impl<W: Copy> WeightedEdge<W> {
    pub fn new(a: usize, b: usize, weight: W) -> WeightedEdge<W> {
        WeightedEdge { a, b, weight }
    }

    pub fn endpoint_a(&self) -> usize {
        self.a
    }

    pub fn endpoint_b(&self) -> usize {
        self.b
    }

    /// Vertex this record was stored under in an adjacency list.
    pub fn from_vertex(&self) -> usize {
        self.a
    }

    pub fn to_vertex(&self) -> usize {
        self.b
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// The endpoint that is not `x`. Panics if `x` is neither endpoint.
    pub fn other(&self, x: usize) -> usize {
        assert!(x == self.a || x == self.b,
            "vertex {} is not an endpoint of edge {}-{}", x, self.a, self.b);
        if x == self.a { self.b } else { self.a }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl<W: PartialEq> PartialEq for WeightedEdge<W> {
    fn eq(&self, other: &WeightedEdge<W>) -> bool {
        self.weight == other.weight
    }
}

impl<W: PartialOrd> PartialOrd for WeightedEdge<W> {
    fn partial_cmp(&self, other: &WeightedEdge<W>) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }
}

impl<W: fmt::Display> fmt::Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}: {}", self.a, self.b, self.weight)
    }
}
