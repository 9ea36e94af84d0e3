use std::fmt;

use serde_json::{json, Value};

use crate::disjoint_set::DisjointSet;
use crate::edge::{Weight, WeightedEdge};
use crate::graph::Graph;
use crate::min_heap::MinHeap;

/// Minimum spanning tree (or forest) found by Kruskal's algorithm.
///
/// `edges` is in extraction order, so weights are non-decreasing. On a
/// disconnected graph fewer than `V-1` edges are accepted and the result is
/// a minimum spanning forest; check `is_spanning_tree`.
#[derive(Debug, Clone)]
pub struct KruskalMst<W> {
    vertex_count: usize,
    edges: Vec<WeightedEdge<W>>,
    total_weight: W,
}

impl<W: Weight> KruskalMst<W> {
    pub fn new(graph: &Graph<W>) -> KruskalMst<W> {
        let n = graph.vertex_count();
        let target = n.saturating_sub(1);

        // each undirected edge is stored under both endpoints; keep one copy
        let mut pq = MinHeap::with_capacity(graph.edge_count());
        for v in 0..n {
            for e in graph.adj(v) {
                if e.endpoint_a() < e.endpoint_b() {
                    pq.insert(*e);
                }
            }
        }
        debug!("kruskal: {} vertices, {} candidate edges", n, pq.len());

        let mut uf = DisjointSet::make_singletons(n);
        let mut edges: Vec<WeightedEdge<W>> = Vec::with_capacity(target);
        while !pq.is_empty() && edges.len() < target {
            let e = pq.extract_min();
            if uf.is_connected(e.endpoint_a(), e.endpoint_b()) {
                trace!("reject {} (cycle)", e);
                continue;
            }
            debug!("accept {}", e);
            uf.union(e.endpoint_a(), e.endpoint_b());
            edges.push(e);
        }

        let total_weight = edges.iter()
            .fold(W::default(), |acc, e| acc + e.weight());

        if edges.len() < target {
            warn!("graph is disconnected: accepted {} of {} edges, returning a spanning forest",
                edges.len(), target);
        }
        info!("mst over {} vertices: {} edges, total weight {}", n, edges.len(), total_weight);

        KruskalMst { vertex_count: n, edges, total_weight }
    }

    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<WeightedEdge<W>> {
        self.edges
    }

    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// True when the accepted edges connect every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    pub fn to_json(&self) -> Value
        where W: Into<Value>
    {
        let edges: Vec<Value> = self.edges.iter().map(|e| {
            let weight: Value = e.weight().into();
            json!({
                "a": e.endpoint_a(),
                "b": e.endpoint_b(),
                "weight": weight,
            })
        }).collect();
        let total: Value = self.total_weight.into();
        json!({
            "vertices": self.vertex_count,
            "edges": edges,
            "total_weight": total,
            "spanning": self.is_spanning_tree(),
        })
    }
}

impl<W: Weight> fmt::Display for KruskalMst<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.total_weight)?;
        for e in &self.edges {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}
