use std::str::FromStr;
use std::fmt::Debug;

use crate::graph::Graph;

/// Splits the next line into whitespace-separated tokens and parses each.
/// Panics on a missing line or a token that does not parse; `line_no` is
/// the 1-based number of the line being read, used in the message.
pub fn parse_line_of<T, I>(lines_iter: &mut I, line_no: usize) -> Vec<T>
    where T: FromStr, T::Err: Debug, I: Iterator<Item = String>
{
    let line = match lines_iter.next() {
        Some(line) => line,
        None => panic!("line {}: unexpected end of input", line_no),
    };
    line.split_whitespace()
        .map(|tok| match tok.parse::<T>() {
            Ok(x) => x,
            Err(e) => panic!("line {}: cannot parse {:?}: {:?}", line_no, tok, e),
        })
        .collect()
}

/// Reads `V E` then `E` lines of `a b w` into an undirected graph.
/// Vertex ids are 0-based; an id outside `[0, V)` is a fatal input error.
pub fn read_graph<I: Iterator<Item = String>>(lines_iter: &mut I) -> Graph<f64> {
    let header: Vec<usize> = parse_line_of(lines_iter, 1);
    assert!(header.len() >= 2, "line 1: expected vertex and edge counts, got {:?}", header);
    let (v, e) = (header[0], header[1]);
    debug!("reading graph: {} vertices, {} edges", v, e);

    let mut g = Graph::new(v, false);
    for i in 0..e {
        let line_no = i + 2;
        let line = match lines_iter.next() {
            Some(line) => line,
            None => panic!("line {}: unexpected end of input, {} of {} edges read", line_no, i, e),
        };
        let toks: Vec<&str> = line.split_whitespace().collect();
        assert!(toks.len() >= 3, "line {}: expected `a b w`, got {:?}", line_no, line);
        let a = parse_vertex(toks[0], v, line_no);
        let b = parse_vertex(toks[1], v, line_no);
        let w = match toks[2].parse::<f64>() {
            Ok(w) => w,
            Err(err) => panic!("line {}: bad weight {:?}: {}", line_no, toks[2], err),
        };
        assert!(w.is_finite(), "line {}: weight {} is not a finite number", line_no, w);
        g.add_edge(a, b, w);
    }
    g
}

fn parse_vertex(tok: &str, v: usize, line_no: usize) -> usize {
    let x = match tok.parse::<usize>() {
        Ok(x) => x,
        Err(err) => panic!("line {}: bad vertex id {:?}: {}", line_no, tok, err),
    };
    assert!(x < v, "line {}: vertex {} out of range [0, {})", line_no, x, v);
    x
}
