/// End-to-end scenarios: fixed graphs with known MST weights, read through
/// the text reader and run through the binary.
use std::io::Write;
use std::process::{Command, Stdio};

use kruskal_mst::{Graph, KruskalMst};
use pretty_assertions::assert_eq;

const SEVEN_VERTEX_INPUT: &str = "7 9
0 1 28.01
1 2 16.01
1 6 14.01
2 3 12.01
3 4 22.01
3 6 18.01
4 5 25.01
4 6 24.01
0 5 10.01
";

fn read(text: &str) -> Graph<f64> {
    let mut lines = text.lines().map(String::from);
    kruskal_mst::read_graph(&mut lines)
}

fn run_binary(args: &[&str], stdin_text: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kruskal_mst"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start kruskal_mst");
    child.stdin.take().unwrap().write_all(stdin_text.as_bytes()).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn test_seven_vertex_graph() {
    let g = read(SEVEN_VERTEX_INPUT);
    assert_eq!(g.edge_count(), 9);

    let mst = KruskalMst::new(&g);
    assert_eq!(mst.edges().len(), 6);
    assert!((mst.total_weight() - 99.06).abs() < 1e-9);

    let picked: Vec<String> = mst.edges().iter().map(|e| e.to_string()).collect();
    assert_eq!(picked, vec![
        "0-5: 10.01", "2-3: 12.01", "1-6: 14.01",
        "1-2: 16.01", "3-4: 22.01", "4-5: 25.01",
    ]);
}

#[test]
fn test_four_vertex_graph_from_one_based_ids() {
    let one_based = [(1, 2, 2.0), (1, 3, 2.0), (1, 4, 3.0), (2, 3, 4.0), (3, 4, 3.0)];
    let mut g = Graph::new(4, false);
    for &(a, b, w) in one_based.iter() {
        g.add_edge(a - 1, b - 1, w);
    }

    let mst = KruskalMst::new(&g);
    assert_eq!(mst.total_weight(), 7.0);
    let weights: Vec<f64> = mst.edges().iter().map(|e| e.weight()).collect();
    assert_eq!(weights, vec![2.0, 2.0, 3.0]);
}

#[test]
fn test_binary_plain_output() {
    let out = run_binary(&[], "4 5\n0 1 2\n0 2 2\n0 3 3\n1 2 4\n2 3 3\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "7");
    for line in &lines[1..] {
        assert!(line.contains('-') && line.contains(": "), "bad edge line {:?}", line);
    }
}

#[test]
fn test_binary_json_output() {
    let out = run_binary(&["--json"], SEVEN_VERTEX_INPUT);
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(doc["vertices"], 7);
    assert_eq!(doc["edges"].as_array().unwrap().len(), 6);
    assert_eq!(doc["spanning"], true);
    assert!((doc["total_weight"].as_f64().unwrap() - 99.06).abs() < 1e-9);
}

#[test]
fn test_binary_disconnected_input() {
    let out = run_binary(&[], "4 2\n0 1 1.5\n2 3 2.5\n");
    assert_eq!(out, "4\n0-1: 1.5\n2-3: 2.5\n");
}

#[test]
fn test_binary_plain_output_seven_vertices() {
    let out = run_binary(&[], SEVEN_VERTEX_INPUT);
    assert_eq!(out, "99.06
0-5: 10.01
2-3: 12.01
1-6: 14.01
1-2: 16.01
3-4: 22.01
4-5: 25.01
");
}

#[test]
fn test_binary_rejects_nan_weight() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kruskal_mst"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start kruskal_mst");
    child.stdin.take().unwrap().write_all(b"3 3\n0 1 NaN\n1 2 1\n0 2 2\n").unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(!out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "");
}

#[test]
fn test_binary_warns_once_on_disconnected_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kruskal_mst"))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start kruskal_mst");
    child.stdin.take().unwrap().write_all(b"4 2\n0 1 1.5\n2 3 2.5\n").unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    let warnings = stderr.lines().filter(|l| l.contains("spanning forest")).count();
    assert_eq!(warnings, 1, "stderr was {:?}", stderr);
}
