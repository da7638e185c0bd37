//! End-to-end tests: parse a textual graph definition, run the parallel
//! search, and check the resulting walk.

use coverwalk_core::{parse_graph, Error, SearchConfig, Solver, Vertex};

fn vertex(label: &str) -> Vertex {
    Vertex::new(label).unwrap()
}

#[test]
fn triangle_definition_end_to_end() {
    let graph = parse_graph("AB1\nBC1\nAC1\n").unwrap();
    let solver = Solver::new(graph);
    let solution = solver.solve(&vertex("A")).unwrap();

    assert_eq!(solution.weight(), 3);
    let trace: Vec<String> = solution.trace().iter().map(ToString::to_string).collect();
    assert_eq!(trace.first().map(String::as_str), Some("A"));
    assert_eq!(trace.len(), 4);
}

#[test]
fn comma_separated_definition_parses_and_solves() {
    let graph = parse_graph("A,B,2\nB,C,3\n").unwrap();
    let solution = Solver::new(graph).solve(&vertex("A")).unwrap();
    assert_eq!(solution.weight(), 5);
}

#[test]
fn definition_with_noise_lines_still_solves() {
    let text = "# dungeon week 14\nAB1\n\nBC1\nCA1\ntrailing note\n";
    let graph = parse_graph(text).unwrap();
    assert_eq!(graph.edge_count(), 3);

    let solution = Solver::new(graph).solve(&vertex("B")).unwrap();
    assert_eq!(solution.weight(), 3);
}

#[test]
fn solution_covers_every_edge_of_a_dense_map() {
    let text = "AB2\nBC2\nCD2\nDA2\nAC3\nBD3\n";
    let graph = parse_graph(text).unwrap();
    let solver = Solver::with_config(graph, SearchConfig::new().with_fixed_threads(4));
    let solution = solver.solve(&vertex("A")).unwrap();

    let graph = parse_graph(text).unwrap();
    assert!(graph.covers_all_edges(solution.walk()));
    assert!(solution.weight() <= graph.max_traversal_weight());
    assert!(solution.weight() >= graph.total_weight());
}

#[test]
fn repeated_parallel_runs_are_deterministic() {
    let text = "AB1\nBC1\nCD1\nDB1\nDE2\n";
    let graph = parse_graph(text).unwrap();
    let solver = Solver::with_config(graph, SearchConfig::new().with_fixed_threads(8));

    let first = solver.solve(&vertex("A")).unwrap();
    for _ in 0..10 {
        let run = solver.solve(&vertex("A")).unwrap();
        assert_eq!(run.weight(), first.weight());
        assert_eq!(run.walk().to_string(), first.walk().to_string());
    }
}

#[test]
fn start_vertex_outside_graph_is_rejected() {
    let graph = parse_graph("AB1\n").unwrap();
    let err = Solver::new(graph).solve(&vertex("Q")).unwrap_err();
    assert!(matches!(err, Error::UnknownVertex(_)));
}

#[test]
fn walk_continuity_holds_in_solver_output() {
    let graph = parse_graph("AB1\nBC4\nCA2\nCD1\n").unwrap();
    let solution = Solver::new(graph).solve(&vertex("D")).unwrap();

    let edges = solution.walk().edges();
    for pair in edges.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
}
