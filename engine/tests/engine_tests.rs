use mst_engine::steps::{EdgePatch, Step, StepLog};
use mst_engine::{Algorithm, Color, Graph, MstRunner, Planner, RunState, VertexId};
use proptest::prelude::*;

/// 4 vertices A,B,C,D with A-B=1, B-C=2, A-C=3, C-D=4.
/// The unique MST is {A-B, B-C, C-D} with total weight 7.
fn diamond_graph() -> Graph {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0.0, 0.0);
    let b = graph.add_vertex(1.0, 0.0);
    let c = graph.add_vertex(1.0, 1.0);
    let d = graph.add_vertex(2.0, 1.0);
    graph.add_edge(a, b, 1);
    graph.add_edge(b, c, 2);
    graph.add_edge(a, c, 3);
    graph.add_edge(c, d, 4);
    graph
}

fn mst_pairs(runner: &MstRunner) -> Vec<(String, String, u32)> {
    runner
        .mst_edges()
        .iter()
        .map(|e| {
            (
                runner.graph().label_of(e.from),
                runner.graph().label_of(e.to),
                e.weight,
            )
        })
        .collect()
}

#[test]
fn test_prims_finds_the_diamond_mst() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Prims);
    runner.run_to_completion();

    assert_eq!(runner.total_weight(), 7);
    assert_eq!(
        mst_pairs(&runner),
        vec![
            ("A".into(), "B".into(), 1),
            ("B".into(), "C".into(), 2),
            ("C".into(), "D".into(), 4),
        ]
    );
    assert_eq!(runner.state(), RunState::Complete);
    assert!(runner
        .current_step_description()
        .unwrap()
        .contains("complete"));
}

#[test]
fn test_kruskals_finds_the_diamond_mst() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Kruskals);
    runner.run_to_completion();

    assert_eq!(runner.total_weight(), 7);
    assert_eq!(
        mst_pairs(&runner),
        vec![
            ("A".into(), "B".into(), 1),
            ("B".into(), "C".into(), 2),
            ("C".into(), "D".into(), 4),
        ]
    );
    assert_eq!(runner.state(), RunState::Complete);
}

#[test]
fn test_run_lifecycle_states() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Prims);
    assert_eq!(runner.state(), RunState::Idle);
    assert_eq!(runner.current_step_index(), None);

    runner.prepare_algorithm();
    assert_eq!(runner.state(), RunState::Planned);
    assert_eq!(runner.current_step_index(), None);

    assert!(runner.advance());
    assert_eq!(runner.state(), RunState::Stepping);
    assert_eq!(runner.current_step_index(), Some(0));

    while runner.advance() {}
    assert_eq!(runner.state(), RunState::Complete);
    assert_eq!(runner.current_step_index(), Some(runner.steps().len() - 1));
}

#[test]
fn test_advance_is_a_noop_at_the_terminal_step() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Kruskals);
    runner.run_to_completion();

    let index = runner.current_step_index();
    let weight = runner.total_weight();
    let edges = runner.mst_edges().to_vec();

    for _ in 0..3 {
        assert!(!runner.advance());
    }
    assert_eq!(runner.current_step_index(), index);
    assert_eq!(runner.total_weight(), weight);
    assert_eq!(runner.mst_edges(), edges.as_slice());
}

#[test]
fn test_planning_does_not_touch_the_live_graph() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Prims);
    runner.prepare_algorithm();

    assert!(!runner.steps().is_empty());
    for vertex in runner.graph().vertices() {
        assert_eq!(vertex.color, Color::Default);
        assert!(!vertex.in_mst);
    }
    for edge in runner.graph().edges() {
        assert_eq!(edge.color, Color::Default);
        assert!(!edge.in_mst);
    }
}

#[test]
fn test_reset_restores_initial_state() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Prims);
    runner.prepare_algorithm();
    for _ in 0..4 {
        runner.advance();
    }
    assert!(runner.total_weight() > 0);

    runner.reset();

    assert_eq!(runner.state(), RunState::Idle);
    assert_eq!(runner.current_step_index(), None);
    assert!(runner.mst_edges().is_empty());
    assert_eq!(runner.total_weight(), 0);
    assert_eq!(runner.current_step_description(), None);
    for vertex in runner.graph().vertices() {
        assert_eq!(vertex.color, Color::Default);
        assert!(!vertex.in_mst);
    }
}

#[test]
fn test_graph_edit_discards_the_planned_run() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Prims);
    runner.run_to_completion();

    let e = runner.graph_mut().add_vertex(5.0, 5.0);
    assert_eq!(e, VertexId(4));
    assert_eq!(runner.state(), RunState::Idle);
    assert!(runner.mst_edges().is_empty());
}

#[test]
fn test_algorithm_switch_discards_the_planned_run() {
    let mut runner = MstRunner::new(diamond_graph(), Algorithm::Prims);
    runner.run_to_completion();

    runner.set_algorithm(Algorithm::Kruskals);
    assert_eq!(runner.state(), RunState::Idle);
    assert_eq!(runner.total_weight(), 0);
    assert_eq!(runner.algorithm_name(), "Kruskal's");
}

#[test]
fn test_empty_graph_plans_an_empty_log() {
    let mut runner = MstRunner::new(Graph::new(), Algorithm::Prims);
    runner.prepare_algorithm();

    assert!(runner.steps().is_empty());
    assert!(!runner.advance());
    assert_eq!(runner.state(), RunState::Idle);

    let mut runner = MstRunner::new(Graph::new(), Algorithm::Kruskals);
    runner.prepare_algorithm();
    assert!(runner.steps().is_empty());
}

#[test]
fn test_prims_reports_disconnection_with_partial_mst() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0.0, 0.0);
    let b = graph.add_vertex(1.0, 0.0);
    graph.add_vertex(2.0, 0.0);
    graph.add_edge(a, b, 1);

    let mut runner = MstRunner::new(graph, Algorithm::Prims);
    runner.run_to_completion();

    assert!(runner
        .steps()
        .iter()
        .any(|s| s.description.contains("disconnected")));
    assert_eq!(runner.mst_edges().len(), 1);
    assert!(runner.mst_edges().len() < 2); // fewer than vertices - 1
    assert!(runner
        .current_step_description()
        .unwrap()
        .contains("2 vertices and 1 edges"));
}

#[test]
fn test_kruskals_reports_the_spanning_forest_when_disconnected() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0.0, 0.0);
    let b = graph.add_vertex(1.0, 0.0);
    graph.add_vertex(2.0, 0.0);
    graph.add_edge(a, b, 1);

    let mut runner = MstRunner::new(graph, Algorithm::Kruskals);
    runner.run_to_completion();

    assert_eq!(runner.mst_edges().len(), 1);
    let summary = runner.current_step_description().unwrap();
    assert!(summary.contains("disconnected"));
    assert!(summary.contains("1 edges"));
    assert!(summary.contains("2 components"));
}

#[test]
fn test_kruskals_skips_cycle_closing_edges() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0.0, 0.0);
    let b = graph.add_vertex(1.0, 0.0);
    let c = graph.add_vertex(2.0, 0.0);
    let d = graph.add_vertex(3.0, 0.0);
    graph.add_edge(a, b, 1);
    graph.add_edge(b, c, 2);
    graph.add_edge(a, c, 3); // closes a cycle, considered before C-D
    graph.add_edge(c, d, 10);

    let mut runner = MstRunner::new(graph, Algorithm::Kruskals);
    runner.run_to_completion();

    assert!(runner
        .steps()
        .iter()
        .any(|s| s.description.contains("would create a cycle")));
    assert_eq!(runner.total_weight(), 13);
    assert!(!runner.graph().edge(a, c).unwrap().in_mst);
}

#[test]
fn test_prims_tie_break_prefers_first_encountered_edge() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0.0, 0.0);
    let b = graph.add_vertex(1.0, 0.0);
    let c = graph.add_vertex(2.0, 0.0);
    graph.add_edge(a, b, 1);
    graph.add_edge(a, c, 1);

    let mut runner = MstRunner::new(graph, Algorithm::Prims);
    runner.run_to_completion();

    assert_eq!(
        mst_pairs(&runner),
        vec![
            ("A".into(), "B".into(), 1),
            ("A".into(), "C".into(), 1),
        ]
    );
}

#[test]
fn test_kruskals_tie_break_follows_insertion_order() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0.0, 0.0);
    let b = graph.add_vertex(1.0, 0.0);
    let c = graph.add_vertex(2.0, 0.0);
    graph.add_edge(c, b, 2);
    graph.add_edge(a, b, 2);
    graph.add_edge(a, c, 5);

    let mut runner = MstRunner::new(graph, Algorithm::Kruskals);
    runner.run_to_completion();

    assert_eq!(
        mst_pairs(&runner),
        vec![
            ("C".into(), "B".into(), 2),
            ("A".into(), "B".into(), 2),
        ]
    );
}

/// Planner that commits the same edge twice; the runner must count it once.
struct DoubleCommitPlanner;

impl Planner for DoubleCommitPlanner {
    fn name(&self) -> &'static str {
        "double-commit"
    }

    fn description(&self) -> &'static str {
        "commits one edge twice"
    }

    fn plan(&self, _graph: &Graph) -> StepLog {
        let mut log = StepLog::new();
        log.push(Step::note("first commit").with_edge(
            VertexId(0),
            VertexId(1),
            EdgePatch::committed(Color::InMst),
        ));
        log.push(Step::note("second commit").with_edge(
            VertexId(1),
            VertexId(0),
            EdgePatch::committed(Color::InMst),
        ));
        log
    }
}

#[test]
fn test_repeated_commit_of_one_edge_counts_once() {
    let mut graph = Graph::new();
    let a = graph.add_vertex(0.0, 0.0);
    let b = graph.add_vertex(1.0, 0.0);
    graph.add_edge(a, b, 6);

    let mut runner = MstRunner::with_planner(graph, Box::new(DoubleCommitPlanner));
    runner.prepare_algorithm();
    while runner.advance() {}

    assert_eq!(runner.mst_edges().len(), 1);
    assert_eq!(runner.total_weight(), 6);
}

proptest! {
    /// Both planners are correct MST algorithms, so on any connected graph
    /// they must agree on the total weight.
    #[test]
    fn test_prims_and_kruskals_agree_on_total_weight(
        parents in prop::collection::vec(0usize..64, 1..8),
        weights in prop::collection::vec(1u32..50, 16),
        extras in prop::collection::vec((0usize..64, 0usize..64, 1u32..50), 0..6),
    ) {
        let mut graph = Graph::new();
        let n = parents.len() + 1;
        let ids: Vec<_> = (0..n).map(|i| graph.add_vertex(i as f64, 0.0)).collect();

        // Random spanning tree keeps the graph connected.
        for (i, p) in parents.iter().enumerate() {
            let parent = p % (i + 1);
            graph.add_edge(ids[parent], ids[i + 1], weights[i % weights.len()]);
        }
        for (a, b, w) in &extras {
            let a = a % n;
            let b = b % n;
            if a != b {
                graph.add_edge(ids[a], ids[b], *w);
            }
        }

        let mut prim = MstRunner::new(graph.clone(), Algorithm::Prims);
        prim.run_to_completion();
        let mut kruskal = MstRunner::new(graph, Algorithm::Kruskals);
        kruskal.run_to_completion();

        prop_assert_eq!(prim.mst_edges().len(), n - 1);
        prop_assert_eq!(kruskal.mst_edges().len(), n - 1);
        prop_assert_eq!(prim.total_weight(), kruskal.total_weight());
    }
}
