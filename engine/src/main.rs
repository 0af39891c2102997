use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use mst_engine::{export, Algorithm, Graph, MstRunner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("mst-engine")
        .version("0.1.0")
        .about("Stepwise MST visualization engine")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run an MST algorithm step by step")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .help("Path to a graph JSON document"),
                )
                .arg(
                    Arg::new("algorithm")
                        .long("algorithm")
                        .default_value("prims")
                        .value_parser(value_parser!(Algorithm))
                        .help("Algorithm to run: prims or kruskals"),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .default_value("0")
                        .value_parser(value_parser!(u64))
                        .help("Pause between steps, for paced display"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Run even if the graph is disconnected"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Emit the graph in a derived format")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .help("Path to a graph JSON document"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .value_parser(["json", "matrix", "edges"])
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a random connected graph")
                .arg(
                    Arg::new("vertices")
                        .long("vertices")
                        .default_value("6")
                        .value_parser(value_parser!(u32).range(1..))
                        .help("Number of vertices"),
                )
                .arg(
                    Arg::new("extra-edges")
                        .long("extra-edges")
                        .default_value("3")
                        .value_parser(value_parser!(u32))
                        .help("Edges beyond the spanning tree"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report graph size and connectivity")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .help("Path to a graph JSON document"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("run", args)) => {
            let graph = load_graph(args.get_one::<String>("input").unwrap())?;
            let algorithm = *args.get_one::<Algorithm>("algorithm").unwrap();
            let delay_ms = *args.get_one::<u64>("delay-ms").unwrap();
            let force = args.get_flag("force");

            if graph.vertex_count() < 2 {
                bail!("add at least 2 vertices to run the algorithm");
            }
            if !graph.is_connected() && !force {
                bail!("the graph must be connected to find an MST (pass --force to run anyway)");
            }

            run_stepwise(graph, algorithm, delay_ms);
        }
        Some(("export", args)) => {
            let graph = load_graph(args.get_one::<String>("input").unwrap())?;
            match args.get_one::<String>("format").unwrap().as_str() {
                "matrix" => print!("{}", export::adjacency_matrix(&graph)),
                "edges" => print!("{}", export::edge_list(&graph)),
                _ => println!("{}", graph.to_json()?),
            }
        }
        Some(("generate", args)) => {
            let vertices = *args.get_one::<u32>("vertices").unwrap();
            let extra_edges = *args.get_one::<u32>("extra-edges").unwrap();
            let seed = *args.get_one::<u64>("seed").unwrap();

            let graph = generate_graph(vertices, extra_edges, seed);
            println!("{}", graph.to_json()?);
        }
        Some(("check", args)) => {
            let graph = load_graph(args.get_one::<String>("input").unwrap())?;
            println!("Vertices: {}", graph.vertex_count());
            println!("Edges: {}", graph.edge_count());
            println!(
                "Connected: {}",
                if graph.is_connected() { "yes" } else { "no" }
            );
        }
        _ => {}
    }

    Ok(())
}

fn load_graph(path: &str) -> Result<Graph> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let graph = Graph::from_json(&json).with_context(|| format!("loading graph from {path}"))?;
    Ok(graph)
}

fn run_stepwise(graph: Graph, algorithm: Algorithm, delay_ms: u64) {
    let mut runner = MstRunner::new(graph, algorithm);
    println!("Current: {} Algorithm", algorithm);
    println!("{}", runner.algorithm_description());
    println!();

    runner.reset();
    runner.prepare_algorithm();

    loop {
        let more = runner.advance();
        if let Some(description) = runner.current_step_description() {
            println!("  {description}");
        }
        if !more {
            break;
        }
        if delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(delay_ms));
        }
    }

    println!();
    println!("MST edges:");
    for edge in runner.mst_edges() {
        println!(
            "  {} - {} ({})",
            runner.graph().label_of(edge.from),
            runner.graph().label_of(edge.to),
            edge.weight
        );
    }
    println!("Total Weight: {}", runner.total_weight());
}

/// Random spanning tree plus a few extra edges, laid out on a grid so the
/// document stays renderable by a canvas collaborator.
fn generate_graph(vertices: u32, extra_edges: u32, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();

    let ids: Vec<_> = (0..vertices)
        .map(|i| {
            let x = 100.0 + f64::from(i % 5) * 120.0;
            let y = 100.0 + f64::from(i / 5) * 120.0;
            graph.add_vertex(x, y)
        })
        .collect();

    for i in 1..ids.len() {
        let parent = rng.gen_range(0..i);
        graph.add_edge(ids[parent], ids[i], rng.gen_range(1..=20));
    }

    let mut added = 0;
    let mut attempts = 0;
    while added < extra_edges && attempts < extra_edges * 20 && ids.len() > 1 {
        attempts += 1;
        let a = rng.gen_range(0..ids.len());
        let b = rng.gen_range(0..ids.len());
        if a == b || graph.edge(ids[a], ids[b]).is_some() {
            continue;
        }
        graph.add_edge(ids[a], ids[b], rng.gen_range(1..=20));
        added += 1;
    }

    graph
}
