use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightroute_lib::{load_routes_path, plan_route, FlightGraph, PathAlgorithm, RouteRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight route planner")]
struct Cli {
    /// Path to the routes dataset CSV.
    #[arg(long)]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the fastest route between two airport codes.
    Route {
        /// Source airport code.
        #[arg(long)]
        from: String,
        /// Destination airport code.
        #[arg(long)]
        to: String,
        /// Run a single algorithm instead of comparing both.
        #[arg(long)]
        algorithm: Option<AlgorithmArg>,
        /// Emit the route plan(s) as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Report the fastest nonstop flight between two airport codes.
    Direct {
        /// Source airport code.
        #[arg(long)]
        from: String,
        /// Destination airport code.
        #[arg(long)]
        to: String,
    },
    /// Show an airport's summary and a sample of its outgoing routes.
    Inspect {
        /// Airport code.
        code: String,
        /// Maximum number of routes to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AlgorithmArg {
    Dijkstra,
    BellmanFord,
}

impl From<AlgorithmArg> for PathAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => PathAlgorithm::Dijkstra,
            AlgorithmArg::BellmanFord => PathAlgorithm::BellmanFord,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            json,
        } => handle_route(&cli.data, &from, &to, algorithm.map(Into::into), json),
        Command::Direct { from, to } => handle_direct(&cli.data, &from, &to),
        Command::Inspect { code, limit } => handle_inspect(&cli.data, &code, limit),
    }
}

fn load_graph(data: &Path) -> Result<FlightGraph> {
    let graph = load_routes_path(data)
        .with_context(|| format!("failed to load routes dataset from {}", data.display()))?;
    println!(
        "Graph ready. Airports: {} | Edges: {}",
        graph.airport_count(),
        graph.route_count()
    );
    Ok(graph)
}

fn handle_route(
    data: &Path,
    from: &str,
    to: &str,
    algorithm: Option<PathAlgorithm>,
    json: bool,
) -> Result<()> {
    let graph = load_graph(data)?;
    // The engine matches codes as stored; normalize on the caller side.
    let from = from.to_ascii_uppercase();
    let to = to.to_ascii_uppercase();

    let algorithms = match algorithm {
        Some(algorithm) => vec![algorithm],
        None => vec![PathAlgorithm::Dijkstra, PathAlgorithm::BellmanFord],
    };

    let mut plans = Vec::new();
    let mut elapsed = Vec::new();
    for algorithm in algorithms {
        let request = RouteRequest::new(from.clone(), to.clone()).with_algorithm(algorithm);
        let started = Instant::now();
        let plan = plan_route(&graph, &request)?;
        let took = started.elapsed();

        if !json {
            println!("\nRunning {algorithm}...");
            println!("Path found: {}", plan.codes.join(" -> "));
            println!("Total time: {:.2} hours", plan.total_hours);
            println!("Stops: {}", plan.stops());
            println!("Time taken: {} ms", took.as_millis());
        }
        plans.push(plan);
        elapsed.push(took);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    if let [dijkstra, bellman_ford] = plans.as_slice() {
        println!(
            "\nBoth algorithms found routes with {:.2} hours total time.",
            dijkstra.total_hours
        );
        println!("{} took {} ms", dijkstra.algorithm, elapsed[0].as_millis());
        println!(
            "{} took {} ms",
            bellman_ford.algorithm,
            elapsed[1].as_millis()
        );
    }

    Ok(())
}

fn handle_direct(data: &Path, from: &str, to: &str) -> Result<()> {
    let graph = load_graph(data)?;
    let from = from.to_ascii_uppercase();
    let to = to.to_ascii_uppercase();

    match graph.fastest_direct(&from, &to) {
        Some(hours) => println!("Fastest direct {from} -> {to}: {hours:.2} hours"),
        None => bail!("no direct route between {from} and {to}"),
    }
    Ok(())
}

fn handle_inspect(data: &Path, code: &str, limit: usize) -> Result<()> {
    let graph = load_graph(data)?;
    let code = code.to_ascii_uppercase();

    let Some(index) = graph.find_index(&code) else {
        bail!("airport not found: {code}");
    };
    let airport = graph.airport(index);

    println!(
        "Airport {} external_id={} outgoing_edges={}",
        airport.code,
        airport
            .external_id
            .map_or_else(|| "-".to_string(), |id| id.to_string()),
        airport.routes.len()
    );
    for route in airport.routes.iter().take(limit) {
        let hours = if route.hours.is_nan() {
            "?".to_string()
        } else {
            format!("{:.2}", route.hours)
        };
        println!(
            "  -> {}  airline={}  id={}  stops={}  equip={}  codeshare={}  est_time_hr={}",
            graph.airport(route.dest).code,
            route.airline,
            route.airline_id,
            route.stops,
            route.equipment,
            if route.codeshare { "Y" } else { "N" },
            hours
        );
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
