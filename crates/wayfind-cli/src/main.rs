use serde::Serialize;
use std::io::Write;
use wayfind::graphlib::Graph;
use wayfind::{a_star, kruskal, read_edge_list, read_heuristic_table};

const DEFAULT_GRAPH_FILE: &str = "graph.txt";
const DEFAULT_HEURISTIC_FILE: &str = "heuristic.txt";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Wayfind(wayfind::Error),
    Json(serde_json::Error),
    NoPath { start: String, end: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Wayfind(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoPath { start, end } => write!(f, "no path found from {start} to {end}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<wayfind::Error> for CliError {
    fn from(value: wayfind::Error) -> Self {
        Self::Wayfind(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::NoPath { .. } | CliError::Wayfind(wayfind::Error::Disconnected { .. }) => 3,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Help,
    AStar,
    Mst,
    Show,
    Version,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Representation {
    #[default]
    EdgeList,
    AdjacencyList,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    positionals: Vec<String>,
    graph: Option<String>,
    heuristics: Option<String>,
    representation: Representation,
    json: bool,
    pretty: bool,
}

fn usage() -> &'static str {
    "wayfind-cli\n\
\n\
USAGE:\n\
  wayfind-cli astar [--graph <path>] [--heuristics <path>] [--json [--pretty]] <start> <end>\n\
  wayfind-cli mst [-e|--edgelist] [-a|--adjlist] [--json [--pretty]] -f|--file <path>\n\
  wayfind-cli show [-e|--edgelist] [-a|--adjlist] <path>\n\
  wayfind-cli --version\n\
\n\
NOTES:\n\
  - astar reads graph.txt and heuristic.txt from the working directory unless overridden.\n\
  - Graph files hold one `v1, v2, weight` edge per line; each line is an undirected edge.\n\
  - mst accepts -e/-a for symmetry with show; the report is the same either way.\n\
  - Heuristic files hold one `start end estimate` entry per line.\n\
  - Set WAYFIND_LOG (e.g. WAYFIND_LOG=debug) to control diagnostic logging on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--version" | "-V" => args.command = Command::Version,
            "astar" | "mst" | "show" if args.command == Command::Help => {
                args.command = match a.as_str() {
                    "astar" => Command::AStar,
                    "mst" => Command::Mst,
                    _ => Command::Show,
                };
            }
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "-e" | "--edgelist" => args.representation = Representation::EdgeList,
            "-a" | "--adjlist" => args.representation = Representation::AdjacencyList,
            "--graph" | "-f" | "--file" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.graph = Some(path.clone());
            }
            "--heuristics" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.heuristics = Some(path.clone());
            }
            "--" => {
                args.positionals.extend(it.by_ref().cloned());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            positional => args.positionals.push(positional.to_string()),
        }
    }

    let positionals_ok = match args.command {
        Command::Help => false,
        Command::Version => true,
        Command::AStar => args.positionals.len() == 2,
        Command::Mst => args.graph.is_some() && args.positionals.is_empty(),
        Command::Show => {
            if args.graph.is_none() && args.positionals.len() == 1 {
                args.graph = args.positionals.pop();
            }
            args.graph.is_some() && args.positionals.is_empty()
        }
    };
    if !positionals_ok {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("WAYFIND_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn load_graph(args: &Args) -> Result<Graph, CliError> {
    let path = args.graph.as_deref().unwrap_or(DEFAULT_GRAPH_FILE);
    tracing::debug!(path, command = ?args.command, "loading graph");
    Ok(read_edge_list(path)?)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Help => Err(CliError::Usage(usage())),
        Command::Version => {
            writeln!(std::io::stdout().lock(), "wayfind-cli {}", wayfind::VERSION)?;
            Ok(())
        }
        Command::AStar => {
            let [start, end] = args.positionals.as_slice() else {
                return Err(CliError::Usage(usage()));
            };
            let graph = load_graph(&args)?;
            let heuristics =
                read_heuristic_table(args.heuristics.as_deref().unwrap_or(DEFAULT_HEURISTIC_FILE))?;

            let Some(path) = a_star(&graph, &heuristics, start, end)? else {
                return Err(CliError::NoPath {
                    start: start.clone(),
                    end: end.clone(),
                });
            };

            if args.json {
                return write_json(&path, args.pretty);
            }
            let mut out = std::io::stdout().lock();
            for v in path.iter() {
                writeln!(out, "{v}")?;
            }
            Ok(())
        }
        Command::Mst => {
            let graph = load_graph(&args)?;
            let tree = kruskal(&graph)?;
            if args.json {
                return write_json(&tree, args.pretty);
            }
            writeln!(std::io::stdout().lock(), "{tree}")?;
            Ok(())
        }
        Command::Show => {
            let graph = load_graph(&args)?;
            let mut out = std::io::stdout().lock();
            match args.representation {
                Representation::EdgeList => writeln!(out, "{graph}")?,
                Representation::AdjacencyList => writeln!(out, "{}", graph.to_adjacency())?,
            }
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    init_tracing();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
