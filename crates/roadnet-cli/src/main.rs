use roadnet::{NodeId, RoadNetwork, RouteTable, plan_routes, sort_node_ids};
use serde::Serialize;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

const USAGE: &str = "Usage: roadnet-cli [--json] [--pretty]

Reads a road network from stdin (intersection count, then per-intersection
neighbor lists) and prints the shortest delivery routes from intersection 0.

  --json    emit the route report as a JSON array instead of text
  --pretty  pretty-print the JSON report (requires --json)";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Input(&'static str),
    Roadnet(roadnet::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Input(msg) => write!(f, "Error: {msg}"),
            CliError::Roadnet(err) => write!(f, "Error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<roadnet::Error> for CliError {
    fn from(value: roadnet::Error) -> Self {
        Self::Roadnet(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    json: bool,
    pretty: bool,
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    for arg in argv.iter().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            _ => return Err(CliError::Usage(USAGE)),
        }
    }
    if args.pretty && !args.json {
        return Err(CliError::Usage(USAGE));
    }
    Ok(args)
}

/// Whitespace-separated integer tokens, read line by line so prompts can be
/// answered interactively or piped in one go.
struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, CliError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CliError::Input("Unexpected end of input."));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn prompt_int<R: BufRead>(
    input: &mut TokenReader<R>,
    out: &mut impl Write,
    prompt: std::fmt::Arguments<'_>,
) -> Result<i64, CliError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let token = input.next_token()?;
    token
        .parse::<i64>()
        .map_err(|_| CliError::Input("Expected an integer."))
}

/// Prompt for the network description and build it, mirroring the classic
/// console flow: intersection count, then per-intersection neighbor lists.
fn read_network<R: BufRead>(
    input: &mut TokenReader<R>,
    out: &mut impl Write,
) -> Result<(RoadNetwork, u32), CliError> {
    let count = prompt_int(input, out, format_args!("Enter the number of intersections: "))?;
    if count <= 0 {
        return Err(CliError::Input("Number of intersections must be positive."));
    }
    if count > i64::from(u32::MAX) {
        return Err(CliError::Input("Number of intersections is too large."));
    }
    let count = count as u32;

    let mut network = RoadNetwork::new();
    for i in 0..count {
        network.add_intersection(i);
    }

    for i in 0..count {
        let neighbors = prompt_int(
            input,
            out,
            format_args!("Enter the number of neighbors for intersection {i}: "),
        )?;
        if neighbors < 0 || neighbors >= i64::from(count) {
            return Err(CliError::Input("Invalid number of neighbors."));
        }

        for _ in 0..neighbors {
            let neighbor = prompt_int(
                input,
                out,
                format_args!("  Enter neighbor ID for intersection {i}: "),
            )?;
            if neighbor < 0 || neighbor >= i64::from(count) {
                return Err(CliError::Input("Invalid neighbor ID."));
            }
            let neighbor = neighbor as u32;

            let distance = prompt_int(
                input,
                out,
                format_args!("  Enter distance to neighbor {neighbor}: "),
            )?;
            if distance <= 0 {
                return Err(CliError::Input("Distance must be positive."));
            }

            network.add_road(i, neighbor, distance as u64);
        }
    }

    Ok((network, count))
}

fn render_route(route: &[NodeId]) -> String {
    route
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn write_report(
    out: &mut impl Write,
    table: &RouteTable,
    locations: &[NodeId],
) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "Optimized Delivery Routes from Intersection 0:")?;
    for &location in locations {
        match table.distance(location) {
            None => writeln!(out, "To Intersection {location} -> Distance: Unreachable")?,
            Some(distance) => {
                let route = table.path_to(location)?;
                writeln!(
                    out,
                    "To Intersection {location} -> Distance: {distance} -> Path: {}",
                    render_route(&route)
                )?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RouteRow {
    intersection: NodeId,
    distance: Option<u64>,
    path: Option<Vec<NodeId>>,
}

fn write_json(
    out: &mut impl Write,
    table: &RouteTable,
    locations: &[NodeId],
    pretty: bool,
) -> Result<(), CliError> {
    let mut rows: Vec<RouteRow> = Vec::with_capacity(locations.len());
    for &location in locations {
        let path = match table.distance(location) {
            Some(_) => Some(table.path_to(location)?),
            None => None,
        };
        rows.push(RouteRow {
            intersection: location,
            distance: table.distance(location),
            path,
        });
    }

    let text = if pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };
    writeln!(out)?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let (network, count) = read_network(&mut input, &mut out)?;

    let mut locations: Vec<NodeId> = (0..count).collect();
    sort_node_ids(&mut locations);

    let table = plan_routes(&network, 0)?;

    if args.json {
        write_json(&mut out, &table, &locations, args.pretty)
    } else {
        write_report(&mut out, &table, &locations)
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
