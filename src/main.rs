#[macro_use] extern crate log;
extern crate simplelog;
extern crate serde_json;
extern crate kruskal_mst;

use clap::Parser;
use simplelog::*;
use std::io::{BufRead, BufReader, stdin};
use std::fs::File;

use kruskal_mst::KruskalMst;

/// Minimum spanning tree of a weighted undirected graph (Kruskal).
///
/// Input: a line `V E`, then E lines `a b w` with 0-based vertex ids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Read the graph from this file instead of stdin
	#[arg(short = 'i', long = "input")]
	input: Option<String>,

	/// Print the result as JSON
	#[arg(long = "json")]
	json: bool,

	/// Also write a debug log to this file
	#[arg(long = "log")]
	log: Option<String>,

	/// More stderr logging (-v info, -vv debug)
	#[arg(short = 'v', action = clap::ArgAction::Count)]
	verbose: u8,

	/// Dump the adjacency lists to stderr before computing
	#[arg(long = "show-graph")]
	show_graph: bool,
}

fn init_logging(args: &Args) {
	let level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		WriteLogger::new(level, Config::default(), std::io::stderr()),
	];
	if let Some(path) = &args.log {
		match File::create(path) {
			Ok(f) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), f)),
			Err(e) => eprintln!("cannot create log file {}: {}", path, e),
		}
	}
	let _ = CombinedLogger::init(loggers);
}

fn main() {
	let args = Args::parse();
	init_logging(&args);

	let reader: Box<dyn BufRead> = match &args.input {
		Some(path) => match File::open(path) {
			Ok(f) => Box::new(BufReader::new(f)),
			Err(e) => {
				error!("cannot open {}: {}", path, e);
				std::process::exit(1);
			}
		},
		None => Box::new(BufReader::new(stdin())),
	};
	let mut lines_iter = reader.lines().map_while(Result::ok);

	let graph = kruskal_mst::read_graph(&mut lines_iter);
	if args.show_graph {
		eprint!("{}", graph);
	}

	let mst = KruskalMst::new(&graph);
	if args.json {
		println!("{}", serde_json::to_string_pretty(&mst.to_json()).unwrap_or_default());
	} else {
		let stdout = std::io::stdout();
		if let Err(e) = kruskal_mst::write_plain(&mut stdout.lock(), &mst) {
			error!("cannot write result: {}", e);
			std::process::exit(1);
		}
	}
}
