#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "sceneref", about = "Unity scene reference and unused script tools")]
struct Cli {
	/// Raise log verbosity (repeatable). `SCENEREF_LOG` overrides it.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Write the unused-script CSV and per-scene hierarchy dumps.
	Analyze(cmd::analyze::Args),
	/// List scripts no scene uses.
	Unused(cmd::unused::Args),
	/// Print one scene's GameObject hierarchy.
	Tree(cmd::tree::Args),
	/// Print the declarations and serialized fields of one script.
	Fields(cmd::fields::Args),
	/// Print one scene's script bindings and field references.
	Graph(cmd::graph::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> sceneref::unity::Result<()> {
	match command {
		Commands::Analyze(args) => cmd::analyze::run(args),
		Commands::Unused(args) => cmd::unused::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Fields(args) => cmd::fields::run(args),
		Commands::Graph(args) => cmd::graph::run(args),
	}
}

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_env("SCENEREF_LOG").unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
