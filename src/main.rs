#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "busdoc", about = "D-Bus message rendering tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Print {
		path: PathBuf,
		#[arg(long)]
		literal: bool,
	},
	Body {
		path: PathBuf,
		#[arg(long)]
		literal: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> busdoc::bus::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Print { path, literal } => cmd::print::run(path, literal),
		Commands::Body { path, literal } => cmd::body::run(path, literal),
	}
}
