use std::path::PathBuf;

use busdoc::bus::{Result, print_message};

use crate::cmd::util::{load_message, mode_for};

/// Render a full message (header line and body) from a JSON description.
pub fn run(path: PathBuf, literal: bool) -> Result<()> {
	let message = load_message(&path)?;

	let mut rendered = String::new();
	print_message(&mut rendered, &message, mode_for(literal))?;
	print!("{rendered}");
	Ok(())
}
