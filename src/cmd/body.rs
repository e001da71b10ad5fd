use std::path::PathBuf;

use busdoc::bus::{Result, ValueCursor, print_value};

use crate::cmd::util::{load_message, mode_for};

/// Render only a message's body values, starting at depth zero.
pub fn run(path: PathBuf, literal: bool) -> Result<()> {
	let message = load_message(&path)?;

	let mut rendered = String::new();
	let mut cursor = ValueCursor::new(&message.body);
	print_value(&mut rendered, &mut cursor, mode_for(literal), 0)?;
	print!("{rendered}");
	Ok(())
}
