use std::io::Read;
use std::path::Path;

use busdoc::bus::{Message, RenderMode, Result};

/// Load a JSON message description from a file, or stdin when `path` is `-`.
pub(crate) fn load_message(path: &Path) -> Result<Message> {
	let text = if path.as_os_str() == "-" {
		let mut buffer = String::new();
		std::io::stdin().read_to_string(&mut buffer)?;
		buffer
	} else {
		std::fs::read_to_string(path)?
	};

	let message = serde_json::from_str(&text)?;
	Ok(message)
}

/// Map the `--literal` flag to a render mode.
pub(crate) fn mode_for(literal: bool) -> RenderMode {
	if literal { RenderMode::Literal } else { RenderMode::Annotated }
}
