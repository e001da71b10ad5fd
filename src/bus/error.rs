use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BusError>;

/// Errors produced while loading and rendering messages.
#[derive(Debug, Error)]
pub enum BusError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Message description did not parse.
	#[error("malformed message: {0}")]
	MalformedMessage(#[from] serde_json::Error),
	/// Output sink rejected a write.
	#[error("sink write failed")]
	Sink(#[from] std::fmt::Error),
	/// Value tree nesting exceeded the printer's depth ceiling.
	#[error("print depth exceeded (max={max_depth})")]
	PrintDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
}
