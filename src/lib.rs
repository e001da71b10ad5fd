//! Public library API for rendering D-Bus messages as readable text.

/// Typed value model, sibling cursor, and recursive pretty-printer.
pub mod bus;
