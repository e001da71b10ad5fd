mod cursor;
mod error;
mod message;
mod print;
mod tag;
mod value;

/// Cursor over decoded sibling chains.
pub use cursor::ValueCursor;
/// Error and result aliases.
pub use error::{BusError, Result};
/// Message header model and whole-message printing entry point.
pub use message::{Message, MessageKind, print_message};
/// Recursive value printing entry points and output modes.
pub use print::{RenderMode, print_value};
/// D-Bus type code enumeration.
pub use tag::TypeTag;
/// Decoded runtime value type.
pub use value::Value;
