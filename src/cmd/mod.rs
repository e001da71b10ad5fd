/// Body-only rendering command.
pub mod body;
/// Full message rendering command.
pub mod print;

mod util;
