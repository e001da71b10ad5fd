//! Recursive pretty-printer for decoded value trees.
//!
//! Output is meant for human eyes, not re-parsing: string-like scalars and
//! printable byte runs are emitted between quotes without escaping embedded
//! `"` or `\` characters.

use std::fmt::Write;

use crate::bus::{BusError, Result, TypeTag, Value, ValueCursor};

/// Indent unit emitted once per nesting level.
const INDENT: &str = "   ";

/// Nesting ceiling for the recursive printer.
const MAX_PRINT_DEPTH: u32 = 64;

/// Starting capacity for byte-run accumulation.
const BYTE_RUN_CAPACITY: usize = 100;

/// Output annotation mode, fixed for a whole walk.
///
/// Only the three string-like kinds (string, signature, object path) are
/// sensitive to the mode; numeric and boolean scalars always carry their
/// kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
	/// Scalars are prefixed with their kind name; string-like kinds quoted.
	Annotated,
	/// String-like kinds print bare, unquoted values.
	Literal,
}

/// Print the value at `cursor` and every following sibling to `out`.
///
/// Each sibling renders on its own line (or block), indented by `depth`
/// repetitions of the indent unit. The cursor is left exhausted.
pub fn print_value<W: Write>(out: &mut W, cursor: &mut ValueCursor<'_>, mode: RenderMode, depth: u32) -> Result<()> {
	while let Some(value) = cursor.current() {
		print_single(out, value, mode, depth, false)?;
		cursor.advance();
	}
	Ok(())
}

/// Print one value, including everything nested below it.
///
/// `skip_indent` suppresses the first-line indentation when the parent has
/// already opened the line (the variant label case).
fn print_single<W: Write>(out: &mut W, value: &Value, mode: RenderMode, depth: u32, skip_indent: bool) -> Result<()> {
	if depth > MAX_PRINT_DEPTH {
		return Err(BusError::PrintDepthExceeded { max_depth: MAX_PRINT_DEPTH });
	}

	if !skip_indent {
		indent(out, depth)?;
	}

	match value {
		Value::String(text) => print_string_like(out, TypeTag::String, text, mode)?,
		Value::Signature(text) => print_string_like(out, TypeTag::Signature, text, mode)?,
		Value::ObjectPath(text) => print_string_like(out, TypeTag::ObjectPath, text, mode)?,
		Value::Int16(v) => writeln!(out, "int16 {v}")?,
		Value::UInt16(v) => writeln!(out, "uint16 {v}")?,
		Value::Int32(v) => writeln!(out, "int32 {v}")?,
		Value::UInt32(v) => writeln!(out, "uint32 {v}")?,
		Value::Int64(v) => writeln!(out, "int64 {v}")?,
		Value::UInt64(v) => writeln!(out, "uint64 {v}")?,
		Value::Double(v) => writeln!(out, "double {v}")?,
		Value::Byte(v) => writeln!(out, "byte {v}")?,
		Value::Boolean(v) => writeln!(out, "boolean {v}")?,
		Value::Variant(child) => {
			out.write_str("variant ")?;
			print_single(out, child, mode, depth + 1, true)?;
		}
		Value::Array(items) => print_array(out, items, mode, depth)?,
		Value::Struct(items) => {
			out.write_str("struct {\n")?;
			print_children(out, items, mode, depth, true)?;
			indent(out, depth)?;
			out.write_str("}\n")?;
		}
		Value::DictEntry(pair) => {
			out.write_str("dict entry(\n")?;
			print_children(out, &pair[..], mode, depth, false)?;
			indent(out, depth)?;
			out.write_str(")\n")?;
		}
		Value::Unknown(code) => writeln!(out, "(unknown arg type '{}')", char::from(*code))?,
	}
	Ok(())
}

fn print_array<W: Write>(out: &mut W, items: &[Value], mode: RenderMode, depth: u32) -> Result<()> {
	// Byte arrays get the string/hex rendering; checked per array node, so
	// only the level directly wrapping bytes takes the shortcut.
	if matches!(items.first(), Some(Value::Byte(_))) {
		let mut run = ValueCursor::new(items);
		return print_byte_run(out, &mut run, depth);
	}

	out.write_str("array [\n")?;
	print_children(out, items, mode, depth, true)?;
	indent(out, depth)?;
	out.write_str("]\n")?;
	Ok(())
}

/// Print container children at `depth + 1`.
///
/// With `separators`, a comma follows each non-final child's line, so it
/// opens the next line; dict entries never use separators.
fn print_children<W: Write>(out: &mut W, items: &[Value], mode: RenderMode, depth: u32, separators: bool) -> Result<()> {
	let mut cursor = ValueCursor::new(items);
	while let Some(child) = cursor.current() {
		print_single(out, child, mode, depth + 1, false)?;
		if cursor.advance() && separators {
			out.write_str(",")?;
		}
	}
	Ok(())
}

/// Consume a sibling chain of byte scalars and render it as one block.
///
/// The whole run is accumulated before rendering; a single byte outside the
/// printable range `[32, 126]` flips the run to hex output, but accumulation
/// continues so the full length is known.
fn print_byte_run<W: Write>(out: &mut W, cursor: &mut ValueCursor<'_>, depth: u32) -> Result<()> {
	let mut bytes: Vec<u8> = Vec::with_capacity(BYTE_RUN_CAPACITY);
	let mut all_printable = true;

	while let Some(value) = cursor.current() {
		let Value::Byte(byte) = value else { break };
		bytes.push(*byte);
		if !(32..=126).contains(byte) {
			all_printable = false;
		}
		cursor.advance();
	}

	if all_printable {
		// Every byte is printable ASCII, so this is valid UTF-8.
		writeln!(out, "array of bytes \"{}\"", String::from_utf8_lossy(&bytes))?;
		return Ok(());
	}

	print_hex(out, &bytes, depth)
}

fn print_hex<W: Write>(out: &mut W, bytes: &[u8], depth: u32) -> Result<()> {
	out.write_str("array of bytes [\n")?;
	indent(out, depth + 1)?;

	// Each byte takes three cells: two hexits and a separator.
	let columns = ((80 - (i64::from(depth) + 1) * 3) / 3).max(8) as usize;

	for (index, byte) in bytes.iter().enumerate() {
		write!(out, "{byte:02x}")?;
		if index + 1 == bytes.len() {
			continue;
		}
		if (index + 1) % columns == 0 {
			out.write_str("\n")?;
			indent(out, depth + 1)?;
		} else {
			out.write_str(" ")?;
		}
	}

	out.write_str("\n")?;
	indent(out, depth)?;
	out.write_str("]\n")?;
	Ok(())
}

fn print_string_like<W: Write>(out: &mut W, tag: TypeTag, text: &str, mode: RenderMode) -> Result<()> {
	match mode {
		RenderMode::Annotated => writeln!(out, "{} \"{text}\"", tag.name())?,
		RenderMode::Literal => writeln!(out, "{text}")?,
	}
	Ok(())
}

fn indent<W: Write>(out: &mut W, depth: u32) -> Result<()> {
	for _ in 0..depth {
		out.write_str(INDENT)?;
	}
	Ok(())
}
