use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::bus::{RenderMode, Result, Value, ValueCursor, print_value};

/// The four message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
	/// Request addressed to a named object member.
	MethodCall,
	/// Successful reply to an earlier call.
	MethodReturn,
	/// Error reply to an earlier call.
	Error,
	/// Broadcast notification.
	Signal,
}

impl MessageKind {
	/// Label used in rendered header lines.
	pub fn name(self) -> &'static str {
		match self {
			Self::MethodCall => "method call",
			Self::MethodReturn => "method return",
			Self::Error => "error",
			Self::Signal => "signal",
		}
	}
}

/// One decoded message: routing header plus body values.
///
/// Header fields that do not apply to a kind are simply unused when
/// rendering; absent optional fields print as `(null ...)` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
	/// Message kind.
	pub kind: MessageKind,
	/// Unique connection name of the sender, when known.
	#[serde(default)]
	pub sender: Option<String>,
	/// Destination connection name, when addressed.
	#[serde(default)]
	pub destination: Option<String>,
	/// Sender-assigned serial number.
	#[serde(default)]
	pub serial: u32,
	/// Object path, for calls and signals.
	#[serde(default)]
	pub path: Option<String>,
	/// Interface name, for calls and signals.
	#[serde(default)]
	pub interface: Option<String>,
	/// Member name, for calls and signals.
	#[serde(default)]
	pub member: Option<String>,
	/// Serial of the message this one replies to.
	#[serde(default)]
	pub reply_serial: u32,
	/// Error name, for error replies.
	#[serde(default)]
	pub error_name: Option<String>,
	/// Body values in wire order.
	#[serde(default)]
	pub body: Vec<Value>,
}

/// Render a whole message: header line, then the body at depth 1.
///
/// Literal mode prints no header at all; the body follows the mode's
/// annotation rules either way.
pub fn print_message<W: Write>(out: &mut W, message: &Message, mode: RenderMode) -> Result<()> {
	if mode == RenderMode::Annotated {
		print_header(out, message)?;
	}
	let mut cursor = ValueCursor::new(&message.body);
	print_value(out, &mut cursor, mode, 1)
}

fn print_header<W: Write>(out: &mut W, message: &Message) -> Result<()> {
	write!(
		out,
		"{} sender={} -> dest={}",
		message.kind.name(),
		message.sender.as_deref().unwrap_or("(null sender)"),
		message.destination.as_deref().unwrap_or("(null destination)")
	)?;

	match message.kind {
		MessageKind::MethodCall | MessageKind::Signal => writeln!(
			out,
			" serial={} path={}; interface={}; member={}",
			message.serial,
			or_null(message.path.as_deref()),
			or_null(message.interface.as_deref()),
			or_null(message.member.as_deref())
		)?,
		MessageKind::MethodReturn => writeln!(out, " reply_serial={}", message.reply_serial)?,
		MessageKind::Error => writeln!(
			out,
			" error_name={} reply_serial={}",
			or_null(message.error_name.as_deref()),
			message.reply_serial
		)?,
	}
	Ok(())
}

fn or_null(value: Option<&str>) -> &str {
	value.unwrap_or("(null)")
}

#[cfg(test)]
mod tests {
	use super::{Message, MessageKind, print_message};
	use crate::bus::{RenderMode, Value};

	fn base_message(kind: MessageKind) -> Message {
		Message {
			kind,
			sender: Some(":1.42".to_owned()),
			destination: Some("org.example.Server".to_owned()),
			serial: 7,
			path: Some("/org/example".to_owned()),
			interface: Some("org.example.Player".to_owned()),
			member: Some("Play".to_owned()),
			reply_serial: 9,
			error_name: Some("org.example.Failed".to_owned()),
			body: Vec::new(),
		}
	}

	fn render(message: &Message, mode: RenderMode) -> String {
		let mut out = String::new();
		print_message(&mut out, message, mode).expect("print succeeds");
		out
	}

	#[test]
	fn method_call_header_carries_routing_fields() {
		let mut message = base_message(MessageKind::MethodCall);
		message.body = vec![Value::UInt32(75)];

		let rendered = render(&message, RenderMode::Annotated);
		assert_eq!(
			rendered,
			"method call sender=:1.42 -> dest=org.example.Server serial=7 path=/org/example; interface=org.example.Player; member=Play\n   uint32 75\n"
		);
	}

	#[test]
	fn signal_header_matches_call_shape() {
		let rendered = render(&base_message(MessageKind::Signal), RenderMode::Annotated);
		assert_eq!(
			rendered,
			"signal sender=:1.42 -> dest=org.example.Server serial=7 path=/org/example; interface=org.example.Player; member=Play\n"
		);
	}

	#[test]
	fn method_return_header_carries_reply_serial_only() {
		let rendered = render(&base_message(MessageKind::MethodReturn), RenderMode::Annotated);
		assert_eq!(rendered, "method return sender=:1.42 -> dest=org.example.Server reply_serial=9\n");
	}

	#[test]
	fn error_header_names_the_error() {
		let rendered = render(&base_message(MessageKind::Error), RenderMode::Annotated);
		assert_eq!(
			rendered,
			"error sender=:1.42 -> dest=org.example.Server error_name=org.example.Failed reply_serial=9\n"
		);
	}

	#[test]
	fn absent_header_fields_render_null_placeholders() {
		let mut message = base_message(MessageKind::MethodCall);
		message.sender = None;
		message.destination = None;
		message.interface = None;

		let rendered = render(&message, RenderMode::Annotated);
		assert_eq!(
			rendered,
			"method call sender=(null sender) -> dest=(null destination) serial=7 path=/org/example; interface=(null); member=Play\n"
		);
	}

	#[test]
	fn literal_mode_skips_the_header() {
		let mut message = base_message(MessageKind::MethodCall);
		message.body = vec![Value::String("hello".to_owned())];

		let rendered = render(&message, RenderMode::Literal);
		assert_eq!(rendered, "   hello\n");
	}

	#[test]
	fn message_description_round_trips_through_json() {
		let mut message = base_message(MessageKind::Signal);
		message.body = vec![Value::Variant(Box::new(Value::Boolean(true)))];

		let json = serde_json::to_string(&message).expect("message serializes");
		let back: Message = serde_json::from_str(&json).expect("message deserializes");
		assert_eq!(back.kind, MessageKind::Signal);
		assert_eq!(back.body, message.body);
	}

	#[test]
	fn optional_fields_default_when_absent_from_json() {
		let message: Message = serde_json::from_str(r#"{"kind": "method_return"}"#).expect("minimal message parses");
		assert_eq!(message.kind, MessageKind::MethodReturn);
		assert_eq!(message.reply_serial, 0);
		assert!(message.sender.is_none());
		assert!(message.body.is_empty());
	}
}
