use serde::{Deserialize, Serialize};

use crate::bus::TypeTag;

/// One decoded message-body value.
///
/// Container variants own their children directly, so a value is a complete
/// tree. The JSON representation is adjacently tagged, e.g.
/// `{"type": "uint32", "value": 7}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
	/// UTF-8 string.
	String(String),
	/// Type signature string.
	Signature(String),
	/// Object path string.
	ObjectPath(String),
	/// 16-bit signed integer.
	Int16(i16),
	/// 16-bit unsigned integer.
	#[serde(rename = "uint16")]
	UInt16(u16),
	/// 32-bit signed integer.
	Int32(i32),
	/// 32-bit unsigned integer.
	#[serde(rename = "uint32")]
	UInt32(u32),
	/// 64-bit signed integer.
	Int64(i64),
	/// 64-bit unsigned integer.
	#[serde(rename = "uint64")]
	UInt64(u64),
	/// IEEE 754 double.
	Double(f64),
	/// Unsigned byte.
	Byte(u8),
	/// Boolean.
	Boolean(bool),
	/// Container holding exactly one child of any kind.
	Variant(Box<Value>),
	/// Homogeneous sequence of children.
	Array(Vec<Value>),
	/// Heterogeneous sequence of children.
	Struct(Vec<Value>),
	/// Key followed by value.
	DictEntry(Box<[Value; 2]>),
	/// Value carrying a type code outside the closed set.
	///
	/// Kept so a decoding layer can hand forward-incompatible data to the
	/// printer, which renders a diagnostic instead of failing.
	Unknown(u8),
}

impl Value {
	/// Tag for this value's kind, or `None` for [`Value::Unknown`].
	pub fn type_tag(&self) -> Option<TypeTag> {
		match self {
			Self::String(_) => Some(TypeTag::String),
			Self::Signature(_) => Some(TypeTag::Signature),
			Self::ObjectPath(_) => Some(TypeTag::ObjectPath),
			Self::Int16(_) => Some(TypeTag::Int16),
			Self::UInt16(_) => Some(TypeTag::UInt16),
			Self::Int32(_) => Some(TypeTag::Int32),
			Self::UInt32(_) => Some(TypeTag::UInt32),
			Self::Int64(_) => Some(TypeTag::Int64),
			Self::UInt64(_) => Some(TypeTag::UInt64),
			Self::Double(_) => Some(TypeTag::Double),
			Self::Byte(_) => Some(TypeTag::Byte),
			Self::Boolean(_) => Some(TypeTag::Boolean),
			Self::Variant(_) => Some(TypeTag::Variant),
			Self::Array(_) => Some(TypeTag::Array),
			Self::Struct(_) => Some(TypeTag::Struct),
			Self::DictEntry(_) => Some(TypeTag::DictEntry),
			Self::Unknown(_) => None,
		}
	}

	/// Build a dict entry from its key and value.
	pub fn dict_entry(key: Value, value: Value) -> Value {
		Value::DictEntry(Box::new([key, value]))
	}
}
