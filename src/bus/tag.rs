/// Type codes for the closed set of value kinds the printer understands.
///
/// The codes mirror the D-Bus wire alphabet. End-of-sequence has no tag;
/// cursors report it by yielding `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
	/// UTF-8 string (`s`).
	String,
	/// Type signature string (`g`).
	Signature,
	/// Object path string (`o`).
	ObjectPath,
	/// 16-bit signed integer (`n`).
	Int16,
	/// 16-bit unsigned integer (`q`).
	UInt16,
	/// 32-bit signed integer (`i`).
	Int32,
	/// 32-bit unsigned integer (`u`).
	UInt32,
	/// 64-bit signed integer (`x`).
	Int64,
	/// 64-bit unsigned integer (`t`).
	UInt64,
	/// IEEE 754 double (`d`).
	Double,
	/// Unsigned byte (`y`).
	Byte,
	/// Boolean (`b`).
	Boolean,
	/// Single-child container (`v`).
	Variant,
	/// Homogeneous container (`a`).
	Array,
	/// Heterogeneous container (`r`, spelled `(` in signatures).
	Struct,
	/// Key/value pair container (`e`, spelled `{` in signatures).
	DictEntry,
}

impl TypeTag {
	/// Map a wire type code to its tag.
	///
	/// Accepts both the canonical struct/dict codes and their signature
	/// spellings. Returns `None` for codes outside the closed set.
	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			b's' => Some(Self::String),
			b'g' => Some(Self::Signature),
			b'o' => Some(Self::ObjectPath),
			b'n' => Some(Self::Int16),
			b'q' => Some(Self::UInt16),
			b'i' => Some(Self::Int32),
			b'u' => Some(Self::UInt32),
			b'x' => Some(Self::Int64),
			b't' => Some(Self::UInt64),
			b'd' => Some(Self::Double),
			b'y' => Some(Self::Byte),
			b'b' => Some(Self::Boolean),
			b'v' => Some(Self::Variant),
			b'a' => Some(Self::Array),
			b'r' | b'(' => Some(Self::Struct),
			b'e' | b'{' => Some(Self::DictEntry),
			_ => None,
		}
	}

	/// Canonical wire type code.
	pub fn code(self) -> u8 {
		match self {
			Self::String => b's',
			Self::Signature => b'g',
			Self::ObjectPath => b'o',
			Self::Int16 => b'n',
			Self::UInt16 => b'q',
			Self::Int32 => b'i',
			Self::UInt32 => b'u',
			Self::Int64 => b'x',
			Self::UInt64 => b't',
			Self::Double => b'd',
			Self::Byte => b'y',
			Self::Boolean => b'b',
			Self::Variant => b'v',
			Self::Array => b'a',
			Self::Struct => b'r',
			Self::DictEntry => b'e',
		}
	}

	/// Label used when annotating printed scalars.
	pub fn name(self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Signature => "signature",
			Self::ObjectPath => "object path",
			Self::Int16 => "int16",
			Self::UInt16 => "uint16",
			Self::Int32 => "int32",
			Self::UInt32 => "uint32",
			Self::Int64 => "int64",
			Self::UInt64 => "uint64",
			Self::Double => "double",
			Self::Byte => "byte",
			Self::Boolean => "boolean",
			Self::Variant => "variant",
			Self::Array => "array",
			Self::Struct => "struct",
			Self::DictEntry => "dict entry",
		}
	}

	/// Whether values of this kind hold child values.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Variant | Self::Array | Self::Struct | Self::DictEntry)
	}
}

#[cfg(test)]
mod tests {
	use super::TypeTag;

	const ALL: [TypeTag; 16] = [
		TypeTag::String,
		TypeTag::Signature,
		TypeTag::ObjectPath,
		TypeTag::Int16,
		TypeTag::UInt16,
		TypeTag::Int32,
		TypeTag::UInt32,
		TypeTag::Int64,
		TypeTag::UInt64,
		TypeTag::Double,
		TypeTag::Byte,
		TypeTag::Boolean,
		TypeTag::Variant,
		TypeTag::Array,
		TypeTag::Struct,
		TypeTag::DictEntry,
	];

	#[test]
	fn codes_round_trip() {
		for tag in ALL {
			assert_eq!(TypeTag::from_code(tag.code()), Some(tag));
		}
	}

	#[test]
	fn signature_spellings_map_to_container_tags() {
		assert_eq!(TypeTag::from_code(b'('), Some(TypeTag::Struct));
		assert_eq!(TypeTag::from_code(b'{'), Some(TypeTag::DictEntry));
	}

	#[test]
	fn unknown_codes_are_rejected() {
		assert_eq!(TypeTag::from_code(b'z'), None);
		assert_eq!(TypeTag::from_code(0), None);
	}

	#[test]
	fn only_the_four_container_kinds_are_containers() {
		let containers: Vec<TypeTag> = ALL.into_iter().filter(|tag| tag.is_container()).collect();
		assert_eq!(containers, vec![TypeTag::Variant, TypeTag::Array, TypeTag::Struct, TypeTag::DictEntry]);
	}
}
