use crate::bus::Value;

/// Cursor over one nesting level of decoded values.
///
/// Mirrors the D-Bus message iterator contract: inspect the current value,
/// advance to the next sibling at the same level, or obtain a fresh cursor
/// scoped to a container's children. Exhaustion is reported by [`Self::current`]
/// yielding `None`.
#[derive(Debug, Clone)]
pub struct ValueCursor<'a> {
	items: &'a [Value],
	pos: usize,
}

impl<'a> ValueCursor<'a> {
	/// Create a cursor positioned on the first value of a sibling chain.
	pub fn new(items: &'a [Value]) -> Self {
		Self { items, pos: 0 }
	}

	/// Current value, or `None` once the chain is exhausted.
	pub fn current(&self) -> Option<&'a Value> {
		self.items.get(self.pos)
	}

	/// Move to the next sibling. Returns whether a value remains.
	pub fn advance(&mut self) -> bool {
		if self.pos < self.items.len() {
			self.pos += 1;
		}
		self.pos < self.items.len()
	}

	/// Fresh cursor over the current container's children.
	///
	/// `None` when the chain is exhausted or the current value is a scalar.
	pub fn recurse(&self) -> Option<ValueCursor<'a>> {
		match self.current()? {
			Value::Variant(child) => Some(ValueCursor::new(std::slice::from_ref(child))),
			Value::Array(items) | Value::Struct(items) => Some(ValueCursor::new(items)),
			Value::DictEntry(pair) => Some(ValueCursor::new(&pair[..])),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::ValueCursor;
	use crate::bus::Value;

	#[test]
	fn advance_walks_siblings_then_exhausts() {
		let items = vec![Value::Byte(1), Value::Byte(2)];
		let mut cursor = ValueCursor::new(&items);

		assert_eq!(cursor.current(), Some(&Value::Byte(1)));
		assert!(cursor.advance());
		assert_eq!(cursor.current(), Some(&Value::Byte(2)));
		assert!(!cursor.advance());
		assert_eq!(cursor.current(), None);
		assert!(!cursor.advance());
	}

	#[test]
	fn recurse_scopes_to_container_children() {
		let items = vec![Value::dict_entry(Value::String("key".to_owned()), Value::UInt32(1))];
		let cursor = ValueCursor::new(&items);

		let mut sub = cursor.recurse().expect("dict entry recurses");
		assert_eq!(sub.current(), Some(&Value::String("key".to_owned())));
		assert!(sub.advance());
		assert_eq!(sub.current(), Some(&Value::UInt32(1)));
		assert!(!sub.advance());
	}

	#[test]
	fn recurse_on_scalars_and_exhausted_cursors_is_none() {
		let items = vec![Value::Boolean(true)];
		let mut cursor = ValueCursor::new(&items);

		assert!(cursor.recurse().is_none());
		cursor.advance();
		assert!(cursor.recurse().is_none());
	}

	#[test]
	fn variant_recursion_yields_single_child() {
		let items = vec![Value::Variant(Box::new(Value::Int64(-4)))];
		let mut sub = ValueCursor::new(&items).recurse().expect("variant recurses");

		assert_eq!(sub.current(), Some(&Value::Int64(-4)));
		assert!(!sub.advance());
	}
}
