use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Opaque identifier for a constructible variant.
///
/// Identity is the underlying [`TypeId`]; the name is only carried for
/// diagnostics and never participates in comparisons.
#[derive(Clone, Copy)]
pub struct VariantType {
	id: TypeId,
	name: &'static str,
}

impl VariantType {
	/// Returns the identifier for `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	pub fn id(self) -> TypeId {
		self.id
	}

	/// Fully qualified type name, as reported by [`std::any::type_name`].
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Returns true if this identifies `T`.
	pub fn is<T: ?Sized + 'static>(self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for VariantType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for VariantType {}

impl Hash for VariantType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl core::fmt::Debug for VariantType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("VariantType").field(&self.name).finish()
	}
}

impl core::fmt::Display for VariantType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Widget;
	struct AdminWidget;

	#[test]
	fn identity_follows_type() {
		assert_eq!(VariantType::of::<Widget>(), VariantType::of::<Widget>());
		assert_ne!(VariantType::of::<Widget>(), VariantType::of::<AdminWidget>());
		assert!(VariantType::of::<AdminWidget>().is::<AdminWidget>());
		assert!(!VariantType::of::<AdminWidget>().is::<Widget>());
		assert_eq!(VariantType::of::<Widget>().id(), std::any::TypeId::of::<Widget>());
	}

	#[test]
	fn display_uses_type_name() {
		let ty = VariantType::of::<Widget>();
		assert!(ty.to_string().ends_with("Widget"));
		assert_eq!(ty.to_string(), ty.name());
	}
}
