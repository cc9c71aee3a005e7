//! Process-wide index of declared registries.
//!
//! Registries created through [`variant!`](crate::variant) record themselves
//! here on first access, which lets setup code close the write phase for all
//! of them at once with [`seal_all`]. Once [`seal_all`] has run, registries
//! recorded afterwards are sealed as they are recorded, so a type nobody had
//! touched yet cannot start accepting deciders later.

use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::VariantType;

/// Type-erased view of a [`Registry`](crate::Registry), independent of its
/// argument type.
pub trait RegistryHandle: Send + Sync {
	fn base(&self) -> VariantType;
	fn seal(&self) -> bool;
	fn is_sealed(&self) -> bool;
	fn decider_count(&self) -> usize;
}

#[derive(Default)]
struct Catalog {
	/// Every recorded registry, in recording order.
	registries: Vec<&'static dyn RegistryHandle>,
	/// Addresses of `registries`.
	addrs: HashSet<usize>,
	/// First registry recorded for each base type.
	by_type: HashMap<VariantType, &'static dyn RegistryHandle>,
	order: Vec<VariantType>,
	all_sealed: bool,
}

static CATALOG: LazyLock<RwLock<Catalog>> = LazyLock::new(Default::default);

fn addr(registry: &'static dyn RegistryHandle) -> usize {
	registry as *const dyn RegistryHandle as *const () as usize
}

/// Records `registry`.
///
/// Registries are identified by address, so several registries sharing one
/// base type are all recorded (and all sealed by [`seal_all`]); lookups by type
/// return the first one. Returns false if this exact registry was already
/// recorded. If [`seal_all`] already ran, the registry is sealed here.
pub fn register(registry: &'static dyn RegistryHandle) -> bool {
	let base = registry.base();
	let mut catalog = CATALOG.write();
	if !catalog.addrs.insert(addr(registry)) {
		return false;
	}

	catalog.registries.push(registry);
	if catalog.by_type.contains_key(&base) {
		tracing::warn!(domain = "variants", %base, "several registries share a base type");
	} else {
		catalog.by_type.insert(base, registry);
		catalog.order.push(base);
	}

	if catalog.all_sealed {
		registry.seal();
	}
	tracing::debug!(domain = "variants", %base, sealed = registry.is_sealed(), "cataloged registry");
	true
}

/// Base types of all recorded registries, in the order they were recorded.
pub fn declared() -> Vec<VariantType> {
	CATALOG.read().order.clone()
}

pub fn is_declared(ty: VariantType) -> bool {
	CATALOG.read().by_type.contains_key(&ty)
}

/// First registry recorded for `ty`.
pub fn get(ty: VariantType) -> Option<&'static dyn RegistryHandle> {
	CATALOG.read().by_type.get(&ty).copied()
}

/// Seals every recorded registry, and every registry recorded from now on.
/// Returns how many already-recorded registries were not sealed before.
pub fn seal_all() -> usize {
	let handles = {
		let mut catalog = CATALOG.write();
		catalog.all_sealed = true;
		catalog.registries.clone()
	};

	let sealed = handles.iter().filter(|registry| registry.seal()).count();
	tracing::debug!(domain = "variants", registries = handles.len(), sealed, "sealed catalog");
	sealed
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Registry;

	struct Cataloged;
	struct Twice;
	struct Missing;

	fn leak(base: VariantType) -> &'static Registry<()> {
		Box::leak(Box::new(Registry::new(base)))
	}

	#[test]
	fn register_records_base_type() {
		let ty = VariantType::of::<Cataloged>();
		assert!(register(leak(ty)));
		assert!(is_declared(ty));
		assert!(declared().contains(&ty));
		assert_eq!(get(ty).map(|r| r.base()), Some(ty));
	}

	#[test]
	fn same_registry_is_recorded_once() {
		let ty = VariantType::of::<Twice>();
		let first = leak(ty);
		first.add_decider(|_: &()| None::<VariantType>).unwrap();

		assert!(register(first));
		assert!(!register(first));
		assert!(register(leak(ty)));

		assert_eq!(declared().iter().filter(|t| **t == ty).count(), 1);
		let found = get(ty).unwrap();
		assert_eq!(found.decider_count(), 1);
		assert!(!found.is_sealed());
	}

	#[test]
	fn unknown_type_is_absent() {
		assert!(!is_declared(VariantType::of::<Missing>()));
		assert!(get(VariantType::of::<Missing>()).is_none());
	}
}
