//! Per-type ordered decider registry.
//!
//! Readers never lock: the decider sequence is published through an
//! [`ArcSwap`] and every reader works on the snapshot it loaded. Writers
//! (`add_decider`, `seal`) serialize on a mutex so appends cannot be lost and a
//! seal cannot interleave with an in-flight append.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::catalog::RegistryHandle;
use crate::{
	Decider, IntoDecision, RegistryConfig, RegistryError, ResolveError, Resolver, VariantType,
};


/// Immutable snapshot of a registry's deciders, in registration order.
pub struct Deciders<A: 'static> {
	inner: Arc<Vec<Decider<A>>>,
}

impl<A: 'static> Clone for Deciders<A> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<A: 'static> std::ops::Deref for Deciders<A> {
	type Target = [Decider<A>];

	fn deref(&self) -> &[Decider<A>] {
		&self.inner
	}
}

impl<A: 'static> core::fmt::Debug for Deciders<A> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_list().entries(self.inner.iter()).finish()
	}
}

/// Ordered deciders for one base type.
///
/// Insertion order is preserved exactly; nothing is reordered or
/// deduplicated. An empty registry is valid and always resolves to
/// [`base`](Self::base).
pub struct Registry<A: 'static> {
	base: VariantType,
	config: RegistryConfig,
	deciders: ArcSwap<Vec<Decider<A>>>,
	sealed: AtomicBool,
	write: Mutex<()>,
}

impl<A: 'static> Registry<A> {
	/// Creates an empty registry with the default configuration.
	pub fn new(base: VariantType) -> Self {
		Self::with_config(base, RegistryConfig::default())
	}

	pub fn with_config(base: VariantType, config: RegistryConfig) -> Self {
		Self {
			base,
			config,
			deciders: ArcSwap::from_pointee(Vec::new()),
			sealed: AtomicBool::new(false),
			write: Mutex::new(()),
		}
	}

	/// The type resolution falls back to when no decider matches.
	#[inline]
	pub fn base(&self) -> VariantType {
		self.base
	}

	#[inline]
	pub fn config(&self) -> RegistryConfig {
		self.config
	}

	/// Appends a decider.
	///
	/// Registering an equivalent closure twice registers it twice.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::Sealed`] once the registry has been sealed.
	pub fn add_decider<F, R>(&self, decider: F) -> Result<(), RegistryError>
	where
		F: Fn(&A) -> R + Send + Sync + 'static,
		R: IntoDecision,
	{
		self.push(Decider::new(decider))
	}

	/// Appends an already constructed decider, e.g. one shared between
	/// several registries.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::Sealed`] once the registry has been sealed.
	pub fn push(&self, decider: Decider<A>) -> Result<(), RegistryError> {
		let _guard = self.write.lock();
		if self.sealed.load(Ordering::Acquire) {
			return Err(RegistryError::Sealed { base: self.base });
		}

		let cur = self.deciders.load_full();
		let mut next = Vec::with_capacity(cur.len() + 1);
		next.extend(cur.iter().cloned());
		next.push(decider);
		let index = next.len() - 1;
		self.deciders.store(Arc::new(next));

		tracing::debug!(domain = "variants", base = %self.base, index, "registered decider");
		Ok(())
	}

	/// Returns the current decider sequence.
	///
	/// The snapshot never changes; deciders added afterwards only show up in
	/// snapshots taken later.
	pub fn deciders(&self) -> Deciders<A> {
		Deciders {
			inner: self.deciders.load_full(),
		}
	}

	pub fn len(&self) -> usize {
		self.deciders.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.deciders.load().is_empty()
	}

	/// Ends the setup phase. Later registrations fail with
	/// [`RegistryError::Sealed`].
	///
	/// Returns true if this call sealed the registry, false if it already was.
	pub fn seal(&self) -> bool {
		let _guard = self.write.lock();
		let newly = !self.sealed.swap(true, Ordering::AcqRel);
		if newly {
			tracing::debug!(
				domain = "variants",
				base = %self.base,
				deciders = self.deciders.load().len(),
				"sealed registry",
			);
		}
		newly
	}

	#[inline]
	pub fn is_sealed(&self) -> bool {
		self.sealed.load(Ordering::Acquire)
	}

	/// Creates a resolver over the current snapshot.
	pub fn resolver(&self) -> Resolver<A> {
		Resolver::new(self)
	}

	/// Resolves `args` to the type that should be instantiated.
	///
	/// # Errors
	///
	/// Propagates the first decider failure; see [`Resolver::resolve`].
	pub fn resolve(&self, args: &A) -> Result<VariantType, ResolveError> {
		self.resolver().resolve(args)
	}
}

impl<A: 'static> core::fmt::Debug for Registry<A> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registry")
			.field("base", &self.base)
			.field("config", &self.config)
			.field("deciders", &self.len())
			.field("sealed", &self.is_sealed())
			.finish()
	}
}

impl<A: 'static> RegistryHandle for Registry<A> {
	fn base(&self) -> VariantType {
		self.base
	}

	fn seal(&self) -> bool {
		Registry::seal(self)
	}

	fn is_sealed(&self) -> bool {
		Registry::is_sealed(self)
	}

	fn decider_count(&self) -> usize {
		self.len()
	}
}
