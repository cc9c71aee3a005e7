//! First-match resolution over a registry snapshot.
//!
//! Deciders are ORed: the scan stops at the first [`Decision::Match`] and the
//! remaining deciders are never evaluated. Order is the only tie-break. When
//! nothing matches the registry's base type is returned, which is a regular
//! result rather than a failure.

use crate::{Deciders, Decision, Registry, ResolveError, SealPolicy, VariantType};


/// Evaluates one registry snapshot against call arguments.
///
/// A resolver is cheap to create and holds no borrow of its registry. Deciders
/// registered after the resolver was created are not seen by it.
pub struct Resolver<A: 'static> {
	base: VariantType,
	deciders: Deciders<A>,
}

impl<A: 'static> Resolver<A> {
	/// Captures the base type and current deciders of `registry`.
	///
	/// Registries configured with [`SealPolicy::OnFirstResolve`] are sealed
	/// here, before the snapshot is taken.
	pub fn new(registry: &Registry<A>) -> Self {
		if registry.config().seal == SealPolicy::OnFirstResolve && !registry.is_sealed() {
			registry.seal();
		}
		Self {
			base: registry.base(),
			deciders: registry.deciders(),
		}
	}

	#[inline]
	pub fn base(&self) -> VariantType {
		self.base
	}

	/// Returns the type to instantiate for `args`.
	///
	/// # Errors
	///
	/// If a decider fails, resolution aborts with [`ResolveError::Decider`].
	/// Later deciders are not tried and the base type is not substituted.
	pub fn resolve(&self, args: &A) -> Result<VariantType, ResolveError> {
		for (index, decider) in self.deciders.iter().enumerate() {
			let decision = decider.decide(args).map_err(|source| {
				tracing::warn!(
					domain = "variants",
					base = %self.base,
					index,
					error = %source,
					"decider failed; aborting resolution",
				);
				ResolveError::Decider {
					base: self.base,
					index,
					source,
				}
			})?;

			if let Decision::Match(resolved) = decision {
				tracing::trace!(domain = "variants", base = %self.base, index, %resolved, "decider matched");
				return Ok(resolved);
			}
		}

		tracing::trace!(
			domain = "variants",
			base = %self.base,
			deciders = self.deciders.len(),
			"no decider matched; using base",
		);
		Ok(self.base)
	}
}
