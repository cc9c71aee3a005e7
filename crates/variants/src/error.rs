use crate::VariantType;

/// Registration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
	/// A decider was added after the registry left its setup phase.
	#[error("registry for {base} is sealed; deciders must be added before sealing")]
	Sealed { base: VariantType },
}

/// Resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
	/// A decider failed while being evaluated. No later decider ran.
	#[error("decider #{index} for {base} failed: {source}")]
	Decider {
		base: VariantType,
		/// Registration index of the failing decider.
		index: usize,
		#[source]
		source: anyhow::Error,
	},
}

impl ResolveError {
	/// Base type of the registry whose resolution failed.
	pub fn base(&self) -> VariantType {
		match self {
			Self::Decider { base, .. } => *base,
		}
	}
}
