//! Decider functions and their outcomes.

use std::sync::Arc;

use crate::VariantType;

/// Outcome of evaluating one decider against call arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
	/// The decider names the variant to instantiate. Resolution stops here.
	Match(VariantType),
	/// The decider has no opinion; resolution continues with the next one.
	NoMatch,
}

impl Decision {
	/// Shorthand for `Decision::Match(VariantType::of::<T>())`.
	pub fn to<T: ?Sized + 'static>() -> Self {
		Self::Match(VariantType::of::<T>())
	}

	pub fn is_match(&self) -> bool {
		matches!(self, Self::Match(_))
	}
}

impl From<Option<VariantType>> for Decision {
	fn from(value: Option<VariantType>) -> Self {
		value.map_or(Self::NoMatch, Self::Match)
	}
}

/// Return types accepted from decider closures.
///
/// Fallible deciders return `Result<_, E>`; the error aborts resolution.
pub trait IntoDecision {
	fn into_decision(self) -> anyhow::Result<Decision>;
}

impl IntoDecision for Decision {
	fn into_decision(self) -> anyhow::Result<Decision> {
		Ok(self)
	}
}

impl IntoDecision for Option<VariantType> {
	fn into_decision(self) -> anyhow::Result<Decision> {
		Ok(self.into())
	}
}

impl<T, E> IntoDecision for Result<T, E>
where
	T: IntoDecision,
	E: Into<anyhow::Error>,
{
	fn into_decision(self) -> anyhow::Result<Decision> {
		match self {
			Ok(out) => out.into_decision(),
			Err(err) => Err(err.into()),
		}
	}
}

type DeciderFn<A> = dyn Fn(&A) -> anyhow::Result<Decision> + Send + Sync;

/// A registered decider.
///
/// Cloning shares the underlying closure.
pub struct Decider<A: 'static> {
	func: Arc<DeciderFn<A>>,
}

impl<A: 'static> Decider<A> {
	pub fn new<F, R>(func: F) -> Self
	where
		F: Fn(&A) -> R + Send + Sync + 'static,
		R: IntoDecision,
	{
		Self {
			func: Arc::new(move |args: &A| func(args).into_decision()),
		}
	}

	/// Evaluates the decider. Errors come from the decider itself.
	#[inline]
	pub fn decide(&self, args: &A) -> anyhow::Result<Decision> {
		(self.func)(args)
	}

	/// Returns true if both handles share one closure.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.func, &other.func)
	}
}

impl<A: 'static> Clone for Decider<A> {
	fn clone(&self) -> Self {
		Self {
			func: self.func.clone(),
		}
	}
}

impl<A: 'static> core::fmt::Debug for Decider<A> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str("Decider(..)")
	}
}
