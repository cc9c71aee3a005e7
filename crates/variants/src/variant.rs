use crate::{IntoDecision, Registry, RegistryError, ResolveError, VariantType};

/// A type that owns a process-wide decider registry.
///
/// Implement with [`variant!`](crate::variant). Each implementing type gets its
/// own registry: a subtype declared with `variant!` does not see the deciders of
/// the type it specializes, and vice versa.
pub trait Variant: 'static {
	/// Arguments the deciders receive at construction time.
	type Args: 'static;

	/// The registry attached to this type, created on first access.
	fn registry() -> &'static Registry<Self::Args>;

	fn variant_type() -> VariantType {
		VariantType::of::<Self>()
	}

	/// Adds a decider to this type's registry.
	///
	/// Multiple deciders are ORed; if none matches, `Self` is used.
	///
	/// # Errors
	///
	/// Returns [`RegistryError::Sealed`] once the registry has been sealed.
	fn build<F, R>(decider: F) -> Result<(), RegistryError>
	where
		F: Fn(&Self::Args) -> R + Send + Sync + 'static,
		R: IntoDecision,
	{
		Self::registry().add_decider(decider)
	}

	/// Returns the type to instantiate for `args`.
	///
	/// # Errors
	///
	/// Propagates the first decider failure.
	fn resolve(args: &Self::Args) -> Result<VariantType, ResolveError> {
		Self::registry().resolve(args)
	}

	/// Seals this type's registry. Returns true if it was not sealed before.
	fn seal() -> bool {
		Self::registry().seal()
	}
}

/// Implements [`Variant`] for a type, attaching a lazily created registry whose
/// base is the type itself.
///
/// ```
/// use morph_variants::{RegistryConfig, SealPolicy, Variant, variant};
///
/// struct Card;
/// struct Badge;
///
/// variant!(Card, args = (bool, u32));
/// variant!(Badge, args = String, config = RegistryConfig::with_seal(SealPolicy::OnFirstResolve));
///
/// assert!(Card::resolve(&(true, 3)).unwrap().is::<Card>());
/// assert!(Badge::resolve(&String::new()).unwrap().is::<Badge>());
/// assert!(Badge::registry().is_sealed());
/// ```
#[macro_export]
macro_rules! variant {
	($ty:ty, args = $args:ty $(, config = $config:expr)? $(,)?) => {
		impl $crate::Variant for $ty {
			type Args = $args;

			fn registry() -> &'static $crate::Registry<$args> {
				static REGISTRY: ::std::sync::LazyLock<$crate::Registry<$args>> =
					::std::sync::LazyLock::new(|| {
						$crate::Registry::with_config(
							$crate::VariantType::of::<$ty>(),
							$crate::__variant_opt!($({$config})?, $crate::RegistryConfig::default()),
						)
					});
				static CATALOGED: ::std::sync::Once = ::std::sync::Once::new();

				let registry: &'static $crate::Registry<$args> = &REGISTRY;
				CATALOGED.call_once(|| {
					$crate::catalog::register(registry);
				});
				registry
			}
		}
	};
}

/// Selects a provided value or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __variant_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
