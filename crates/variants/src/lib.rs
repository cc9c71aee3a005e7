//! Declarative variant resolution.
//!
//! A base type owns an ordered [`Registry`] of deciders. At construction time a
//! [`Resolver`] walks those deciders against the call arguments and returns the
//! first concrete [`VariantType`] a decider names, or the base type when none
//! match. Callers instantiate whatever type comes back; this crate never
//! constructs anything itself.
//!
//! # Lifecycle
//!
//! 1. Setup: deciders are added with [`Registry::add_decider`] (or
//!    [`Variant::build`] for types declared with [`variant!`]).
//! 2. Seal: [`Registry::seal`] or [`catalog::seal_all`] closes the write phase.
//! 3. Resolution: any number of concurrent [`Registry::resolve`] calls, each over
//!    a stable snapshot of the deciders.
//!
//! # Example
//!
//! ```
//! use morph_variants::{Decision, Variant, variant};
//!
//! struct UserBox;
//! struct AdminUserBox;
//!
//! struct UserArgs {
//! 	admin: bool,
//! }
//!
//! variant!(UserBox, args = UserArgs);
//!
//! UserBox::build(|args: &UserArgs| {
//! 	if args.admin { Decision::to::<AdminUserBox>() } else { Decision::NoMatch }
//! })
//! .unwrap();
//! UserBox::seal();
//!
//! let resolved = UserBox::resolve(&UserArgs { admin: true }).unwrap();
//! assert!(resolved.is::<AdminUserBox>());
//! assert!(UserBox::resolve(&UserArgs { admin: false }).unwrap().is::<UserBox>());
//! ```

pub mod catalog;
pub mod config;
mod decision;
mod error;
pub mod registry;
pub mod resolver;
mod ty;
mod variant;

pub use config::{RegistryConfig, SealPolicy};
pub use decision::{Decider, Decision, IntoDecision};
pub use error::{RegistryError, ResolveError};
pub use registry::{Deciders, Registry};
pub use resolver::Resolver;
pub use ty::VariantType;
pub use variant::Variant;
