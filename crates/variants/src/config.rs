//! Registry configuration.
//!
//! Hosts that keep their settings in a config file can embed
//! [`RegistryConfig`] directly; every field has a default.

use serde::{Deserialize, Serialize};

/// When a registry stops accepting deciders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SealPolicy {
	/// Only an explicit [`Registry::seal`](crate::Registry::seal) (or
	/// [`catalog::seal_all`](crate::catalog::seal_all)) seals.
	#[default]
	Manual,
	/// The first resolution seals the registry before it scans.
	OnFirstResolve,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RegistryConfig {
	pub seal: SealPolicy,
}

impl RegistryConfig {
	pub const fn with_seal(seal: SealPolicy) -> Self {
		Self { seal }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_kebab_case() {
		let config: RegistryConfig = toml::from_str(r#"seal = "on-first-resolve""#).unwrap();
		assert_eq!(config.seal, SealPolicy::OnFirstResolve);
	}

	#[test]
	fn missing_fields_use_defaults() {
		let config: RegistryConfig = toml::from_str("").unwrap();
		assert_eq!(config, RegistryConfig::default());
		assert_eq!(config.seal, SealPolicy::Manual);
	}

	#[test]
	fn serializes_round_trip() {
		let config = RegistryConfig::with_seal(SealPolicy::OnFirstResolve);
		let text = toml::to_string(&config).unwrap();
		assert!(text.contains(r#"seal = "on-first-resolve""#));
		assert_eq!(toml::from_str::<RegistryConfig>(&text).unwrap(), config);
	}

	#[test]
	fn unknown_policy_is_rejected() {
		assert!(toml::from_str::<RegistryConfig>(r#"seal = "never""#).is_err());
	}
}
