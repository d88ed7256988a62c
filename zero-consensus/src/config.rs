//! Configuration for transaction verification.

use serde::{Deserialize, Serialize};

/// Configuration for the transaction verifier.
///
/// Every option here only affects observability. Verification results never
/// depend on the configuration.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Record how long each verification stage takes, as a
    /// `tx.verify.stage.seconds` histogram labelled with the stage.
    ///
    /// Stage checkpoints are always logged at `trace` level.
    pub stage_metrics: bool,
}

// we like our default configs to be explicit
#[allow(unknown_lints)]
#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            stage_metrics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use zero_test::prelude::*;

    #[test]
    fn empty_config_uses_defaults() -> Result<()> {
        zero_test::init();

        let config: Config = toml::from_str("")?;
        assert_eq!(config, Config::default());
        assert!(config.stage_metrics);

        Ok(())
    }

    #[test]
    fn config_parses_and_rejects_unknown_fields() -> Result<()> {
        zero_test::init();

        let config: Config = toml::from_str("stage_metrics = false")?;
        assert!(!config.stage_metrics);

        assert!(toml::from_str::<Config>("stage_metrcs = false").is_err());

        Ok(())
    }
}
