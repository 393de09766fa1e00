//! Solver configuration.
use serde::Deserialize;
use thiserror::Error;

/// Possible errors while reading or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error parsing configuration: {}", source)]
    Toml {
        #[from]
        source: toml::de::Error,
    },
    #[error("Invalid value for {}: {}", option, msg)]
    InvalidValue { option: &'static str, msg: String },
}

/// Configurable parameters used during solving and refutation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Reject binding a variable to a term containing it during unification. (Default: false)
    pub occurs_check: bool,

    /// Number of resolution rounds before giving up. (Default: 1000)
    pub max_rounds: usize,

    /// Assign pure literals during DPLL search. (Default: true)
    pub pure_literals: bool,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            occurs_check: false,
            max_rounds: 1000,
            pure_literals: true,
        }
    }
}

impl SolverConfig {
    /// Reads a complete configuration, using defaults for missing options.
    pub fn from_toml(input: &str) -> Result<SolverConfig, ConfigError> {
        let config: SolverConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::InvalidValue {
                option: "max_rounds",
                msg: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

/// Changes to a [`SolverConfig`].
///
/// Options set to `None` are left unchanged when applying the update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfigUpdate {
    pub occurs_check: Option<bool>,
    pub max_rounds: Option<usize>,
    pub pure_literals: Option<bool>,
}

impl SolverConfigUpdate {
    /// An update that changes nothing.
    pub fn new() -> SolverConfigUpdate {
        SolverConfigUpdate::default()
    }

    /// Reads an update from TOML, e.g. `max_rounds = 50`.
    pub fn from_toml(input: &str) -> Result<SolverConfigUpdate, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Combines two updates, options set in `other` take precedence.
    pub fn merge(&mut self, other: SolverConfigUpdate) {
        self.occurs_check = other.occurs_check.or(self.occurs_check);
        self.max_rounds = other.max_rounds.or(self.max_rounds);
        self.pure_literals = other.pure_literals.or(self.pure_literals);
    }

    /// Applies the update to a configuration.
    ///
    /// The configuration is left unchanged if the result would be invalid.
    pub fn apply(&self, config: &mut SolverConfig) -> Result<(), ConfigError> {
        let mut updated = config.clone();
        if let Some(occurs_check) = self.occurs_check {
            updated.occurs_check = occurs_check;
        }
        if let Some(max_rounds) = self.max_rounds {
            updated.max_rounds = max_rounds;
        }
        if let Some(pure_literals) = self.pure_literals {
            updated.pure_literals = pure_literals;
        }
        updated.validate()?;
        *config = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_options() -> Result<(), ConfigError> {
        assert_eq!(SolverConfig::from_toml("")?, SolverConfig::default());

        let config = SolverConfig::from_toml("occurs_check = true")?;
        assert!(config.occurs_check);
        assert_eq!(config.max_rounds, 1000);
        assert!(config.pure_literals);

        Ok(())
    }

    #[test]
    fn merged_updates() -> Result<(), ConfigError> {
        let mut update = SolverConfigUpdate::from_toml("max_rounds = 5\noccurs_check = true")?;
        update.merge(SolverConfigUpdate::from_toml("max_rounds = 7")?);

        let mut config = SolverConfig::default();
        update.apply(&mut config)?;

        assert_eq!(
            config,
            SolverConfig {
                occurs_check: true,
                max_rounds: 7,
                pure_literals: true,
            }
        );

        Ok(())
    }

    #[test]
    fn rejects_invalid_options() {
        match SolverConfigUpdate::from_toml("max_round = 5") {
            Err(ConfigError::Toml { .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
        match SolverConfigUpdate::from_toml("max_rounds = \"many\"") {
            Err(ConfigError::Toml { .. }) => (),
            other => panic!("unexpected {:?}", other),
        }

        let mut config = SolverConfig::default();
        let update = SolverConfigUpdate {
            max_rounds: Some(0),
            occurs_check: Some(true),
            ..SolverConfigUpdate::default()
        };
        match update.apply(&mut config) {
            Err(ConfigError::InvalidValue { option, .. }) => assert_eq!(option, "max_rounds"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(config, SolverConfig::default());
    }
}
