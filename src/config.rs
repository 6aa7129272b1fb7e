use super::Error;
use ::config::{ConfigError, Environment, Source};
use std::path::PathBuf;

/// Prefix of the environment variables read by `Config::from_env`, e.g.
/// `PACKET_DUMP_DEBUG` and `PACKET_DUMP_OUTPUT`.
pub const ENV_PREFIX: &str = "PACKET_DUMP";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Initial state of the debug flag.
    pub debug: bool,
    /// File the dumps are appended to. Standard output when unset.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: true,
            output: None,
        }
    }
}

impl Config {
    /// Defaults, then `PACKET_DUMP_*` environment variables, then `overrides`.
    pub fn from_env(overrides: &[(&str, &str)]) -> Result<Self, Error> {
        Config::load(Environment::with_prefix(ENV_PREFIX), overrides)
    }

    /// Defaults, then `source`, then `overrides` (usually command line
    /// arguments, as `(key, value)` pairs).
    pub fn load<S>(source: S, overrides: &[(&str, &str)]) -> Result<Self, Error>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = Config::default();
        let mut settings = ::config::Config::new();
        settings.set_default("debug", defaults.debug)?;
        settings.merge(source)?;
        for (key, value) in overrides {
            settings.set(key, *value)?;
        }

        let output = match settings.get_str("output") {
            Ok(path) => Some(PathBuf::from(path)),
            Err(ConfigError::NotFound(_)) => None,
            Err(err) => return Err(err.into()),
        };
        Ok(Config {
            debug: settings.get_bool("debug")?,
            output,
        })
    }
}
