use config::{Config, Environment, Map};
use std::borrow::Cow;
use tracing::{debug, warn};
use tss_domain::config::ScaffoldConfig;

/// Environment variable equivalent of `--iswebapp`.
pub const ENV_IS_WEBAPP: &str = "ISWEBAPP";
/// Environment variable equivalent of `--umdname`.
pub const ENV_UMD_NAME: &str = "UMDNAME";

// `Environment` lowercases variable names, so these are the keys the env vars land on.
const KEY_IS_WEBAPP: &str = "iswebapp";
const KEY_UMD_NAME: &str = "umdname";

/// Failure while layering the configuration sources. Never escapes [`resolve_config`].
#[tss_derive::tss_error]
pub enum ResolveError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Values given explicitly on the command line. `None` means "not given".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlagOverrides {
    pub is_webapp: Option<bool>,
    pub umd_name: Option<String>,
}

/// The recognised environment variables, captured once at startup.
///
/// Resolution reads from this snapshot only, never from the live process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvSnapshot(Map<String, String>);

impl EnvSnapshot {
    /// Captures [`ENV_IS_WEBAPP`] and [`ENV_UMD_NAME`] from the process environment.
    #[must_use]
    pub fn capture() -> Self {
        Self::from_pairs(std::env::vars().filter(|(key, _)| is_recognised(key)))
    }

    /// Builds a snapshot from explicit pairs; unrecognised names are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .filter(|(key, _)| is_recognised(key))
                .collect(),
        )
    }
}

fn is_recognised(key: &str) -> bool {
    key == ENV_IS_WEBAPP || key == ENV_UMD_NAME
}

/// Resolves the scaffold configuration: flag > environment > default, per option.
///
/// Total: malformed values are coerced (see [`coerce_bool`]) and a failure of the layered
/// builder falls back to the defaults with a warning.
#[must_use]
pub fn resolve_config(flags: &FlagOverrides, env: &EnvSnapshot) -> ScaffoldConfig {
    match layered(flags, env) {
        Ok(config) => {
            debug!(config = ?config, "Resolved scaffold configuration");
            config
        },
        Err(err) => {
            warn!(error = %err, "Falling back to default scaffold configuration");
            ScaffoldConfig::default()
        },
    }
}

fn layered(flags: &FlagOverrides, env: &EnvSnapshot) -> Result<ScaffoldConfig, ResolveError> {
    let defaults = ScaffoldConfig::default();

    let layers = Config::builder()
        .set_default(KEY_IS_WEBAPP, defaults.is_webapp)?
        .set_default(KEY_UMD_NAME, defaults.umd_name)?
        .add_source(Environment::default().ignore_empty(true).source(Some(env.0.clone())))
        .set_override_option(KEY_IS_WEBAPP, flags.is_webapp)?
        .set_override_option(KEY_UMD_NAME, flags.umd_name.clone())?
        .build()
        .context("Failed to build config layers")?;

    let is_webapp = layers.get_string(KEY_IS_WEBAPP).context("Reading iswebapp")?;
    let umd_name = layers.get_string(KEY_UMD_NAME).context("Reading umdname")?;

    Ok(ScaffoldConfig { is_webapp: coerce_bool(&is_webapp), umd_name })
}

/// Lenient boolean parsing for environment strings.
///
/// `false`, `0`, `no`, `off` and the empty string (case-insensitive, trimmed) are false;
/// everything else is true.
#[must_use]
pub fn coerce_bool(raw: &str) -> bool {
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "" | "false" | "0" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let config = resolve_config(&FlagOverrides::default(), &EnvSnapshot::default());
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn flag_beats_environment() {
        let flags = FlagOverrides { umd_name: Some("Foo".to_owned()), is_webapp: Some(false) };
        let config = resolve_config(&flags, &env(&[("UMDNAME", "Bar"), ("ISWEBAPP", "true")]));

        assert_eq!(config.umd_name, "Foo");
        assert!(!config.is_webapp);
    }

    #[test]
    fn environment_beats_default() {
        let config = resolve_config(
            &FlagOverrides::default(),
            &env(&[("UMDNAME", "Bar"), ("ISWEBAPP", "true")]),
        );

        assert_eq!(config.umd_name, "Bar");
        assert!(config.is_webapp);
    }

    #[test]
    fn options_resolve_independently() {
        let flags = FlagOverrides { is_webapp: Some(true), umd_name: None };
        let config = resolve_config(&flags, &env(&[("UMDNAME", "Bar")]));

        assert!(config.is_webapp);
        assert_eq!(config.umd_name, "Bar");
    }

    #[test]
    fn empty_environment_values_are_ignored() {
        let config = resolve_config(&FlagOverrides::default(), &env(&[("UMDNAME", "")]));
        assert_eq!(config.umd_name, "myApp");
    }

    #[test]
    fn malformed_booleans_are_coerced_not_rejected() {
        let config = resolve_config(&FlagOverrides::default(), &env(&[("ISWEBAPP", "maybe")]));
        assert!(config.is_webapp);

        let config = resolve_config(&FlagOverrides::default(), &env(&[("ISWEBAPP", "OFF")]));
        assert!(!config.is_webapp);
    }

    #[test]
    fn coerce_bool_table() {
        for falsy in ["", " ", "false", "FALSE", "0", "no", "off"] {
            assert!(!coerce_bool(falsy), "{falsy:?} should be false");
        }
        for truthy in ["true", "1", "yes", "on", "webapp"] {
            assert!(coerce_bool(truthy), "{truthy:?} should be true");
        }
    }

    #[test]
    fn snapshot_drops_unrelated_variables() {
        let snapshot = env(&[("PATH", "/usr/bin"), ("UMDNAME", "Bar")]);
        assert_eq!(snapshot.0.len(), 1);
    }
}
