use std::path::Path;

use eyre::{Context, OptionExt, Result};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
/// Prefix for environment variables that override settings, such as
/// `CUBEVIZ_DEFAULT_SCHEME`.
const ENV_PREFIX: &str = "CUBEVIZ";

/// User-configurable settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Name of the color scheme to use when none is specified.
    pub default_scheme: String,
    /// Face colors for each color scheme, in the order U, F, R, D, B, L.
    pub schemes: IndexMap<String, Vec<String>>,
}

impl Settings {
    /// Loads the built-in settings, then `user_file` if there is one, then
    /// environment variables.
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_SETTINGS_STR,
            SETTINGS_FILE_FORMAT,
        ));

        if let Some(path) = user_file {
            log::debug!("loading settings from {}", path.display());
            config = config.add_source(config::File::from(path).required(true));
        }

        config
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .and_then(|c| c.try_deserialize())
            .wrap_err("error loading settings")
    }

    /// Returns the colors of a scheme, looked up case-insensitively, or of
    /// the default scheme if `name` is `None`.
    pub fn scheme(&self, name: Option<&str>) -> Result<&[String]> {
        let name = name.unwrap_or(&self.default_scheme);
        self.schemes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, colors)| colors.as_slice())
            .ok_or_eyre(format!(
                "unknown color scheme {name:?} (available: {})",
                self.schemes.keys().join(", "),
            ))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_settings() {
        let defaults: Settings = serde_norway::from_str(DEFAULT_SETTINGS_STR).unwrap();
        assert_eq!("western", defaults.default_scheme);
        for (name, colors) in &defaults.schemes {
            assert_eq!(6, colors.len(), "scheme {name}");
        }

        let loaded = Settings::load(None).unwrap();
        assert_eq!(defaults.schemes, loaded.schemes);
    }

    #[test]
    fn test_scheme_lookup() {
        let settings: Settings = serde_norway::from_str(DEFAULT_SETTINGS_STR).unwrap();
        assert_eq!("white", settings.scheme(None).unwrap()[0]);
        assert_eq!("blue", settings.scheme(Some("Japanese")).unwrap()[3]);
        assert_eq!("yellow", settings.scheme(Some("WESTERN")).unwrap()[3]);

        let err = settings.scheme(Some("neon")).unwrap_err().to_string();
        assert!(err.contains("\"neon\""), "{err}");
        assert!(err.contains("western, japanese"), "{err}");
    }

    #[test]
    fn test_user_file_is_layered_over_defaults() {
        let path = std::env::temp_dir().join(format!("cubeviz_test_{}.yaml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "default_scheme: neon").unwrap();
        writeln!(file, "schemes:").unwrap();
        writeln!(file, "  neon: [lime, cyan, magenta, black, purple, pink]").unwrap();
        drop(file);

        let settings = Settings::load(Some(&path));
        std::fs::remove_file(&path).unwrap();
        let settings = settings.unwrap();

        assert_eq!("lime", settings.scheme(None).unwrap()[0]);
        assert_eq!("red", settings.scheme(Some("western")).unwrap()[2]);
    }

    #[test]
    fn test_missing_user_file_is_error() {
        let path = std::env::temp_dir().join("cubeviz_test_does_not_exist.yaml");
        assert!(Settings::load(Some(&path)).is_err());
    }
}
