use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::selector::Selector;
use crate::utils::path::find_config;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BumpSection {
    segment: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct LogSection {
    verbose: Option<bool>,
    color: Option<bool>,
}

/// On-disk shape of `.verbump.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigDoc {
    bump: BumpSection,
    log: LogSection,
}

/// Values taken from the command line (and its env fallbacks). They win over
/// anything in the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub segment: Option<String>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub no_color: bool,
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub selector: Selector,
    pub verbose: bool,
    pub color: bool,
    pub config_path: Option<PathBuf>,
}

/// Resolves settings from `overrides`, then the config file (explicit or
/// discovered from the cwd), then defaults.
pub fn load(overrides: &Overrides) -> Result<Settings> {
    let config_path = match &overrides.config {
        Some(path) => Some(path.clone()),
        None => find_config(),
    };
    let doc = match &config_path {
        Some(path) => read_config(path)?,
        None => ConfigDoc::default(),
    };
    resolve(overrides, doc, config_path)
}

fn read_config(path: &Path) -> Result<ConfigDoc> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

fn resolve(overrides: &Overrides, doc: ConfigDoc, config_path: Option<PathBuf>) -> Result<Settings> {
    let segment = overrides
        .segment
        .clone()
        .or(doc.bump.segment)
        .unwrap_or_default();
    let selector = segment
        .parse::<Selector>()
        .context("error parsing segment")?;

    Ok(Settings {
        selector,
        verbose: overrides.verbose || doc.log.verbose.unwrap_or(false),
        color: !overrides.no_color && doc.log.color.unwrap_or(true),
        config_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> ConfigDoc {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn defaults_to_auto() {
        let settings = resolve(&Overrides::default(), ConfigDoc::default(), None).unwrap();
        assert_eq!(settings.selector, Selector::Auto);
        assert!(!settings.verbose);
        assert!(settings.color);
    }

    #[test]
    fn file_values_apply() {
        let settings = resolve(
            &Overrides::default(),
            doc("[bump]\nsegment = \"minor\"\n[log]\nverbose = true\ncolor = false\n"),
            None,
        )
        .unwrap();
        assert_eq!(settings.selector, Selector::Index(1));
        assert!(settings.verbose);
        assert!(!settings.color);
    }

    #[test]
    fn command_line_wins_over_file() {
        let overrides = Overrides {
            segment: Some("pre".to_owned()),
            no_color: true,
            ..Overrides::default()
        };
        let settings = resolve(&overrides, doc("[bump]\nsegment = \"major\"\n"), None).unwrap();
        assert_eq!(settings.selector, Selector::Pre);
        assert!(!settings.color);
    }

    #[test]
    fn bad_selector_is_a_config_error() {
        let err = resolve(&Overrides::default(), doc("[bump]\nsegment = \"huge\"\n"), None)
            .unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "error parsing segment: unrecognized segment: 'huge'"
        );
    }

    #[test]
    fn reads_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[bump]\nsegment = \"patch\"\n").unwrap();

        let settings = load(&Overrides {
            config: Some(path.clone()),
            ..Overrides::default()
        })
        .unwrap();
        assert_eq!(settings.selector, Selector::Index(2));
        assert_eq!(settings.config_path, Some(path));
    }

    #[test]
    fn malformed_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[bump\nsegment = 1").unwrap();

        assert!(
            load(&Overrides {
                config: Some(path),
                ..Overrides::default()
            })
            .is_err()
        );
    }
}
