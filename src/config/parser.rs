use crate::config::Settings;
use crate::error::{Error, Result};
use std::{fs, path::Path};
use tracing::debug;

/// Reads settings from `path`, or returns the built-in defaults when no file
/// is given. Keys missing from the file keep their defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = parse_settings(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

fn parse_settings(content: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn empty_file_keeps_defaults() {
        let settings = parse_settings("").expect("parse empty config");
        assert_eq!(settings.pins.host, "zerokeep.vercel.app");
        assert_eq!(settings.pins.port, 443);
        assert_eq!(settings.pins.format, OutputFormat::Xml);
        assert_eq!((settings.icon.x, settings.icon.y), (0, 0));
    }

    #[test]
    fn partial_sections_override_only_given_keys() {
        let settings = parse_settings(
            r#"
            [icon]
            path = "res/icon.png"
            y = 3

            [pins]
            host = "example.org"
            format = "pin-set"
            expiration = "2027-01-01"
            "#,
        )
        .expect("parse config");

        assert_eq!(settings.icon.path, PathBuf::from("res/icon.png"));
        assert_eq!((settings.icon.x, settings.icon.y), (0, 3));
        assert_eq!(settings.pins.host, "example.org");
        assert_eq!(settings.pins.port, 443);
        assert_eq!(settings.pins.format, OutputFormat::PinSet);
        assert_eq!(settings.pins.expiration.as_deref(), Some("2027-01-01"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_settings("[pins]\nhostname = \"x\"\n").is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_settings(Some(Path::new("does/not/exist.toml")))
            .expect_err("missing config must fail");
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn no_file_means_defaults() {
        let settings = load_settings(None).expect("defaults");
        assert_eq!(settings.pins.openssl, PathBuf::from("openssl"));
    }
}
