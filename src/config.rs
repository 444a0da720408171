use crate::consts;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Match settings read from a configuration file.  The file must hold a
/// single JSON object.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub(crate) struct Config {
    /// Number of apples on the board at once
    pub(crate) max_apples: usize,

    /// Number of lives at the start of a match
    pub(crate) lives: u32,

    /// Length of the snake when a match starts and after each lost life
    pub(crate) starting_length: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_apples: consts::DEFAULT_MAX_APPLES,
            lives: consts::DEFAULT_LIVES,
            starting_length: consts::DEFAULT_STARTING_LENGTH,
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("termsnake").join("config.json"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                log::debug!("No configuration file at {}; using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        serde_json::from_str(&content).map_err(Into::into)
    }
}

/// Configuration as it appears on disk.  A zero or absent value means "use
/// the default."
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    max_number_of_apples: usize,
    number_of_lives: u32,
    snake_starting_length: usize,
}

impl TryFrom<Map<String, Value>> for Config {
    type Error = serde_json::Error;

    fn try_from(value: Map<String, Value>) -> Result<Config, serde_json::Error> {
        serde_json::from_value::<RawConfig>(Value::Object(value)).map(Config::from)
    }
}

impl From<RawConfig> for Config {
    fn from(value: RawConfig) -> Config {
        fn or_default<T: Default + PartialEq>(value: T, default: T) -> T {
            if value == T::default() {
                default
            } else {
                value
            }
        }

        Config {
            max_apples: or_default(value.max_number_of_apples, consts::DEFAULT_MAX_APPLES),
            lives: or_default(value.number_of_lives, consts::DEFAULT_LIVES),
            starting_length: or_default(
                value.snake_starting_length,
                consts::DEFAULT_STARTING_LENGTH,
            ),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case("{}", Config::default())]
    #[case(
        r#"{"maxNumberOfApples": 4, "numberOfLives": 5, "snakeStartingLength": 6}"#,
        Config {max_apples: 4, lives: 5, starting_length: 6}
    )]
    #[case(
        r#"{"maxNumberOfApples": 0, "numberOfLives": 1, "snakeStartingLength": 0}"#,
        Config {max_apples: 10, lives: 1, starting_length: 3}
    )]
    #[case(
        r#"{"numberOfLives": 7, "highScore": 9000}"#,
        Config {max_apples: 10, lives: 7, starting_length: 3}
    )]
    fn parse(#[case] src: &str, #[case] cfg: Config) {
        assert_eq!(serde_json::from_str::<Config>(src).unwrap(), cfg);
    }

    #[rstest]
    #[case(r#"{"numberOfLives": -1}"#)]
    #[case(r#"{"maxNumberOfApples": "ten"}"#)]
    #[case("[]")]
    #[case("[5, 2, 4]")]
    #[case("null")]
    fn parse_invalid(#[case] src: &str) {
        assert!(serde_json::from_str::<Config>(src).is_err());
    }

    #[test]
    fn load_file() {
        let mut tmpfile = NamedTempFile::new().unwrap();
        writeln!(tmpfile, r#"{{"maxNumberOfApples": 2}}"#).unwrap();
        tmpfile.flush().unwrap();
        let cfg = Config::load(tmpfile.path(), false).unwrap();
        assert_eq!(
            cfg,
            Config {
                max_apples: 2,
                lives: 3,
                starting_length: 3
            }
        );
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.json");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.json");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_malformed() {
        let mut tmpfile = NamedTempFile::new().unwrap();
        write!(tmpfile, "maxNumberOfApples = 2").unwrap();
        tmpfile.flush().unwrap();
        assert!(matches!(
            Config::load(tmpfile.path(), true),
            Err(ConfigError::Parse(_))
        ));
    }
}
