//! Command-line configuration
//!
//! Flags:
//!
//! - `--speed <ms>` — initial auto-solve interval, clamped to 100..=2000
//! - `--fps <n>` — frame rate of the UI loop, 1..=240
//! - `-h`, `--help` — print usage

use crate::puzzle::constants::{
    DEFAULT_AUTO_INTERVAL_MS, MAX_AUTO_INTERVAL_MS, MIN_AUTO_INTERVAL_MS,
};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

/// Settings for one run of the program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Delay between automatic moves
    pub auto_interval_ms: u64,
    /// Target frames per second
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            auto_interval_ms: DEFAULT_AUTO_INTERVAL_MS,
            fps: DEFAULT_FPS,
        }
    }
}

impl Config {
    /// Time budget for one frame
    pub fn frame_period(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }

    /// Parse flags, not including the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "--speed" => {
                    let ms: u64 = parse_value("--speed", args.next())?;
                    config.auto_interval_ms = ms.clamp(MIN_AUTO_INTERVAL_MS, MAX_AUTO_INTERVAL_MS);
                }
                "--fps" => {
                    let fps: u32 = parse_value("--fps", args.next())?;
                    if fps == 0 || fps > MAX_FPS {
                        return Err(ConfigError::OutOfRange {
                            flag: "--fps",
                            value: fps.to_string(),
                            min: 1,
                            max: u64::from(MAX_FPS),
                        });
                    }
                    config.fps = fps;
                }
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        Ok(config)
    }
}

fn parse_value<T, S>(flag: &'static str, value: Option<S>) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    S: AsRef<str>,
{
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    let value = value.as_ref();
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

/// Problems with the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `-h` or `--help` was given; not a failure, but parsing stops
    HelpRequested,

    /// A flag we don't know
    UnknownFlag(String),

    /// A flag that needs a value was last on the line
    MissingValue(&'static str),

    /// The value is not a number
    InvalidValue { flag: &'static str, value: String },

    /// The value is a number outside the accepted range
    OutOfRange {
        flag: &'static str,
        value: String,
        min: u64,
        max: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HelpRequested => write!(f, "Help requested"),
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "Invalid value '{}' for '{}': expected a number", value, flag)
            }
            ConfigError::OutOfRange {
                flag,
                value,
                min,
                max,
            } => write!(
                f,
                "Value '{}' for '{}' is out of range ({}..={})",
                value, flag, min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.auto_interval_ms, 500);
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn test_speed_is_clamped() {
        let fast = Config::from_args(["--speed", "10"]).unwrap();
        assert_eq!(fast.auto_interval_ms, 100);

        let slow = Config::from_args(["--speed", "99999"]).unwrap();
        assert_eq!(slow.auto_interval_ms, 2000);

        let exact = Config::from_args(["--speed", "700"]).unwrap();
        assert_eq!(exact.auto_interval_ms, 700);
    }

    #[test]
    fn test_fps() {
        let config = Config::from_args(["--fps", "30"]).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.frame_period(), Duration::from_micros(33_333));

        assert!(matches!(
            Config::from_args(["--fps", "0"]),
            Err(ConfigError::OutOfRange { flag: "--fps", .. })
        ));
        assert!(matches!(
            Config::from_args(["--fps", "1000"]),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Config::from_args(["--speed"]),
            Err(ConfigError::MissingValue("--speed"))
        );
        assert_eq!(
            Config::from_args(["--speed", "fast"]),
            Err(ConfigError::InvalidValue {
                flag: "--speed",
                value: "fast".to_string()
            })
        );
        assert_eq!(
            Config::from_args(["--disks"]),
            Err(ConfigError::UnknownFlag("--disks".to_string()))
        );
        assert_eq!(Config::from_args(["-h"]), Err(ConfigError::HelpRequested));
    }
}
