//! Command-line configuration for the studio harness.

use std::fmt;
use std::str::FromStr;

use crate::controls::Key;

/// Error produced while reading studio arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub message: String,
    /// Argument that triggered the error, if any.
    pub arg: Option<String>,
}

impl ConfigError {
    pub(crate) fn at(msg: impl Into<String>, arg: impl Into<String>) -> Self {
        Self { message: msg.into(), arg: Some(arg.into()) }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "config error at `{arg}`: {}", self.message),
            None => write!(f, "config error: {}", self.message),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which shape the studio draws.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShapeKind {
    #[default]
    Sloped,
    Eyes,
    Star,
    Rounded,
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sloped" => Ok(ShapeKind::Sloped),
            "eyes" => Ok(ShapeKind::Eyes),
            "star" => Ok(ShapeKind::Star),
            "rounded" => Ok(ShapeKind::Rounded),
            other => Err(ConfigError::at("expected sloped, eyes, star or rounded", other)),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Sloped => "sloped",
            ShapeKind::Eyes => "eyes",
            ShapeKind::Star => "star",
            ShapeKind::Rounded => "rounded",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub shape: ShapeKind,
    /// Frames to simulate.
    pub frames: u32,
    /// Held key per frame; `None` entries and frames past the end hold nothing.
    pub script: Vec<Option<Key>>,
    /// Outline thickness in logical pixels.
    pub stroke: f32,
    /// Slider assignments applied before the first frame, in order.
    pub overrides: Vec<(String, f32)>,
    /// `env_logger` filter overriding `RUST_LOG`.
    pub log: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Sloped,
            frames: 1,
            script: Vec::new(),
            stroke: 2.0,
            overrides: Vec::new(),
            log: None,
        }
    }
}

impl StudioConfig {
    pub fn shape(mut self, shape: ShapeKind) -> Self { self.shape = shape; self }
    pub fn script(mut self, keys: Vec<Option<Key>>) -> Self { self.script = keys; self }

    /// Parses arguments (without the program name).
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = StudioConfig::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| ConfigError::at("missing value", flag.clone()))
            };

            match flag.as_str() {
                "--shape" => cfg.shape = value()?.parse()?,
                "--frames" => cfg.frames = parse_number(&value()?)?,
                "--keys" => cfg.script = parse_script(&value()?)?,
                "--stroke" => {
                    let px: f32 = parse_number(&value()?)?;
                    if !(px.is_finite() && px >= 0.0) {
                        return Err(ConfigError::at("stroke must be a non-negative number", px.to_string()));
                    }
                    cfg.stroke = px;
                }
                "--set" => cfg.overrides.push(parse_assignment(&value()?)?),
                "--log" => cfg.log = Some(value()?),
                _ => return Err(ConfigError::at("unknown flag", flag.as_str())),
            }
        }

        Ok(cfg)
    }

    /// Key held during `frame`, if the script covers it.
    #[inline]
    pub fn key_at(&self, frame: u32) -> Option<Key> {
        self.script.get(frame as usize).copied().flatten()
    }
}

fn parse_number<T: FromStr>(s: &str) -> Result<T, ConfigError> {
    s.parse().map_err(|_| ConfigError::at("expected a number", s))
}

/// One key per character; `.` holds nothing for that frame.
fn parse_script(s: &str) -> Result<Vec<Option<Key>>, ConfigError> {
    s.chars()
        .map(|c| match c {
            '.' => Ok(None),
            _ => Key::from_char(c)
                .map(Some)
                .ok_or_else(|| ConfigError::at("unbound key", c.to_string())),
        })
        .collect()
}

fn parse_assignment(s: &str) -> Result<(String, f32), ConfigError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::at("expected NAME=VALUE", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::at("empty slider name", s));
    }
    Ok((name.to_string(), parse_number(value.trim())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StudioConfig, ConfigError> {
        StudioConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    // ── happy path ────────────────────────────────────────────────────────

    #[test]
    fn empty_args_give_defaults() {
        assert_eq!(parse(&[]).unwrap(), StudioConfig::default());
    }

    #[test]
    fn all_flags() {
        let cfg = parse(&[
            "--shape", "star",
            "--frames", "12",
            "--keys", "qw.",
            "--stroke", "3.5",
            "--set", "star.inner=30",
            "--log", "debug",
        ])
        .unwrap();
        assert_eq!(cfg.shape, ShapeKind::Star);
        assert_eq!(cfg.frames, 12);
        assert_eq!(cfg.script, vec![Some(Key::Q), Some(Key::W), None]);
        assert_eq!(cfg.stroke, 3.5);
        assert_eq!(cfg.overrides, vec![("star.inner".to_string(), 30.0)]);
        assert_eq!(cfg.log.as_deref(), Some("debug"));
    }

    #[test]
    fn key_at_past_script_is_none() {
        let cfg = StudioConfig::default().script(vec![Some(Key::T), None]);
        assert_eq!(cfg.key_at(0), Some(Key::T));
        assert_eq!(cfg.key_at(1), None);
        assert_eq!(cfg.key_at(2), None);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn unknown_flag() {
        let err = parse(&["--color", "red"]).unwrap_err();
        assert_eq!(err.arg.as_deref(), Some("--color"));
    }

    #[test]
    fn missing_value() {
        let err = parse(&["--frames"]).unwrap_err();
        assert_eq!(err.message, "missing value");
    }

    #[test]
    fn bad_shape_and_number() {
        assert!(parse(&["--shape", "hexagon"]).is_err());
        assert!(parse(&["--frames", "-3"]).is_err());
        assert!(parse(&["--stroke", "-1"]).is_err());
    }

    #[test]
    fn unbound_key_in_script() {
        let err = parse(&["--keys", "qz"]).unwrap_err();
        assert_eq!(err.arg.as_deref(), Some("z"));
    }

    #[test]
    fn malformed_assignment() {
        assert!(parse(&["--set", "eye.width"]).is_err());
        assert!(parse(&["--set", "=3"]).is_err());
        assert!(parse(&["--set", "eye.width=wide"]).is_err());
    }

    #[test]
    fn display_names_argument() {
        let err = ConfigError::at("unknown flag", "--x");
        assert_eq!(err.to_string(), "config error at `--x`: unknown flag");
    }
}
