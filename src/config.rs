//! Runtime configuration for the parser and the command-line front end.
//!
//! The parser has one tunable, the nesting limit. It is resolved in order:
//!  1. Explicit `FRONTEND_MAX_DEPTH` environment variable
//!  2. The built-in default

use std::{env, fmt, path::PathBuf};

use thiserror::Error;
use tracing::warn;

const MAX_DEPTH_ENV: &str = "FRONTEND_MAX_DEPTH";
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    ExplicitVar,
    Programmatic,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::ExplicitVar => write!(f, "explicit {}", MAX_DEPTH_ENV),
            ConfigSource::Programmatic => write!(f, "set by caller"),
            ConfigSource::Default => write!(f, "built-in default"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    max_depth: usize,
    source: ConfigSource,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            source: ConfigSource::Default,
        }
    }
}

impl ParserConfig {
    pub fn detect() -> Self {
        Self::from_raw(env::var(MAX_DEPTH_ENV).ok().as_deref())
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        ParserConfig {
            max_depth,
            source: ConfigSource::Programmatic,
        }
    }

    /// Deepest nesting of statements and sub-expressions a parse accepts.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match raw.parse::<usize>() {
            Ok(max_depth) if max_depth > 0 => ParserConfig {
                max_depth,
                source: ConfigSource::ExplicitVar,
            },
            _ => {
                warn!(value = raw, "ignoring invalid {}", MAX_DEPTH_ENV);
                Self::default()
            }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing source file")]
    MissingPath,
    #[error("unknown flag {0:?}")]
    UnknownFlag(String),
    #[error("unexpected argument {0:?}")]
    ExtraArgument(String),
}

/// What the binary should show for the parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Tree,
    Tokens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub path: PathBuf,
    pub emit: Emit,
}

impl CliOptions {
    pub const USAGE: &'static str = "usage: frontend [--tokens] <file>";

    /// Parses the arguments after the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = None;
        let mut emit = Emit::Tree;

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--tokens" => emit = Emit::Tokens,
                flag if flag.starts_with("--") => {
                    return Err(ArgsError::UnknownFlag(flag.to_string()))
                }
                _ if path.is_some() => return Err(ArgsError::ExtraArgument(arg.to_string())),
                _ => path = Some(PathBuf::from(arg)),
            }
        }

        Ok(CliOptions {
            path: path.ok_or(ArgsError::MissingPath)?,
            emit,
        })
    }
}
