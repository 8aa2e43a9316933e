use crate::cli::Cli;
use crate::constants::{
    ALGO_ROOT,
    DEFAULT_ALGO,
    DEFAULT_APPEND,
    DEFAULT_BASE_DIR,
    DEFAULT_FILES,
    DEFAULT_FOLDERS,
    DEFAULT_OUTPUT_PATH,
    DEFAULT_PREPEND,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// What goes into the bundle and where it is written.
///
/// Fields missing from a config file keep their built-in value, so an empty
/// file is the same as no file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root every folder, file and algo path is resolved against.
    pub base_dir: PathBuf,
    /// Folders whose files are bundled first, in list order.
    pub folders: Vec<String>,
    /// Single files (or glob patterns) bundled after the folders.
    pub files: Vec<String>,
    /// Variant directory under `<base_dir>/algo`, bundled last.
    pub algo: String,
    /// Globs (relative to `base_dir`) removing entries from folder listings.
    pub exclude: Vec<String>,
    /// Order directory entries by file name instead of listing order.
    pub sort: bool,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub prepend: String,
    pub append: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::codingame()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            prepend: DEFAULT_PREPEND.to_string(),
            append: DEFAULT_APPEND.to_string(),
        }
    }
}

impl Config {
    /// The built-in layout of the CodinGame bot project.
    pub fn codingame() -> Self {
        Config {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            folders: DEFAULT_FOLDERS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_FILES.iter().map(|s| s.to_string()).collect(),
            algo: DEFAULT_ALGO.to_string(),
            exclude: Vec::new(),
            sort: false,
            output: OutputConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Build the run configuration: config file (if any) then CLI overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::codingame(),
        };
        if let Some(base_dir) = &cli.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(algo) = &cli.algo {
            config.algo = algo.clone();
        }
        if let Some(output) = &cli.output {
            config.output.path = output.clone();
        }
        if cli.sort {
            config.sort = true;
        }
        Ok(config)
    }

    /// `<base_dir>/algo/<algo>`
    pub fn algo_dir(&self) -> PathBuf {
        self.base_dir.join(ALGO_ROOT).join(&self.algo)
    }
}
