use crate::err;
use sculptor::{AppAuthor, FileIO, ProjectInfo, impl_serde_str_toml};
use serde::{Deserialize, Serialize};
use std::{io, path::PathBuf};
use tailrec::Limits;

/// User configuration, read from `tailrec.toml` in the config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Conf {
    /// bounce budget for every run; unbounded when absent
    pub fuel: Option<u64>,
    /// force colored output on or off
    pub color: Option<bool>,
}

impl_serde_str_toml!(Conf);

impl AppAuthor for Conf {
    fn app_name() -> &'static str {
        "Tailrec"
    }

    fn author() -> &'static str {
        "The Tailrec Developers"
    }
}

impl Conf {
    pub fn path() -> PathBuf {
        Conf::config_dir().join("tailrec.toml")
    }
    /// Load the configuration from the config directory, falling back to the
    /// defaults when there is none or it can't be read.
    pub fn load() -> Self {
        let path = Conf::path();
        match FileIO::new(path.clone()).load() {
            | Ok(conf) => conf,
            | Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no configuration at `{}`, using defaults", path.display());
                Conf::default()
            }
            | Err(err) => {
                log::warn!("ignoring configuration at `{}`: {}", path.display(), err);
                Conf::default()
            }
        }
    }
    /// Load the configuration from an explicitly given file.
    pub fn load_from(path: impl Into<PathBuf>) -> err::Result<Self> {
        Ok(FileIO::new(path.into()).load()?)
    }
    /// The limits of a run; a `--fuel` given on the command line wins.
    pub fn limits(&self, fuel: Option<u64>) -> Limits {
        match fuel.or(self.fuel) {
            | Some(fuel) => Limits::new().fuel(fuel),
            | None => Limits::new(),
        }
    }
}
