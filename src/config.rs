//! Runtime configuration read from the environment.

use std::path::PathBuf;

use jiff::tz::TimeZone;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid GREATERLOVE_PORT {0:?}: {1}")]
    Port(String, std::num::ParseIntError),
    #[error("unknown time zone in GREATERLOVE_TZ: {0}")]
    TimeZone(#[from] jiff::Error),
}

#[derive(Clone, Debug)]
pub(crate) struct Config {
    /// Port the server listens on, on localhost.
    pub port: u16,
    /// Directory holding the static site assets (`images/`, `*.css`).
    pub site_dir: PathBuf,
    /// Time zone used to decide what "today" is for the event dates.
    pub tz: TimeZone,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let port = lookup("GREATERLOVE_PORT")
            .map(|port| port.parse::<u16>().map_err(|err| Error::Port(port, err)))
            .transpose()?
            .unwrap_or(8000);

        let site_dir = lookup("GREATERLOVE_SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let tz = match lookup("GREATERLOVE_TZ") {
            Some(name) => TimeZone::get(&name)?,
            None => TimeZone::system(),
        };

        Ok(Self { port, site_dir, tz })
    }
}
