use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Startup configuration, taken from the command line only.
#[derive(Debug, Clone, Parser)]
#[command(name = "docroot")]
#[command(about = "Serves static files from a document root over HTTP")]
pub struct Config {
    /// TCP port to listen on
    pub port: u16,

    /// Directory that request targets are resolved against
    pub document_root: PathBuf,

    /// Log every request's headers and cookies
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses the process arguments, exiting with usage on error.
    pub fn load() -> Self {
        Config::parse()
    }

    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::try_parse_from(args)
    }

    /// Address to bind: every interface on the configured port.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
