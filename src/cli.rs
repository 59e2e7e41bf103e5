use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "job-matcher", version, about = "Resume intake and skill-based job matching API")]
pub struct Cli {
    /// Bind address, overrides HOST
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bind port, overrides PORT
    #[arg(long, global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,

    /// Print the job catalog as JSON
    Jobs,

    /// Print the jobs matching the given skills as JSON
    Match {
        /// Candidate skill, repeatable
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
}

impl Cli {
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}
