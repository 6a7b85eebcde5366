//! Clap adapter for dotconf.
//!
//! Compiled only with the `clap` Cargo feature (on by default). The derive
//! types here parse the `dotconf get|set|gen` command line; the only bridge to
//! the core is [`DotconfArgs::into_action()`], which folds the flags over the
//! loaded [`ToolConfig`] defaults and produces a [`ConfigAction`].

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::constraint::ConstraintInput;
use crate::tool_config::ToolConfig;
use crate::types::{ConfigAction, Policy};

/// Read and patch simple `key value` .conf files.
#[derive(Debug, Parser)]
#[command(name = "dotconf", version)]
pub struct DotconfArgs {
    #[command(subcommand)]
    pub command: DotconfSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum DotconfSubcommand {
    /// Print the settings of a config file as JSON.
    #[command(aliases = ["getsettings", "getSettings"])]
    Get {
        /// Config file to read.
        file: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print a config file with new values applied.
    #[command(aliases = ["setsettings", "setSettings"])]
    Set {
        /// Config file to patch. The file itself is not modified unless it is also --dest.
        file: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print a commented template of dotconf's own defaults file.
    Gen {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Property names (get) or `name value` entries (set). A single value may
    /// also be a file path, JSON array or object, or conf text.
    #[arg(short, long = "property")]
    pub properties: Vec<String>,

    /// Keep or append properties outside the given list.
    #[arg(short, long, conflicts_with = "no_extend")]
    pub extend: bool,

    /// Restrict output to the given properties.
    #[arg(long)]
    pub no_extend: bool,

    /// Compare property names exactly.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,
}

impl CommonArgs {
    fn policy(&self, defaults: &ToolConfig) -> Policy {
        let base = defaults.policy();
        let extend = match (self.extend, self.no_extend) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => base.extend,
        };
        Policy {
            extend,
            ignore_case: base.ignore_case && !self.case_sensitive,
        }
    }
}

impl DotconfArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    pub fn into_action(self, defaults: &ToolConfig) -> ConfigAction {
        match self.command {
            DotconfSubcommand::Get {
                file,
                common,
                pretty,
            } => ConfigAction::Get {
                file,
                policy: common.policy(defaults),
                properties: ConstraintInput::from_entries(common.properties),
                dest: common.dest,
                pretty: pretty || defaults.pretty,
            },
            DotconfSubcommand::Set { file, common } => ConfigAction::Set {
                file,
                policy: common.policy(defaults),
                values: ConstraintInput::from_entries(common.properties),
                dest: common.dest,
            },
            DotconfSubcommand::Gen { output } => ConfigAction::Gen { output },
        }
    }
}
