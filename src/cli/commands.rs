//! CLI command definitions

use crate::application::TemplateOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "simpletags")]
#[command(about = "Resolve {tag:...} markup in text files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every tag and print the result
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// What to do with tags the data does not cover (keep, remove, inner)
        #[arg(short, long, default_value = "keep")]
        unresolved: String,
    },

    /// List the tags left unresolved by the data
    Tags {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Template file to parse
    pub template: PathBuf,

    /// TOML file with data to resolve tags from
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// TOML file with trigger/delimiter settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Trigger that must follow the left delimiter (default: "tag:")
    #[arg(short, long)]
    pub trigger: Option<String>,

    /// Left delimiter (requires --right)
    #[arg(long, requires = "right")]
    pub left: Option<String>,

    /// Right delimiter (requires --left)
    #[arg(long, requires = "left")]
    pub right: Option<String>,
}

impl From<InputArgs> for TemplateOptions {
    fn from(args: InputArgs) -> Self {
        TemplateOptions {
            template: args.template,
            data: args.data,
            config: args.config,
            trigger: args.trigger,
            delimiters: args.left.zip(args.right),
        }
    }
}
