use clap::{Args, Parser, Subcommand};
use mountspec::RuntimeKind;

use crate::commands::format::FormatArgs;
use crate::commands::parse::ParseArgs;

/// Parse and render container volume specs
#[derive(Parser, Debug)]
#[command(name = "mountspec", author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Container runtime whose volume syntax to use
    #[arg(long, global = true, env = "MOUNTSPEC_RUNTIME", default_value = "docker")]
    pub runtime: RuntimeKind,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a volume string and print its fields
    Parse(ParseArgs),

    /// Build a volume from fields and print it as a command-line argument
    Format(FormatArgs),

    /// List recognized volume modes
    Modes,
}
