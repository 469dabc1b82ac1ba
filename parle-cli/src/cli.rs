//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use parle::{Channel, Number};
use std::path::PathBuf;

/// Output channel for conversion phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChannelArg {
    /// Printed text: "3 175,15 grammes"
    Written,
    /// Text for a speech synthesizer: "3175 virgule 15 grammes"
    Spoken,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Written => Channel::Written,
            ChannelArg::Spoken => Channel::Spoken,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "parle")]
#[command(version, about = "Convertit des quantités énoncées en français")]
#[command(long_about = r#"
Converts quantities whose units are given the way people say them.

Examples:
  parle convert 17 miles
  parle convert 2 mètres --to pieds
  parle convert 20 degrés --to fahrenheit --channel spoken
  parle slots --output slot-unit.txt
  parle intents --output intent-askUnit.txt
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a quantity and print the phrase
    Convert {
        /// Magnitude: "17", "1,5", "3/4", "1e3"
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        quantity: Number,

        /// Source unit as said or written: "miles", "kilomètres", "km"
        source: String,

        /// Destination unit; chosen automatically when absent
        #[arg(short, long, value_name = "UNIT")]
        to: Option<String>,

        /// Output channel
        #[arg(short, long, value_enum, env = "PARLE_CHANNEL", default_value = "written")]
        channel: ChannelArg,

        /// Print the full conversion as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every unit name the resolver understands
    Slots {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH", env = "PARLE_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Generate annotated training sentences
    Intents {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "PATH", env = "PARLE_OUTPUT")]
        output: Option<PathBuf>,
    },
}

fn parse_number(s: &str) -> Result<Number, String> {
    Number::from_str(s).map_err(|e| e.to_string())
}
