use std::path::PathBuf;

use clap::Parser;

use chaikin::{Command, Emission, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "Chaikin's corner cutting, one step per command", long_about = None)]
pub struct Args {
    #[arg(
        value_name = "COMMAND",
        help = "Commands to apply in order: \"+\"/\"advance\" or \"-\"/\"revert\""
    )]
    pub commands: Vec<Command>,

    #[arg(
        long,
        default_value_t = chaikin::scene::RATIO,
        allow_negative_numbers = true,
        help = "Ratio of an edge's length at which corners are cut"
    )]
    pub ratio: f64,

    #[arg(
        long,
        default_value_t = chaikin::scene::ITERATIONS,
        help = "Passes of corner cutting per advance"
    )]
    pub iterations: usize,

    #[arg(long, help = "Swap the emitted corners for spiky results")]
    pub invert: bool,

    #[arg(
        long,
        default_value_t = chaikin::scene::CORNER_LIMIT,
        help = "Refuse to advance while there are more corners than this"
    )]
    pub corner_limit: usize,

    #[arg(long, short, value_name = "FILE", help = "Write the svg here instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (repeat for even more)")]
    pub verbose: u8,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            ratio: self.ratio,
            iterations: self.iterations,
            emission: if self.invert {
                Emission::Inverted
            } else {
                Emission::Smooth
            },
            corner_limit: self.corner_limit,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
