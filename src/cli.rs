use clap::{Parser, Subcommand};

pub const DEFAULT_CONTEXT: &str = "general";

#[derive(Parser, Debug)]
#[command(name = "ciop", version, about = "Intellectual stewardship analysis CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Analyze {
        scenario: String,
        #[arg(
            long,
            default_value = DEFAULT_CONTEXT,
            help = "Analysis context label (academic, corporate, legal, ...)"
        )]
        context: String,
    },
    Policy {
        domain: String,
        scenario: String,
    },
    Contexts,
    Frameworks,
    Score,
    Demo,
}
