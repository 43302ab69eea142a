use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::handle_runtime_commands;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::analyzer::*;
pub use services::output::*;
pub use services::policy::*;
pub use services::settings::*;
pub use services::storage::*;
pub use services::templates::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings()?;
    handle_runtime_commands(&cli, &settings)
}
