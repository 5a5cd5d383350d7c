use clap::Parser;

use rollcall::adapter::inbound::cli::command::Cli;
use rollcall::adapter::inbound::cli::dispatch;
use rollcall::adapter::inbound::cli::output::{self, OutputConfig};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.color.enabled()));

    if let Err(e) = dispatch::execute(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
