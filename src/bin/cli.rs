// src/bin/cli.rs
use resdesk::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
