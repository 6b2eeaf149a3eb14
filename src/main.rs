//! CLI entry point for the seeded pixel image generator

use clap::Parser;
use rndpxls::io::cli::{BatchGenerator, Cli};

fn main() -> rndpxls::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    BatchGenerator::new(cli).run()?;
    Ok(())
}
