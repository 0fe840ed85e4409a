use anyhow::Result;
use clap::Parser;

use rpcdoc_cli::args::CliArgs;
use rpcdoc_cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if RPCDOC_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports RPCDOC_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    rpcdoc::tracing_config::init_tracing();

    let args = CliArgs::parse();
    driver::run(&args)
}
