use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use medical_appointments::{AppointmentSystem, Args, Config, Console};

fn main() -> Result<()> {
    let config = Config::from(Args::parse());

    // Diagnostics go to stderr; stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .with_writer(io::stderr)
        .init();

    let system = AppointmentSystem::from_config(&config);
    let stdin = io::stdin();
    let mut console = Console::new(system, stdin.lock(), io::stdout());

    console.run()
}
