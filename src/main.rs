use anyhow::Result;
use tracing::info;

use noughts_term::{Frontend, FrontendConfig, parse_mode};

fn main() -> Result<()> {
    // Game text goes to stdout; keep logs out of it
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("noughts starting");

    let mut config = FrontendConfig::default();
    if let Some(mode) = std::env::args().nth(1) {
        config.mode = parse_mode(&mode)?;
    }

    Frontend::new(config).run()?;
    Ok(())
}
