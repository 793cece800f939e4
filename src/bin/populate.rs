use anyhow::Result;
use clap::Parser;

use crmseed::{config, connection::ConnectionArgs, generator, logger};

/// Populate the CRM analytics tables with synthetic rows.
#[derive(Parser)]
#[command(name = "populate", version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,
}

fn main() -> Result<()> {
    // File logging under the app config directory; stdout stays clean for
    // the progress report.
    if let Ok(dir) = config::get_app_config_path() {
        let _ = logger::init(dir.join("crmseed.log"));
    }

    let cli = Cli::parse();
    let conn = cli.conn.resolve()?;
    generator::run(&conn)
}
