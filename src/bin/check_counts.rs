use anyhow::Result;
use clap::Parser;

use crmseed::{config, connection::ConnectionArgs, counter, logger};

/// Report the row count of each CRM analytics table.
#[derive(Parser)]
#[command(name = "check-counts", version, about)]
struct Cli {
    #[command(flatten)]
    conn: ConnectionArgs,
}

fn run(cli: Cli) -> Result<()> {
    let conn = cli.conn.resolve()?;
    counter::run(&conn)
}

fn main() {
    if let Ok(dir) = config::get_app_config_path() {
        let _ = logger::init(dir.join("crmseed.log"));
    }

    let cli = Cli::parse();

    // Any failure is reported on stdout and the process still exits cleanly.
    if let Err(err) = run(cli) {
        println!("Error: {err}");
        logger::error(&format!("count report failed: {err:?}"));
    }
}
