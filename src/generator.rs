use anyhow::Result;
use postgres::{Client, NoTls, Transaction};

use crate::connection::Connection;
use crate::counter::thousands;
use crate::logger::{debug, info};
use crate::model::{ActivityStat, DealInsight, LeadAnalytic, OverviewMetric};

pub const ROWS_PER_TABLE: usize = 100_000;
const PROGRESS_EVERY: usize = 10_000;

/// Insert 100,000 synthetic rows into each analytics table.
///
/// All inserts run inside a single transaction committed at the very end;
/// if the run dies partway through, nothing is durable. Re-running appends,
/// there is no dedup.
pub fn run(conn: &Connection) -> Result<()> {
    debug("generator: connecting");
    let mut client = Client::connect(&conn.database_url(), NoTls)?;
    debug("generator: connected");

    println!(
        "Starting to insert {} records ({} per table)...",
        thousands((ROWS_PER_TABLE * 4) as u64),
        thousands(ROWS_PER_TABLE as u64)
    );

    let mut tx = client.transaction()?;
    insert_activity_stats(&mut tx)?;
    insert_deal_insights(&mut tx)?;
    insert_lead_analytics(&mut tx)?;
    insert_overview_metrics(&mut tx)?;
    tx.commit()?;
    info("generator: committed");

    println!(
        "Done inserting {} records ({} per table)!",
        thousands((ROWS_PER_TABLE * 4) as u64),
        thousands(ROWS_PER_TABLE as u64)
    );
    Ok(())
}

fn banner(table: &str) {
    println!(
        "Inserting {} records into {}...",
        thousands(ROWS_PER_TABLE as u64),
        table
    );
}

fn progress(i: usize, table: &str) {
    if i % PROGRESS_EVERY == 0 {
        println!("Progress: {i} records inserted into {table}");
    }
}

fn insert_activity_stats(tx: &mut Transaction) -> Result<()> {
    banner("activity_stats");
    let stmt = tx.prepare(
        "INSERT INTO activity_stats (day, calls, emails, meetings) VALUES ($1, $2, $3, $4)",
    )?;
    for i in 0..ROWS_PER_TABLE {
        progress(i, "activity_stats");
        let row = ActivityStat::random();
        tx.execute(
            &stmt,
            &[&row.day.to_string(), &row.calls, &row.emails, &row.meetings],
        )?;
    }
    Ok(())
}

fn insert_deal_insights(tx: &mut Transaction) -> Result<()> {
    banner("deal_insights");
    // total_value lands in a numeric column; the cast lets the driver bind f64.
    let stmt = tx.prepare(
        "INSERT INTO deal_insights (stage, count, total_value) VALUES ($1, $2, $3::float8)",
    )?;
    for i in 0..ROWS_PER_TABLE {
        progress(i, "deal_insights");
        let row = DealInsight::random();
        tx.execute(&stmt, &[&row.stage, &row.count, &row.total_value])?;
    }
    Ok(())
}

fn insert_lead_analytics(tx: &mut Transaction) -> Result<()> {
    banner("lead_analytics");
    let stmt = tx.prepare(
        "INSERT INTO lead_analytics (source, count, conversion_rate) VALUES ($1, $2, $3::float8)",
    )?;
    for i in 0..ROWS_PER_TABLE {
        progress(i, "lead_analytics");
        let row = LeadAnalytic::random();
        tx.execute(&stmt, &[&row.source, &row.count, &row.conversion_rate])?;
    }
    Ok(())
}

fn insert_overview_metrics(tx: &mut Transaction) -> Result<()> {
    banner("overview_metrics");
    let stmt =
        tx.prepare("INSERT INTO overview_metrics (title, value) VALUES ($1, $2)")?;
    for i in 0..ROWS_PER_TABLE {
        progress(i, "overview_metrics");
        let row = OverviewMetric::random();
        tx.execute(&stmt, &[&row.title, &row.value])?;
    }
    Ok(())
}
