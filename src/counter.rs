use anyhow::Result;
use postgres::{Client, NoTls};

use crate::connection::Connection;
use crate::logger::debug;

pub const TABLES: [&str; 4] = [
    "activity_stats",
    "deal_insights",
    "lead_analytics",
    "overview_metrics",
];

/// Format a count with thousands separators, e.g. 100000 -> "100,000".
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Print the row count of each analytics table.
pub fn run(conn: &Connection) -> Result<()> {
    debug("counter: connecting");
    let mut client = Client::connect(&conn.database_url(), NoTls)?;
    debug("counter: connected");

    println!("Data counts in each table:");
    println!("{}", "-".repeat(40));

    for table in TABLES {
        let query = format!("SELECT COUNT(*) FROM {table}");
        let row = client.query_one(query.as_str(), &[])?;
        let count: i64 = row.get(0);
        println!("{}: {} records", table, thousands(count as u64));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(1), "1");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(100_000), "100,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn table_list_matches_schema() {
        assert_eq!(
            TABLES,
            [
                "activity_stats",
                "deal_insights",
                "lead_analytics",
                "overview_metrics"
            ]
        );
    }

    #[test]
    fn refused_connection_yields_error_line() {
        // Port 1 on loopback refuses immediately; no server involved.
        let conn = Connection {
            database: "crm".to_string(),
            user: "postgres".to_string(),
            password: None,
            host: "127.0.0.1".to_string(),
            port: 1,
        };
        let err = run(&conn).unwrap_err();
        assert!(format!("Error: {err}").starts_with("Error: "));
    }
}
