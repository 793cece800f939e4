use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

pub const DEAL_STAGES: [&str; 4] = ["Prospecting", "Negotiation", "Closed Won", "Closed Lost"];
pub const LEAD_SOURCES: [&str; 5] = [
    "Website",
    "Referral",
    "Event",
    "Social Media",
    "Email Campaign",
];
pub const METRIC_TITLES: [&str; 5] = [
    "Total Revenue",
    "Open Deals",
    "Closed Deals",
    "New Leads",
    "Active Users",
];

/// Days covered by the activity window: today back to two years ago.
const ACTIVITY_WINDOW_DAYS: i64 = 730;

fn pick<R: Rng>(rng: &mut R, set: &'static [&'static str]) -> &'static str {
    set[rng.gen_range(0..set.len())]
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Daily activity volume: calls, emails and meetings on a given day.
#[derive(Debug, Clone)]
pub struct ActivityStat {
    pub day: NaiveDate,
    pub calls: i32,
    pub emails: i32,
    pub meetings: i32,
}

impl ActivityStat {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let today = Local::now().date_naive();
        Self {
            day: today - Duration::days(rng.gen_range(0..=ACTIVITY_WINDOW_DAYS)),
            calls: rng.gen_range(0..=20),
            emails: rng.gen_range(0..=20),
            meetings: rng.gen_range(0..=10),
        }
    }
}

/// Deal counts and value per pipeline stage.
#[derive(Debug, Clone)]
pub struct DealInsight {
    pub stage: &'static str,
    pub count: i32,
    pub total_value: f64,
}

impl DealInsight {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            stage: pick(&mut rng, &DEAL_STAGES),
            count: rng.gen_range(1..=100),
            total_value: round2(rng.gen_range(1000.0..=100000.0)),
        }
    }
}

/// Lead volume and conversion per acquisition source.
#[derive(Debug, Clone)]
pub struct LeadAnalytic {
    pub source: &'static str,
    pub count: i32,
    pub conversion_rate: f64,
}

impl LeadAnalytic {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            source: pick(&mut rng, &LEAD_SOURCES),
            count: rng.gen_range(1..=100),
            conversion_rate: round2(rng.gen_range(0.0..=100.0)),
        }
    }
}

/// Headline dashboard figure. The value column is a string in the schema,
/// so the sampled integer is stored stringified.
#[derive(Debug, Clone)]
pub struct OverviewMetric {
    pub title: &'static str,
    pub value: String,
}

impl OverviewMetric {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            title: pick(&mut rng, &METRIC_TITLES),
            value: rng.gen_range(1..=1_000_000).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: usize = 1000;

    fn has_two_decimals(v: f64) -> bool {
        ((v * 100.0).round() - v * 100.0).abs() < 1e-6
    }

    #[test]
    fn activity_stats_stay_in_range() {
        let today = Local::now().date_naive();
        let floor = today - Duration::days(ACTIVITY_WINDOW_DAYS);
        for _ in 0..SAMPLES {
            let row = ActivityStat::random();
            assert!((0..=20).contains(&row.calls));
            assert!((0..=20).contains(&row.emails));
            assert!((0..=10).contains(&row.meetings));
            assert!(row.day >= floor && row.day <= today);
        }
    }

    #[test]
    fn deal_insights_stay_in_range() {
        for _ in 0..SAMPLES {
            let row = DealInsight::random();
            assert!(DEAL_STAGES.contains(&row.stage));
            assert!((1..=100).contains(&row.count));
            assert!(row.total_value >= 1000.0 && row.total_value <= 100000.0);
            assert!(has_two_decimals(row.total_value));
        }
    }

    #[test]
    fn lead_analytics_stay_in_range() {
        for _ in 0..SAMPLES {
            let row = LeadAnalytic::random();
            assert!(LEAD_SOURCES.contains(&row.source));
            assert!((1..=100).contains(&row.count));
            assert!(row.conversion_rate >= 0.0 && row.conversion_rate <= 100.0);
            assert!(has_two_decimals(row.conversion_rate));
        }
    }

    #[test]
    fn overview_metrics_stay_in_range() {
        for _ in 0..SAMPLES {
            let row = OverviewMetric::random();
            assert!(METRIC_TITLES.contains(&row.title));
            let value: i64 = row.value.parse().unwrap();
            assert!((1..=1_000_000).contains(&value));
        }
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(1234.5678), 1234.57);
        assert_eq!(round2(1000.0), 1000.0);
        assert_eq!(round2(99.994), 99.99);
    }
}
