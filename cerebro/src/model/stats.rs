use cerebro_api::endpoints::{dashboard::DashboardSnapshot, Amount};
use chrono::{Datelike, NaiveDate};

use super::budget::DashboardTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKind {
    General,
    Prediction,
    Comparison,
    Savings,
}

impl StatsKind {
    pub const ALL: [StatsKind; 4] = [
        StatsKind::General,
        StatsKind::Prediction,
        StatsKind::Comparison,
        StatsKind::Savings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StatsKind::General => "General summary",
            StatsKind::Prediction => "Month-end prediction",
            StatsKind::Comparison => "Month comparison",
            StatsKind::Savings => "Savings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatsKind::General => "📊",
            StatsKind::Prediction => "🔮",
            StatsKind::Comparison => "📈",
            StatsKind::Savings => "🐷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsReport {
    NoData,
    General { spent: Amount, available: Amount },
    Prediction { spent: Amount, projected: Amount },
    /// Kinds with nothing to compute yet.
    Placeholder,
}

/// Projected month spend: the daily average so far times 30 days.
pub fn projected_spend(spent: Amount, day_of_month: u32) -> Amount {
    let day = day_of_month.max(1) as f64;
    Amount::from(spent.as_f64() / day * 30.0)
}

pub fn report(kind: StatsKind, snapshot: Option<&DashboardSnapshot>, today: NaiveDate) -> StatsReport {
    let Some(snapshot) = snapshot else {
        return StatsReport::NoData;
    };
    let totals = DashboardTotals::from_snapshot(snapshot);

    match kind {
        StatsKind::General => StatsReport::General {
            spent: totals.spent,
            available: totals.available,
        },
        StatsKind::Prediction => StatsReport::Prediction {
            spent: totals.spent,
            projected: projected_spend(totals.spent, today.day()),
        },
        StatsKind::Comparison | StatsKind::Savings => StatsReport::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            user_name: Some("Christian".to_string()),
            available_balance: Amount::new(400),
            monthly_budget: Amount::new(1000),
            categories: BTreeMap::new(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn projection_rounds_daily_average() {
        assert_eq!(projected_spend(Amount::new(600), 10), Amount::new(1800));
        assert_eq!(projected_spend(Amount::new(100), 7), Amount::new(429));
    }

    #[test]
    fn general_report_uses_budget_minus_available() {
        assert_eq!(
            report(StatsKind::General, Some(&snapshot()), day(15)),
            StatsReport::General {
                spent: Amount::new(600),
                available: Amount::new(400)
            }
        );
    }

    #[test]
    fn prediction_report() {
        assert_eq!(
            report(StatsKind::Prediction, Some(&snapshot()), day(20)),
            StatsReport::Prediction {
                spent: Amount::new(600),
                projected: Amount::new(900)
            }
        );
    }

    #[test]
    fn without_snapshot_every_kind_has_no_data() {
        for kind in StatsKind::ALL {
            assert_eq!(report(kind, None, day(1)), StatsReport::NoData);
        }
        assert_eq!(
            report(StatsKind::Savings, Some(&snapshot()), day(1)),
            StatsReport::Placeholder
        );
    }
}
