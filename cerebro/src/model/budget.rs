use cerebro_api::endpoints::{
    dashboard::{CategoryBudget, DashboardSnapshot, Section},
    Amount,
};

use super::icons::SectionIcon;

/// Threshold (inclusive) at which a bar turns orange.
pub const WARN_PERCENT: f64 = 70.0;

/// Threshold (inclusive) at which a bar turns red.
pub const DANGER_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Orange,
    Red,
}

impl BarColor {
    pub fn for_percent(percent: f64) -> Self {
        if percent >= DANGER_PERCENT {
            BarColor::Red
        } else if percent >= WARN_PERCENT {
            BarColor::Orange
        } else {
            BarColor::Green
        }
    }
}

/// Spend against budget for one section or category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetLine {
    pub budget: Amount,
    pub spent: Amount,
    pub percent: f64,
    pub remaining: Amount,
    pub bar_color: BarColor,
}

impl BudgetLine {
    pub fn new(budget: Amount, spent: Amount) -> Self {
        // A zero budget means "no limit"
        let percent = if budget.is_positive() {
            spent.as_f64() / budget.as_f64() * 100.0
        } else {
            0.0
        };

        Self {
            budget,
            spent,
            percent,
            remaining: budget - spent,
            bar_color: BarColor::for_percent(percent),
        }
    }

    pub fn is_over(&self) -> bool {
        self.remaining.is_negative()
    }

    /// The percentage to print next to the bar. Hidden once the budget is blown.
    pub fn display_percent(&self) -> Option<f64> {
        if self.is_over() {
            None
        } else {
            Some(self.percent)
        }
    }

    /// How far past the budget this line is. Never negative.
    pub fn overage(&self) -> Amount {
        if self.is_over() {
            self.remaining.abs()
        } else {
            Amount::ZERO
        }
    }

    /// Bar fill in percent, capped at 100.
    pub fn bar_fill(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }
}

impl From<&Section> for BudgetLine {
    fn from(section: &Section) -> Self {
        BudgetLine::new(section.budget, section.spent)
    }
}

impl From<&CategoryBudget> for BudgetLine {
    fn from(category: &CategoryBudget) -> Self {
        BudgetLine::new(category.budget, category.spent)
    }
}

/// A dashboard row: one section with its icon and budget line.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRow<'a> {
    pub name: &'a str,
    pub icon: SectionIcon,
    pub line: BudgetLine,
}

/// Section rows in the snapshot's (alphabetical) order.
pub fn section_rows(snapshot: &DashboardSnapshot) -> Vec<SectionRow<'_>> {
    snapshot
        .categories
        .iter()
        .map(|(name, section)| SectionRow {
            name,
            icon: SectionIcon::classify(name),
            line: BudgetLine::from(section),
        })
        .collect()
}

/// Category rows of one section, as `(name, line)` pairs.
pub fn category_rows(section: &Section) -> Vec<(&str, BudgetLine)> {
    section
        .categories
        .iter()
        .map(|(name, category)| (name.as_str(), BudgetLine::from(category)))
        .collect()
}

/// Month-level totals shown in the dashboard header cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardTotals {
    pub monthly_budget: Amount,
    pub available: Amount,
    pub spent: Amount,
    pub percent: f64,
}

impl DashboardTotals {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let spent = snapshot.monthly_budget - snapshot.available_balance;
        let line = BudgetLine::new(snapshot.monthly_budget, spent);

        Self {
            monthly_budget: snapshot.monthly_budget,
            available: snapshot.available_balance,
            spent,
            percent: line.percent,
        }
    }
}
