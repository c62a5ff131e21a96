//! Summary, trend and budget status formatting

use std::collections::BTreeMap;

use crate::models::{BudgetStatus, Money, TrendPoint, DATE_FORMAT};

use super::report::{format_bar, format_percentage, separator};

const BAR_WIDTH: usize = 20;

/// Format overall totals with the expense breakdown by category
pub fn format_summary(
    income: Money,
    expenses: Money,
    balance: Money,
    by_category: &BTreeMap<String, Money>,
) -> String {
    let mut output = String::new();

    output.push_str("Financial Summary\n");
    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!("{:<16} {:>14}\n", "Total Income:", income));
    output.push_str(&format!("{:<16} {:>14}\n", "Total Expenses:", expenses));
    output.push_str(&format!("{:<16} {:>14}\n", "Balance:", balance));

    if by_category.is_empty() {
        return output;
    }

    output.push_str("\nExpenses by Category\n");
    output.push_str(&separator(50));
    output.push('\n');

    let max = by_category.values().map(Money::cents).max().unwrap_or(0) as f64;
    for (category, spent) in by_category {
        let share = if expenses.is_zero() {
            0.0
        } else {
            spent.cents() as f64 * 100.0 / expenses.cents() as f64
        };
        output.push_str(&format!(
            "{:<16} {:>12} {:>6} {}\n",
            category,
            spent,
            format_percentage(share),
            format_bar(spent.cents() as f64, max, BAR_WIDTH)
        ));
    }

    output
}

/// Format a spending trend as one bar per day
pub fn format_trend(points: &[TrendPoint], category: Option<&str>, days: u32) -> String {
    let mut output = format!(
        "Spending trend: {}, last {} days\n",
        category.unwrap_or("all categories"),
        days
    );
    output.push_str(&separator(50));
    output.push('\n');

    if points.is_empty() {
        output.push_str("No spending in this period.\n");
        return output;
    }

    let max = points.iter().map(|p| p.amount.cents()).max().unwrap_or(0) as f64;
    for point in points {
        output.push_str(&format!(
            "{} {:>12} {}\n",
            point.date.format(DATE_FORMAT),
            point.amount,
            format_bar(point.amount.cents() as f64, max, BAR_WIDTH)
        ));
    }

    let total: Money = points.iter().map(|p| p.amount).sum();
    output.push_str(&separator(50));
    output.push('\n');
    output.push_str(&format!("{:<10} {:>12}\n", "Total", total));

    output
}

/// Format the status of a single budget
pub fn format_budget_status(category: &str, status: &BudgetStatus) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", category));
    output.push_str(&format!("  Budget:    {}\n", status.budget));
    output.push_str(&format!("  Spent:     {}\n", status.spent));
    output.push_str(&format!("  Remaining: {}\n", status.remaining));
    output.push_str(&format!(
        "  Used:      {:.1}% {}\n",
        status.percentage,
        format_bar(status.percentage.min(100.0), 100.0, BAR_WIDTH)
    ));

    if status.over_budget {
        output.push_str("  Over budget!\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_summary() {
        let mut by_category = BTreeMap::new();
        by_category.insert("Food".to_string(), Money::from_cents(7500));
        by_category.insert("Other".to_string(), Money::from_cents(2500));

        let output = format_summary(
            Money::from_cents(50000),
            Money::from_cents(10000),
            Money::from_cents(40000),
            &by_category,
        );

        assert!(output.contains("$500.00"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("75%"));
        assert!(output.contains("25%"));
    }

    #[test]
    fn test_format_trend_empty() {
        let output = format_trend(&[], Some("Food"), 7);
        assert!(output.contains("Food, last 7 days"));
        assert!(output.contains("No spending"));
    }

    #[test]
    fn test_format_trend_total() {
        let points = [
            TrendPoint {
                date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
                amount: Money::from_cents(300),
            },
            TrendPoint {
                date: NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
                amount: Money::from_cents(150),
            },
        ];

        let output = format_trend(&points, None, 30);
        assert!(output.contains("2025-11-01"));
        assert!(output.contains("$4.50"));
    }

    #[test]
    fn test_format_budget_status_over() {
        let status = BudgetStatus::evaluate(Money::from_cents(10000), Money::from_cents(11000));
        let output = format_budget_status("Food", &status);

        assert!(output.contains("-$10.00"));
        assert!(output.contains("110.0%"));
        assert!(output.contains("Over budget!"));
    }
}
