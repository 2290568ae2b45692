use chrono::NaiveDate;

use crate::domain::{Amount, Order, Stats, SuspiciousOrder};
use crate::error::FromDateError;

/// Parses the optional `--from` lower bound supplied by the CLI.
pub fn parse_from_date(input: &str) -> Result<NaiveDate, FromDateError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| FromDateError {
        input: input.to_owned(),
    })
}

/// Date filter: with no bound everything is in scope; with a bound, orders
/// without a usable date are excluded, everything else is compared
/// inclusively.
pub fn include_from(order: &Order, from_date: Option<NaiveDate>) -> bool {
    match (from_date, order.created_at) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(from), Some(created)) => created >= from,
    }
}

/// Anomaly rules for a single order. Only called for orders that carry a
/// valid integer amount; the negative-amount rule fires before the
/// empty-marketplace rule when both apply.
pub fn suspicious_issues(order: &Order) -> Vec<SuspiciousOrder> {
    let mut issues = Vec::new();

    if let Amount::Cents(cents) = order.amount
        && cents < 0
    {
        issues.push(SuspiciousOrder {
            order_id: order.id.clone(),
            reason: format!("negative amount ({cents})"),
        });
    }

    if order.marketplace_trimmed().is_none() {
        issues.push(SuspiciousOrder {
            order_id: order.id.clone(),
            reason: "empty marketplace".to_owned(),
        });
    }

    issues
}

/// Folds the order sequence into [`Stats`] in a single pass, preserving
/// input order in the suspicious list.
///
/// Orders with a missing or non-integer amount count as invalid and skip
/// the anomaly rules entirely. Negative and zero amounts are processed but
/// contribute to no revenue figure.
pub fn aggregate(orders: &[Order], from_date: Option<NaiveDate>) -> Stats {
    let mut stats = Stats::default();

    for order in orders {
        if !include_from(order, from_date) {
            continue;
        }

        stats.processed_orders += 1;

        let cents = match order.amount {
            Amount::Cents(cents) => cents,
            Amount::Missing | Amount::Invalid => {
                stats.invalid_orders += 1;
                stats.suspicious.push(SuspiciousOrder {
                    order_id: order.id.clone(),
                    reason: "missing/invalid amount_cents".to_owned(),
                });
                continue;
            }
        };

        stats.suspicious.extend(suspicious_issues(order));

        if cents <= 0 {
            continue;
        }

        stats.total_cents += cents;
        if let Some(mp) = order.marketplace_trimmed() {
            *stats
                .revenue_by_marketplace_cents
                .entry(mp.to_owned())
                .or_default() += cents;
        }
    }

    stats
}
