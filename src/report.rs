use crate::domain::Stats;

/// Converts integer cents to an exact `X.YY` major-unit string.
///
/// Amounts are whole cents, so two forced decimals via integer div/mod are
/// exact; no floating point is involved anywhere.
fn cents_to_eur(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Renders the final report. Deterministic: marketplaces are ordered by
/// revenue descending, ties broken by name ascending; suspicious entries
/// keep the order the aggregator collected them in.
pub fn format_report(stats: &Stats) -> String {
    let mut items: Vec<(&str, i64)> = stats
        .revenue_by_marketplace_cents
        .iter()
        .map(|(name, &cents)| (name.as_str(), cents))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = Vec::new();
    out.push(format!(
        "Total revenue: {} EUR",
        cents_to_eur(stats.total_cents)
    ));
    out.push(String::new());
    out.push("Revenue by marketplace:".to_owned());
    for (name, cents) in items {
        out.push(format!("- {name}: {} EUR", cents_to_eur(cents)));
    }

    out.push(String::new());
    out.push("Suspicious orders:".to_owned());
    if stats.suspicious.is_empty() {
        out.push("- (none)".to_owned());
    } else {
        for s in &stats.suspicious {
            out.push(format!("- {}: {}", s.order_id, s.reason));
        }
    }

    out.join("\n")
}
