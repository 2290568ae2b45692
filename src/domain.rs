mod impls;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// Timestamp format used by the `created_at` field of the orders export.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A single order record. Constructed during ingestion, read-only after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub marketplace: Option<String>,
    pub country: Option<String>,
    pub amount: Amount,
    pub created_at: Option<NaiveDate>,
}

/// The `amount_cents` field as it appears in the input. The export is
/// loosely typed, so "present but not an integer" is a state of its own
/// rather than a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    Cents(i64),
    Invalid,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousOrder {
    pub order_id: String,
    pub reason: String,
}

/// Accumulated results of one aggregation pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_cents: i64,
    pub revenue_by_marketplace_cents: HashMap<String, i64>,
    pub suspicious: Vec<SuspiciousOrder>,
    pub processed_orders: u64,
    pub invalid_orders: u64,
}

/// A helper struct to facilitate JSONL deserialization of orders.
///
/// Every field is optional here so that required-field and timestamp errors
/// can be reported with their line number instead of as opaque decode
/// failures. The key set itself is closed.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct OrderRow {
    pub id: Option<String>,
    pub marketplace: Option<String>,
    pub country: Option<String>,
    pub amount_cents: Option<serde_json::Value>,
    pub created_at: Option<String>,
}
