use chrono::NaiveDateTime;

use crate::domain::{Amount, CREATED_AT_FORMAT, Order, OrderRow};
use crate::error::IngestError;

impl Order {
    /// Validates a decoded row into an [`Order`], reporting failures with
    /// the 1-based line number the row came from.
    pub(crate) fn from_row(row: OrderRow, line: usize) -> Result<Self, IngestError> {
        let id = match row.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(IngestError::MissingField { line, field: "id" }),
        };

        let raw = row
            .created_at
            .ok_or(IngestError::MissingField {
                line,
                field: "created_at",
            })?;
        let created_at = NaiveDateTime::parse_from_str(&raw, CREATED_AT_FORMAT)
            .map_err(|_| IngestError::InvalidTimestamp {
                line,
                value: raw.clone(),
            })?
            .date();

        let amount = match row.amount_cents {
            None => Amount::Missing,
            Some(value) => value.as_i64().map(Amount::Cents).unwrap_or(Amount::Invalid),
        };

        Ok(Order {
            id,
            marketplace: row.marketplace,
            country: row.country,
            amount,
            created_at: Some(created_at),
        })
    }

    /// The marketplace with surrounding whitespace stripped, or `None` when
    /// it is absent or blank.
    pub fn marketplace_trimmed(&self) -> Option<&str> {
        let mp = self.marketplace.as_deref().unwrap_or("").trim();
        (!mp.is_empty()).then_some(mp)
    }
}
