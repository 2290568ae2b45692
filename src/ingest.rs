use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::domain::{Order, OrderRow};
use crate::error::IngestError;

/// Reads the orders export at `path`, one JSON order per line.
pub fn read_orders(path: &Path) -> Result<Vec<Order>, IngestError> {
    let file = File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            IngestError::NotFound {
                path: path.to_owned(),
            }
        } else {
            IngestError::Io(err)
        }
    })?;
    read_orders_from(BufReader::new(file))
}

/// Decodes orders from any buffered reader, preserving input order.
///
/// Blank lines are skipped but still count toward the line numbers used in
/// error messages. Fails fast on the first malformed or invalid record.
pub fn read_orders_from(reader: impl BufRead) -> Result<Vec<Order>, IngestError> {
    let mut orders = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row: OrderRow = serde_json::from_str(line).map_err(|source| IngestError::Parse {
            line: number,
            source,
        })?;
        orders.push(Order::from_row(row, number)?);
    }

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Amount;

    fn read(input: &str) -> Result<Vec<Order>, IngestError> {
        read_orders_from(Cursor::new(input))
    }

    #[test]
    fn reads_orders_in_file_order() {
        let input = concat!(
            "{\"id\": \"o-1\", \"marketplace\": \"amazon\", \"country\": \"DE\", \"amount_cents\": 150, \"created_at\": \"2024-10-15T09:30:00Z\"}\n",
            "{\"id\": \"o-2\", \"amount_cents\": 200, \"created_at\": \"2024-11-15T00:00:00Z\"}\n",
        );
        let orders = read(input).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "o-1");
        assert_eq!(orders[0].marketplace.as_deref(), Some("amazon"));
        assert_eq!(orders[0].country.as_deref(), Some("DE"));
        assert_eq!(orders[0].amount, Amount::Cents(150));
        assert_eq!(
            orders[0].created_at,
            Some(NaiveDate::from_ymd_opt(2024, 10, 15).unwrap())
        );
        assert_eq!(orders[1].id, "o-2");
        assert_eq!(orders[1].marketplace, None);
    }

    #[test]
    fn skips_blank_lines_but_keeps_line_numbers() {
        let input = concat!(
            "{\"id\": \"o-1\", \"amount_cents\": 1, \"created_at\": \"2024-10-15T09:30:00Z\"}\n",
            "\n",
            "   \n",
            "not json\n",
        );
        let err = read(input).unwrap_err();
        assert!(matches!(err, IngestError::Parse { line: 4, .. }));
    }

    #[test]
    fn missing_id_is_a_validation_error() {
        let err = read("{\"created_at\": \"2024-10-15T09:30:00Z\"}\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingField { line: 1, field: "id" }
        ));
    }

    #[test]
    fn missing_created_at_is_a_validation_error() {
        let err = read("{\"id\": \"o-1\", \"amount_cents\": 1}\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingField {
                line: 1,
                field: "created_at"
            }
        ));
    }

    #[test]
    fn malformed_timestamp_is_rejected_with_line_number() {
        let input = concat!(
            "{\"id\": \"o-1\", \"amount_cents\": 1, \"created_at\": \"2024-10-15T09:30:00Z\"}\n",
            "{\"id\": \"o-2\", \"amount_cents\": 1, \"created_at\": \"2024-10-15\"}\n",
        );
        let err = read(input).unwrap_err();
        match err {
            IngestError::InvalidTimestamp { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "2024-10-15");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn amount_typing_is_preserved() {
        let input = concat!(
            "{\"id\": \"int\", \"amount_cents\": -50, \"created_at\": \"2024-10-15T09:30:00Z\"}\n",
            "{\"id\": \"float\", \"amount_cents\": 1.5, \"created_at\": \"2024-10-15T09:30:00Z\"}\n",
            "{\"id\": \"string\", \"amount_cents\": \"100\", \"created_at\": \"2024-10-15T09:30:00Z\"}\n",
            "{\"id\": \"absent\", \"created_at\": \"2024-10-15T09:30:00Z\"}\n",
        );
        let orders = read(input).unwrap();

        assert_eq!(orders[0].amount, Amount::Cents(-50));
        assert_eq!(orders[1].amount, Amount::Invalid);
        assert_eq!(orders[2].amount, Amount::Invalid);
        assert_eq!(orders[3].amount, Amount::Missing);
    }

    #[test]
    fn unknown_keys_are_a_parse_error() {
        let input =
            "{\"id\": \"o-1\", \"created_at\": \"2024-10-15T09:30:00Z\", \"notes\": \"hi\"}\n";
        assert!(matches!(
            read(input).unwrap_err(),
            IngestError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_orders(Path::new("definitely/not/here.jsonl")).unwrap_err();
        match err {
            IngestError::NotFound { path } => {
                assert_eq!(path, Path::new("definitely/not/here.jsonl"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
