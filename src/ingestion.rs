use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Date, Error, Operation, OperationKind};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    day: u8,
    month: u8,
    amount: Option<Decimal>,
    country: Option<String>,
}

/// The account assumes its preconditions hold, so rows are validated here:
/// positive amounts, a country on every purchase, and a plausible date.
impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        if !(1..=12).contains(&row.month) || !(1..=31).contains(&row.day) {
            return Err(Error::Ingestion(format!(
                "Invalid date: day {} month {}",
                row.day, row.month
            )));
        }
        if let Some(amount) = row.amount {
            if amount <= Decimal::ZERO {
                return Err(Error::Ingestion(format!("Non-positive amount: {}", amount)));
            }
        }

        let kind = match (
            row.kind.trim().to_ascii_lowercase().as_str(),
            row.amount,
            row.country,
        ) {
            ("purchase", Some(amount), Some(country)) if !country.is_empty() => {
                OperationKind::Purchase { amount, country }
            }
            ("purchase", _, _) => {
                return Err(Error::Ingestion(
                    "Purchase requires an amount and a country".to_string(),
                ));
            }
            ("payment", Some(amount), None) => OperationKind::Payment { amount },
            ("balance", None, None) => OperationKind::Balance,
            (other, _, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(Operation {
            kind,
            date: Date::new(row.day, row.month),
        })
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take ownership of the reader so the iterator we build owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        // into_deserialize consumes the reader and returns an owning iterator
        let iter = reader.into_deserialize::<CsvRow>().map(|row_res| match row_res {
            Ok(row) => Operation::try_from(row),
            Err(e) => Err(Error::Ingestion(format!("CSV deserialization error: {}", e))),
        });

        Box::pin(stream::iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    async fn collect(input: &str) -> Vec<Result<Operation, Error>> {
        let mut reader =
            CsvReader::new(std::io::Cursor::new(input.to_owned())).expect("build reader");
        reader.stream().collect().await
    }

    #[tokio::test]
    async fn parses_the_three_operation_kinds() {
        let rows = collect(
            "type, day, month, amount, country\n\
             purchase, 1, 1, 100.0, CA\n\
             balance, 1, 2, ,\n\
             payment, 10, 2, 50.0,",
        )
        .await;

        assert_eq!(rows.len(), 3);
        assert!(matches!(
            rows[0].as_ref().unwrap().kind,
            OperationKind::Purchase { .. }
        ));
        assert!(matches!(
            rows[1].as_ref().unwrap().kind,
            OperationKind::Balance
        ));
        assert!(matches!(
            rows[2].as_ref().unwrap().kind,
            OperationKind::Payment { .. }
        ));
    }

    #[tokio::test]
    async fn rejects_bad_rows_without_stopping_the_stream() {
        let rows = collect(
            "type, day, month, amount, country\n\
             purchase, 1, 1, -5.0, CA\n\
             purchase, 1, 13, 5.0, CA\n\
             purchase, 2, 1, 5.0,\n\
             refund, 2, 1, 5.0,\n\
             purchase, 3, 1, 5.0, CA",
        )
        .await;

        assert_eq!(rows.len(), 5);
        assert!(rows[0].is_err()); // negative amount
        assert!(rows[1].is_err()); // month out of range
        assert!(rows[2].is_err()); // missing country
        assert!(rows[3].is_err()); // unknown type
        assert!(rows[4].is_ok());
    }
}
