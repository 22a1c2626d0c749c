//! # Expense delimited-text import/export
//!
//! The expense tracker exchanges data as CSV with the fixed column set
//! `amount,category,description,date` and `YYYY-MM-DD` dates. Import takes
//! the file as pre-split lines (the upload path hands the collaborator a
//! line vector), tolerates an optional header row and blank lines, and
//! aborts on the first malformed row with its 1-based line number. Export
//! always writes the header. Export-then-import reproduces the same set of
//! records modulo id reassignment.

use thiserror::Error;

use crate::dates::{format_date, parse_date};
use crate::models::ExpenseRecord;

/// Column order of the expense CSV format.
pub const EXPENSE_CSV_COLUMNS: [&str; 4] = ["amount", "category", "description", "date"];

/// A parsed expense row, not yet assigned an id.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub category: String,
    pub description: String,
    /// Epoch ms, midnight UTC.
    pub date: i64,
}

/// Import/export failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("line {line}: {reason}")]
    BadRow { line: usize, reason: String },
    #[error("failed to write CSV: {0}")]
    Write(String),
}

impl CsvError {
    fn bad_row(line: usize, reason: impl Into<String>) -> Self {
        CsvError::BadRow {
            line,
            reason: reason.into(),
        }
    }
}

/// Parse expense lines into drafts. The first line may be the header.
pub fn parse_expenses(lines: &[String]) -> Result<Vec<ExpenseDraft>, CsvError> {
    let mut drafts = Vec::new();
    for (idx, raw) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if idx == 0 && is_header(line) {
            continue;
        }
        drafts.push(parse_row(line, line_no)?);
    }
    Ok(drafts)
}

/// Serialize expenses to CSV text, header included.
pub fn export_expenses(expenses: &[ExpenseRecord]) -> Result<String, CsvError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(EXPENSE_CSV_COLUMNS)
        .map_err(|e| CsvError::Write(e.to_string()))?;
    for expense in expenses {
        writer
            .write_record([
                format_amount(expense.amount).as_str(),
                &expense.category,
                &expense.description,
                &format_date(expense.date),
            ])
            .map_err(|e| CsvError::Write(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Write(e.to_string()))
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .next()
        .map_or(false, |first| first.trim().eq_ignore_ascii_case("amount"))
}

fn parse_row(line: &str, line_no: usize) -> Result<ExpenseDraft, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());
    let record = match reader.records().next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(CsvError::bad_row(line_no, e.to_string())),
        None => return Err(CsvError::bad_row(line_no, "empty row")),
    };
    if record.len() != EXPENSE_CSV_COLUMNS.len() {
        return Err(CsvError::bad_row(
            line_no,
            format!("expected 4 fields, got {}", record.len()),
        ));
    }

    let amount: f64 = record[0]
        .trim()
        .parse()
        .map_err(|_| CsvError::bad_row(line_no, format!("bad amount {:?}", &record[0])))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(CsvError::bad_row(
            line_no,
            format!("bad amount {:?}", &record[0]),
        ));
    }
    let date = parse_date(&record[3])
        .ok_or_else(|| CsvError::bad_row(line_no, format!("bad date {:?}", &record[3])))?;

    Ok(ExpenseDraft {
        amount,
        category: record[1].trim().to_string(),
        description: record[2].trim().to_string(),
        date,
    })
}

/// Amounts export with two decimal places, the display convention.
fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: u64, amount: f64, category: &str, description: &str, day: &str) -> ExpenseRecord {
        ExpenseRecord {
            id,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date: parse_date(day).expect("valid day"),
        }
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn export_then_import_round_trips() {
        let original = vec![
            expense(1, 12.5, "Food", "groceries", "2026-01-05"),
            expense(2, 7.0, "Transport", "bus pass", "2026-01-07"),
            expense(3, 99.99, "Rent", "with, a comma", "2026-02-01"),
        ];
        let csv_text = export_expenses(&original).expect("export");
        let drafts = parse_expenses(&lines(&csv_text)).expect("import");

        assert_eq!(drafts.len(), original.len());
        for (draft, record) in drafts.iter().zip(&original) {
            assert_eq!(draft.amount, record.amount);
            assert_eq!(draft.category, record.category);
            assert_eq!(draft.description, record.description);
            assert_eq!(draft.date, record.date);
        }
    }

    #[test]
    fn header_and_blank_lines_are_skipped() {
        let text = "amount,category,description,date\n\n4.20,Food,coffee,2026-03-01\n";
        let drafts = parse_expenses(&lines(text)).expect("import");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].category, "Food");
    }

    #[test]
    fn headerless_input_is_accepted() {
        let text = "4.20,Food,coffee,2026-03-01";
        let drafts = parse_expenses(&lines(text)).expect("import");
        assert_eq!(drafts.len(), 1);
    }

    #[test]
    fn malformed_rows_report_their_line_number() {
        let text = "amount,category,description,date\n4.20,Food,coffee,2026-03-01\noops,Food,x,2026-03-02";
        let err = parse_expenses(&lines(text)).expect_err("bad amount");
        assert_eq!(
            err,
            CsvError::BadRow {
                line: 3,
                reason: "bad amount \"oops\"".to_string()
            }
        );

        let text = "1.00,Food,x,03/02/2026";
        let err = parse_expenses(&lines(text)).expect_err("bad date");
        assert!(matches!(err, CsvError::BadRow { line: 1, .. }));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let text = "-1.00,Food,x,2026-03-02";
        assert!(parse_expenses(&lines(text)).is_err());
    }

    #[test]
    fn quoted_commas_survive() {
        let text = "9.00,Travel,\"taxi, airport\",2026-04-01";
        let drafts = parse_expenses(&lines(text)).expect("import");
        assert_eq!(drafts[0].description, "taxi, airport");
    }
}
