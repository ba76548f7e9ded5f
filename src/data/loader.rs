use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{DataError, Result};
use super::model::RawRecord;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Names of the three columns the dashboard reads. Other columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub program: String,
    pub semester: String,
    pub ects: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            program: "STUDBEZ_kompakt".to_string(),
            semester: "besuchtesSemester".to_string(),
            ects: "ECTS_Sem".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load student records from a file.
///
/// CSV layout: header row, `;` separated, Latin-1 encoded, decimal comma:
///
/// ```text
/// STUDBEZ_kompakt;besuchtesSemester;ECTS_Sem
/// "BA; PPP";1;27,5
/// ```
///
/// Program codes containing `;` must be quoted.
pub fn load_csv(path: &Path, columns: &ColumnNames) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    parse_csv(file, columns)
}

/// Parse student records from any reader. See [`load_csv`] for the layout.
pub fn parse_csv<R: Read>(input: R, columns: &ColumnNames) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(input);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| decode_latin1(h).trim().to_string())
        .collect();

    let column_index = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingField(name.to_string()))
    };
    let program_idx = column_index(&columns.program)?;
    let semester_idx = column_index(&columns.semester)?;
    let ects_idx = column_index(&columns.ects)?;

    let mut records = Vec::new();

    for (i, result) in reader.byte_records().enumerate() {
        let row = i + 1;
        let record = result?;
        let field = |idx: usize| decode_latin1(record.get(idx).unwrap_or_default());

        let program = field(program_idx).trim().to_string();
        if program.is_empty() {
            return Err(DataError::invalid(
                Some(row),
                format!("'{}' is empty", columns.program),
            ));
        }

        let semester_raw = field(semester_idx);
        let semester = semester_raw.trim().parse::<i64>().map_err(|_| {
            DataError::invalid(
                Some(row),
                format!(
                    "'{}' value '{}' is not an integer",
                    columns.semester,
                    semester_raw.trim()
                ),
            )
        })?;

        let ects_raw = field(ects_idx);
        let ects = parse_decimal(&ects_raw).ok_or_else(|| {
            DataError::invalid(
                Some(row),
                format!(
                    "'{}' value '{}' is not a number",
                    columns.ects,
                    ects_raw.trim()
                ),
            )
        })?;

        records.push(RawRecord::new(program, semester, ects));
    }

    log::debug!("Parsed {} student records", records.len());
    Ok(records)
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse a decimal written with a comma (`"3,5"`) or a dot (`"3.5"`).
/// Non-finite results (`"inf"`, `"NaN"`) are rejected.
fn parse_decimal(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
