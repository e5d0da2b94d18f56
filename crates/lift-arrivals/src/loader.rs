//! CSV arrival-script loader.
//!
//! # CSV format
//!
//! One headerless row per round that has arrivals.  The first field is the
//! round number; the remaining fields are an even count of floor numbers
//! read as `(start, target)` pairs:
//!
//! ```csv
//! 0,1,4,3,2
//! 2,5,1
//! 7,2,6,6,2,1,5
//! ```
//!
//! Row `0` above scripts two arrivals at round 0: one person travelling
//! 1 → 4 and one travelling 3 → 2.  Rounds absent from the file have no
//! arrivals.  A row may also list just a round number with no pairs.
//!
//! # Validation
//!
//! Loading fails with [`ArrivalError::Parse`] on:
//! - a non-integer field anywhere in a row,
//! - an odd number of floor fields after the round number,
//! - a floor number of 0 (floors are 1-based),
//! - a pair whose start equals its target (no such person can exist).
//!
//! If the same round number appears on multiple rows, the last row wins.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use lift_core::Floor;

use crate::{ArrivalError, ArrivalResult};

/// Round number → scripted `(start, target)` pairs for that round.
pub type ArrivalTable = BTreeMap<u64, Vec<(Floor, Floor)>>;

/// Load an arrival table from a CSV file.
pub fn load_table_csv(path: &Path) -> ArrivalResult<ArrivalTable> {
    let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
    load_table_reader(file)
}

/// Like [`load_table_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or inline script constants.
pub fn load_table_reader<R: Read>(reader: R) -> ArrivalResult<ArrivalTable> {
    // Rows have a variable field count, so read raw records (flexible mode)
    // instead of deserializing into a fixed-shape struct.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = ArrivalTable::new();

    for (line, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| ArrivalError::Parse(e.to_string()))?;
        let mut fields = record.iter();

        let round = match fields.next() {
            None | Some("") => continue, // blank row
            Some(s) => parse_int::<u64>(s, line, "round number")?,
        };

        let floors: Vec<Floor> = fields
            .map(|s| parse_floor(s, line))
            .collect::<ArrivalResult<_>>()?;
        if floors.len() % 2 != 0 {
            return Err(ArrivalError::Parse(format!(
                "row {line}: odd number of floor fields ({}) — expected (start, target) pairs",
                floors.len()
            )));
        }

        let pairs: Vec<(Floor, Floor)> = floors.chunks_exact(2).map(|c| (c[0], c[1])).collect();
        for &(start, target) in &pairs {
            if start == target {
                return Err(ArrivalError::Parse(format!(
                    "row {line}: start and target are both {start}"
                )));
            }
        }

        table.insert(round, pairs);
    }

    Ok(table)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_int<T: std::str::FromStr>(s: &str, line: usize, what: &str) -> ArrivalResult<T> {
    s.parse::<T>()
        .map_err(|_| ArrivalError::Parse(format!("row {line}: invalid {what} {s:?}")))
}

fn parse_floor(s: &str, line: usize) -> ArrivalResult<Floor> {
    let n = parse_int::<u32>(s, line, "floor number")?;
    if n == 0 {
        return Err(ArrivalError::Parse(format!(
            "row {line}: floor numbers are 1-based, got 0"
        )));
    }
    Ok(Floor(n))
}
