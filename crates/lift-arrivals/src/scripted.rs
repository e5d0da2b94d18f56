//! Scripted (data-driven) arrivals.

use std::io::Read;
use std::path::Path;

use lift_core::{Round, SimRng};
use lift_model::Person;

use crate::loader::{ArrivalTable, load_table_csv, load_table_reader};
use crate::{ArrivalBatch, ArrivalModel, ArrivalResult};

/// Replays arrivals from a table precomputed at construction time.
///
/// The table is immutable after loading, so `generate` is a pure lookup:
/// same table, same round sequence, identical arrivals, every time.  The
/// injected RNG is ignored.
pub struct ScriptedArrivals {
    table: ArrivalTable,
}

impl ScriptedArrivals {
    /// Wrap an already-built table.
    pub fn new(table: ArrivalTable) -> Self {
        ScriptedArrivals { table }
    }

    /// Load the script from a CSV file (see [`loader`][crate::loader] for the
    /// format).  Fails fast on any malformed row.
    pub fn from_csv(path: &Path) -> ArrivalResult<Self> {
        Ok(ScriptedArrivals::new(load_table_csv(path)?))
    }

    /// Like [`from_csv`][Self::from_csv] but from any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> ArrivalResult<Self> {
        Ok(ScriptedArrivals::new(load_table_reader(reader)?))
    }

    /// Total scripted people across all rounds.
    pub fn total_scripted(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }
}

impl ArrivalModel for ScriptedArrivals {
    fn generate(&self, round: Round, _rng: &mut SimRng) -> ArrivalBatch {
        let mut batch = ArrivalBatch::new();
        let Some(pairs) = self.table.get(&round.0) else {
            return batch; // round not in the script — nobody arrives
        };
        for &(start, target) in pairs {
            batch.entry(start).or_default().push(Person::new(start, target));
        }
        batch
    }
}
