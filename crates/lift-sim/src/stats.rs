//! Run statistics: running counters during the loop, a summary at the end.

/// Final statistics for one completed run.
///
/// The three `*_time` fields summarize the wait times of *delivered* people
/// only; when nobody was delivered they hold the sentinel `-1`.  `avg_time`
/// is the integer-truncated mean.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Rounds executed.
    pub num_iterations: u64,
    /// People generated by the arrival model over the whole run.
    pub total_people: u64,
    /// People delivered to their target floor.
    pub people_completed: u64,
    /// Longest completed wait, or −1.
    pub max_time: i64,
    /// Shortest completed wait, or −1.
    pub min_time: i64,
    /// Integer-truncated mean completed wait, or −1.
    pub avg_time: i64,
}

/// Counters accumulated while the round loop runs.
///
/// Owned by `Sim`; folded into a [`RunStats`] once the final round finishes.
#[derive(Default)]
pub(crate) struct StatsAccumulator {
    pub(crate) total_people: u64,
    wait_times: Vec<u32>,
}

impl StatsAccumulator {
    /// Record one delivered person's final wait time.
    pub(crate) fn record_delivery(&mut self, wait_time: u32) {
        self.wait_times.push(wait_time);
    }

    /// Summarize the run.
    pub(crate) fn finish(self, num_iterations: u64) -> RunStats {
        let times = &self.wait_times;
        let (max_time, min_time, avg_time) = if times.is_empty() {
            (-1, -1, -1)
        } else {
            let sum: u64 = times.iter().map(|&t| t as u64).sum();
            (
                *times.iter().max().unwrap() as i64,
                *times.iter().min().unwrap() as i64,
                (sum / times.len() as u64) as i64,
            )
        };
        RunStats {
            num_iterations,
            total_people: self.total_people,
            people_completed: times.len() as u64,
            max_time,
            min_time,
            avg_time,
        }
    }
}
