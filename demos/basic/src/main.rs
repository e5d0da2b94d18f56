//! basic — smallest example for the lift elevator simulator.
//!
//! Runs the same ten-floor building twice: once with a scripted morning rush
//! loaded from an embedded CSV, once with uniformly random traffic.  Both
//! runs use the short-sighted dispatcher and print per-round car positions
//! plus a final stats block as JSON.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use lift_arrivals::{RandomArrivals, ScriptedArrivals};
use lift_core::{Direction, Round, SimConfig};
use lift_dispatch::ShortSighted;
use lift_model::{Elevator, WaitingRegistry};
use lift_sim::{RunStats, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:        u32   = 10;
const NUM_ELEVATORS:     usize = 2;
const ELEVATOR_CAPACITY: usize = 4;
const SEED:              u64   = 42;
const NUM_ROUNDS:        u64   = 40;
const RANDOM_PER_ROUND:  usize = 2;

// ── Arrival CSV ───────────────────────────────────────────────────────────────

// round, then (start, target) pairs.  A small morning rush: everyone enters
// at the lobby early on, then a few inter-floor trips later.
const ARRIVALS_CSV: &str = "\
0,1,7,1,4,1,9\n\
1,1,3,1,8\n\
2,1,5\n\
8,4,1,7,2\n\
12,9,1,3,10\n\
";

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints one line per round with car positions and load, plus every
/// delivery as it happens.
struct Progress {
    deliveries: u64,
}

impl SimObserver for Progress {
    fn on_disembark(&mut self, round: Round, car: usize, person: &lift_model::Person) {
        self.deliveries += 1;
        println!(
            "  {round}: car {car} delivered {} -> {} after {} rounds (anger {})",
            person.start,
            person.target,
            person.wait_time,
            person.anger_level()
        );
    }

    fn on_round_end(&mut self, round: Round, elevators: &[Elevator], waiting: &WaitingRegistry) {
        let cars: Vec<String> = elevators
            .iter()
            .map(|e| format!("{}[{}/{}]", e.floor, e.passengers.len(), e.capacity))
            .collect();
        println!(
            "  {round}: cars {}  waiting {}",
            cars.join(" "),
            waiting.total_waiting()
        );
    }

    fn on_moves(&mut self, _round: Round, _elevators: &[Elevator], directions: &[Direction]) {
        let arrows: Vec<&str> = directions
            .iter()
            .map(|d| match d {
                Direction::Up => "^",
                Direction::Down => "v",
                Direction::Stay => "-",
            })
            .collect();
        print!("  moves {}", arrows.join(" "));
        println!();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn config() -> SimConfig {
    SimConfig {
        num_floors:        NUM_FLOORS,
        num_elevators:     NUM_ELEVATORS,
        elevator_capacity: ELEVATOR_CAPACITY,
        seed:              SEED,
    }
}

fn report(label: &str, stats: &RunStats, elapsed_secs: f64) -> Result<()> {
    println!();
    println!("{label} complete in {elapsed_secs:.3} s");
    println!("{}", serde_json::to_string_pretty(stats)?);
    println!();
    Ok(())
}

fn main() -> Result<()> {
    println!("=== basic — lift elevator simulator ===");
    println!(
        "Building: {NUM_FLOORS} floors  |  Cars: {NUM_ELEVATORS} x {ELEVATOR_CAPACITY}  |  Seed: {SEED}"
    );
    println!();

    // 1. Scripted run: embedded morning-rush CSV.
    let arrivals = ScriptedArrivals::from_reader(Cursor::new(ARRIVALS_CSV))?;
    println!("Scripted run: {} people over {NUM_ROUNDS} rounds", arrivals.total_scripted());

    let sim = SimBuilder::new(config(), arrivals, ShortSighted).build()?;
    let mut obs = Progress { deliveries: 0 };
    let t0 = Instant::now();
    let stats = sim.run(NUM_ROUNDS, &mut obs)?;
    println!("  {} deliveries observed", obs.deliveries);
    report("Scripted run", &stats, t0.elapsed().as_secs_f64())?;

    // 2. Random run: same building, uniform traffic, no per-round printing.
    let arrivals = RandomArrivals::new(Some(RANDOM_PER_ROUND), config().top_floor());
    println!("Random run: {RANDOM_PER_ROUND} people/round over {NUM_ROUNDS} rounds");

    let sim = SimBuilder::new(config(), arrivals, ShortSighted).build()?;
    let t0 = Instant::now();
    let stats = sim.run(NUM_ROUNDS, &mut lift_sim::NoopObserver)?;
    report("Random run", &stats, t0.elapsed().as_secs_f64())?;

    Ok(())
}
