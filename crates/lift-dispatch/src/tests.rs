//! Unit tests for lift-dispatch.

use lift_core::{Direction, Floor, SimRng};
use lift_model::{Elevator, Person, WaitingRegistry};

use crate::{DispatchModel, Idle, PushyPassenger, RandomDispatch, ShortSighted};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn elevator_at(floor: u32) -> Elevator {
    let mut e = Elevator::new(4);
    e.floor = Floor(floor);
    e
}

fn elevator_with_targets(floor: u32, targets: &[u32]) -> Elevator {
    let mut e = elevator_at(floor);
    for &t in targets {
        e.board(Person::new(Floor(1), Floor(t)));
    }
    e
}

fn registry_with_waiters(num_floors: u32, floors: &[u32]) -> WaitingRegistry {
    let mut reg = WaitingRegistry::new(num_floors);
    for &f in floors {
        let target = if f == 1 { Floor(2) } else { Floor(f - 1) };
        reg.push(Floor(f), Person::new(Floor(f), target));
    }
    reg
}

fn decide_one(model: &dyn DispatchModel, e: Elevator, reg: &WaitingRegistry, top: u32) -> Direction {
    let mut rng = SimRng::new(0);
    model.decide(&[e], reg, Floor(top), &mut rng)[0]
}

// ── Boundary contract (all variants) ──────────────────────────────────────────

#[cfg(test)]
mod boundary {
    use super::*;

    /// Every variant, queried many times at both boundary floors, must never
    /// answer off the end of the building.
    #[test]
    fn no_variant_leaves_the_building() {
        let top = Floor(6);
        let reg = registry_with_waiters(6, &[2, 6]);
        let models: [&dyn DispatchModel; 4] =
            [&RandomDispatch, &PushyPassenger, &ShortSighted, &Idle];

        let mut rng = SimRng::new(42);
        for model in models {
            for _ in 0..200 {
                let cars = [elevator_at(1), elevator_at(6), elevator_at(3)];
                let dirs = model.decide(&cars, &reg, top, &mut rng);
                assert_eq!(dirs.len(), 3);
                assert_ne!(dirs[0], Direction::Down, "ground floor sent down");
                assert_ne!(dirs[1], Direction::Up, "top floor sent up");
            }
        }
    }

    #[test]
    fn random_uses_all_valid_directions() {
        let reg = WaitingRegistry::new(6);
        let mut rng = SimRng::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let dirs = RandomDispatch.decide(&[elevator_at(3)], &reg, Floor(6), &mut rng);
            seen.insert(dirs[0]);
        }
        assert_eq!(seen.len(), 3, "interior floor should see Up, Down, and Stay");
    }
}

// ── PushyPassenger ────────────────────────────────────────────────────────────

#[cfg(test)]
mod pushy {
    use super::*;

    #[test]
    fn empty_car_heads_for_lowest_waiting_floor() {
        let reg = registry_with_waiters(8, &[6, 3]);
        assert_eq!(decide_one(&PushyPassenger, elevator_at(5), &reg, 8), Direction::Down);
        assert_eq!(decide_one(&PushyPassenger, elevator_at(2), &reg, 8), Direction::Up);
        assert_eq!(decide_one(&PushyPassenger, elevator_at(3), &reg, 8), Direction::Stay);
    }

    #[test]
    fn empty_car_stays_when_nobody_waits() {
        let reg = WaitingRegistry::new(8);
        assert_eq!(decide_one(&PushyPassenger, elevator_at(4), &reg, 8), Direction::Stay);
    }

    #[test]
    fn loaded_car_follows_first_boarder() {
        // First boarder wants floor 7; a later boarder wants floor 2.
        let car = elevator_with_targets(4, &[7, 2]);
        let reg = registry_with_waiters(8, &[1]); // waiting people must not matter
        assert_eq!(decide_one(&PushyPassenger, car, &reg, 8), Direction::Up);
    }

    #[test]
    fn loaded_car_at_first_target_stays() {
        let car = elevator_with_targets(5, &[5, 2]);
        let reg = WaitingRegistry::new(8);
        assert_eq!(decide_one(&PushyPassenger, car, &reg, 8), Direction::Stay);
    }
}

// ── ShortSighted ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod short_sighted {
    use super::*;

    #[test]
    fn empty_car_heads_for_nearest_waiting_floor() {
        let reg = registry_with_waiters(10, &[2, 9]);
        assert_eq!(decide_one(&ShortSighted, elevator_at(8), &reg, 10), Direction::Up);
        assert_eq!(decide_one(&ShortSighted, elevator_at(4), &reg, 10), Direction::Down);
    }

    #[test]
    fn equidistant_waiting_floors_resolve_to_lower() {
        // Waiters at 3 and 7, car at 5 — equidistant, lower floor wins.
        let reg = registry_with_waiters(10, &[3, 7]);
        assert_eq!(decide_one(&ShortSighted, elevator_at(5), &reg, 10), Direction::Down);
    }

    #[test]
    fn empty_car_stays_when_nobody_waits() {
        let reg = WaitingRegistry::new(10);
        assert_eq!(decide_one(&ShortSighted, elevator_at(5), &reg, 10), Direction::Stay);
    }

    #[test]
    fn loaded_car_heads_for_nearest_target_ignoring_boarding_order() {
        // First boarder wants 9 (far), second wants 4 (near).
        let car = elevator_with_targets(5, &[9, 4]);
        let reg = registry_with_waiters(10, &[1]);
        assert_eq!(decide_one(&ShortSighted, car, &reg, 10), Direction::Down);
    }

    #[test]
    fn equidistant_targets_resolve_to_lower() {
        let car = elevator_with_targets(5, &[7, 3]);
        let reg = WaitingRegistry::new(10);
        assert_eq!(decide_one(&ShortSighted, car, &reg, 10), Direction::Down);
    }
}

// ── Idle ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle {
    use super::*;

    #[test]
    fn always_stays() {
        let reg = registry_with_waiters(6, &[2, 5]);
        let cars = [elevator_at(1), elevator_with_targets(3, &[6])];
        let mut rng = SimRng::new(0);
        let dirs = Idle.decide(&cars, &reg, Floor(6), &mut rng);
        assert_eq!(dirs, vec![Direction::Stay, Direction::Stay]);
    }
}
