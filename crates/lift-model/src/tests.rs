//! Unit tests for lift-model.

use lift_core::Floor;

use crate::{Elevator, Person, WaitingRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(start: u32, target: u32) -> Person {
    Person::new(Floor(start), Floor(target))
}

#[cfg(test)]
mod person_tests {
    use super::*;

    #[test]
    fn new_person_has_not_waited() {
        let p = person(1, 5);
        assert_eq!(p.wait_time, 0);
        assert_eq!(p.anger_level(), 0);
    }

    #[test]
    fn anger_bands() {
        let mut p = person(1, 2);
        // wait_time → expected anger level, over every band edge.
        let expected = [
            (0, 0), (2, 0),
            (3, 1), (4, 1),
            (5, 2), (6, 2),
            (7, 3), (8, 3),
            (9, 4), (40, 4),
        ];
        for (wait, level) in expected {
            p.wait_time = wait;
            assert_eq!(p.anger_level(), level, "wait_time={wait}");
        }
    }

    #[test]
    fn age_accumulates() {
        let mut p = person(2, 3);
        for _ in 0..5 {
            p.age();
        }
        assert_eq!(p.wait_time, 5);
        assert_eq!(p.anger_level(), 2);
    }
}

#[cfg(test)]
mod elevator_tests {
    use super::*;

    #[test]
    fn starts_empty_at_ground() {
        let e = Elevator::new(4);
        assert_eq!(e.floor, Floor::GROUND);
        assert!(e.is_empty());
        assert!(!e.is_full());
        assert_eq!(e.fullness(), 0.0);
    }

    #[test]
    fn fills_to_capacity() {
        let mut e = Elevator::new(2);
        e.board(person(1, 2));
        assert_eq!(e.fullness(), 0.5);
        e.board(person(1, 3));
        assert!(e.is_full());
        assert_eq!(e.fullness(), 1.0);
    }

    #[test]
    fn disembark_takes_only_matching_targets() {
        let mut e = Elevator::new(4);
        e.floor = Floor(3);
        e.board(person(1, 3));
        e.board(person(1, 5));
        e.board(person(2, 3));

        let off = e.disembark_at(Floor(3));
        assert_eq!(off.len(), 2);
        assert!(off.iter().all(|p| p.target == Floor(3)));
        assert_eq!(e.passengers.len(), 1);
        assert_eq!(e.passengers[0].target, Floor(5));
    }

    #[test]
    fn disembark_handles_adjacent_matches() {
        // Adjacent same-target passengers are the classic case where naive
        // remove-while-iterating skips an entry.
        let mut e = Elevator::new(4);
        e.floor = Floor(2);
        e.board(person(1, 2));
        e.board(person(1, 2));
        e.board(person(1, 2));

        let off = e.disembark_at(Floor(2));
        assert_eq!(off.len(), 3);
        assert!(e.is_empty());
    }

    #[test]
    fn disembark_preserves_boarding_order_of_remainder() {
        let mut e = Elevator::new(4);
        e.board(person(1, 4));
        e.board(person(1, 2));
        e.board(person(1, 6));
        e.floor = Floor(2);
        e.disembark_at(Floor(2));
        assert_eq!(e.first_target(), Some(Floor(4)));
        assert_eq!(e.passengers[1].target, Floor(6));
    }

    #[test]
    fn first_target_follows_boarding_order() {
        let mut e = Elevator::new(3);
        assert_eq!(e.first_target(), None);
        e.board(person(1, 6));
        e.board(person(1, 2));
        assert_eq!(e.first_target(), Some(Floor(6)));
    }

    #[test]
    fn nearest_target_ignores_boarding_order() {
        let mut e = Elevator::new(3);
        e.floor = Floor(4);
        e.board(person(1, 8)); // distance 4, boarded first
        e.board(person(1, 5)); // distance 1
        assert_eq!(e.nearest_target(), Some(Floor(5)));
    }

    #[test]
    fn nearest_target_ties_resolve_to_lower_floor() {
        let mut e = Elevator::new(3);
        e.floor = Floor(5);
        e.board(person(1, 7)); // distance 2
        e.board(person(1, 3)); // distance 2
        assert_eq!(e.nearest_target(), Some(Floor(3)));
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn every_floor_has_a_queue() {
        let reg = WaitingRegistry::new(5);
        assert_eq!(reg.num_floors(), 5);
        for n in 1..=5 {
            assert!(reg.queue(Floor(n)).is_empty());
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn fifo_per_floor() {
        let mut reg = WaitingRegistry::new(3);
        reg.push(Floor(2), person(2, 1));
        reg.push(Floor(2), person(2, 3));
        assert_eq!(reg.total_waiting(), 2);

        let first = reg.pop_front(Floor(2)).unwrap();
        assert_eq!(first.target, Floor(1));
        let second = reg.pop_front(Floor(2)).unwrap();
        assert_eq!(second.target, Floor(3));
        assert!(reg.pop_front(Floor(2)).is_none());
        assert_eq!(reg.total_waiting(), 0);
    }

    #[test]
    fn lowest_occupied_floor() {
        let mut reg = WaitingRegistry::new(8);
        assert_eq!(reg.lowest_occupied_floor(), None);
        reg.push(Floor(6), person(6, 1));
        reg.push(Floor(3), person(3, 1));
        assert_eq!(reg.lowest_occupied_floor(), Some(Floor(3)));
    }

    #[test]
    fn nearest_occupied_floor_picks_closest() {
        let mut reg = WaitingRegistry::new(10);
        reg.push(Floor(2), person(2, 1));
        reg.push(Floor(9), person(9, 1));
        assert_eq!(reg.nearest_occupied_floor(Floor(8)), Some(Floor(9)));
        assert_eq!(reg.nearest_occupied_floor(Floor(3)), Some(Floor(2)));
    }

    #[test]
    fn nearest_occupied_floor_ties_resolve_to_lower() {
        let mut reg = WaitingRegistry::new(10);
        reg.push(Floor(3), person(3, 1));
        reg.push(Floor(7), person(7, 1));
        // Floor 5 is equidistant from 3 and 7 — lower floor wins.
        assert_eq!(reg.nearest_occupied_floor(Floor(5)), Some(Floor(3)));
    }

    #[test]
    fn nearest_occupied_floor_empty_registry_is_none() {
        let reg = WaitingRegistry::new(4);
        assert_eq!(reg.nearest_occupied_floor(Floor(2)), None);
    }

    #[test]
    fn occupied_floors_ascending() {
        let mut reg = WaitingRegistry::new(6);
        reg.push(Floor(5), person(5, 1));
        reg.push(Floor(2), person(2, 6));
        let floors: Vec<Floor> = reg.occupied_floors().collect();
        assert_eq!(floors, vec![Floor(2), Floor(5)]);
    }

    #[test]
    fn age_all_touches_every_waiter() {
        let mut reg = WaitingRegistry::new(4);
        reg.push(Floor(1), person(1, 2));
        reg.push(Floor(4), person(4, 2));
        reg.age_all();
        reg.age_all();
        assert!(reg.queue(Floor(1)).iter().all(|p| p.wait_time == 2));
        assert!(reg.queue(Floor(4)).iter().all(|p| p.wait_time == 2));
    }
}
