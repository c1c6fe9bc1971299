//! Property-based tests for slot allocation.
//!
//! These check the allocation invariants against a simple model: a park
//! always lands in the lowest free slot, a leave frees exactly the slot
//! named, and capacity never changes between creates.

use super::{ParkingLot, Slot, SlotNumber};
use crate::error::Notice;
use proptest::prelude::*;

// ============================================================================
// STRATEGY DEFINITIONS
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Park(String, String),
    Leave(i64),
}

fn colour_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["White", "white", "Black", "Red", "BLUE"]).prop_map(String::from)
}

fn op_strategy(capacity: i64) -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[A-Z]{2}-[0-9]{2}-[0-9]{4}", colour_strategy()).prop_map(|(r, c)| Op::Park(r, c)),
        (-1..=capacity + 2).prop_map(Op::Leave),
    ]
}

fn scenario_strategy() -> impl Strategy<Value = (i64, Vec<Op>)> {
    (1i64..=12).prop_flat_map(|capacity| {
        (
            Just(capacity),
            prop::collection::vec(op_strategy(capacity), 0..60),
        )
    })
}

/// Model of the lot: `true` for each occupied slot.
fn model_of(lot: &ParkingLot) -> Vec<bool> {
    (0..lot.capacity())
        .map(|i| {
            lot.slot(SlotNumber::from_index(i))
                .is_some_and(|slot| !slot.is_empty())
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Sequential parks into a fresh lot return 1..=N, then the lot is full
    #[test]
    fn sequential_parks_fill_in_order(capacity in 1i64..=64) {
        let mut lot = ParkingLot::new();
        prop_assert_eq!(lot.create(capacity), Ok(usize::try_from(capacity).unwrap()));

        for expected in 1..=usize::try_from(capacity).unwrap() {
            let slot = lot.park("KA-01-HH-1234", "White").unwrap();
            prop_assert_eq!(slot.value(), expected);
        }
        prop_assert_eq!(lot.park("KA-01-HH-1234", "White"), Err(Notice::LotFull));
    }

    // Non-positive sizes never produce a usable lot
    #[test]
    fn non_positive_create_is_not_created(count in i64::MIN..=0) {
        let mut lot = ParkingLot::new();
        prop_assert_eq!(lot.create(count), Err(Notice::LotNotCreated));
        prop_assert!(!lot.is_created());
        prop_assert_eq!(lot.park("A", "White"), Err(Notice::LotNotCreated));
    }

    // Every operation agrees with the model and park picks the lowest free slot
    #[test]
    fn operations_follow_model((capacity, ops) in scenario_strategy()) {
        let mut lot = ParkingLot::new();
        lot.create(capacity).unwrap();
        let mut model = vec![false; usize::try_from(capacity).unwrap()];

        for op in ops {
            match op {
                Op::Park(reg, colour) => {
                    let result = lot.park(reg, colour);
                    match model.iter().position(|taken| !taken) {
                        Some(index) => {
                            prop_assert_eq!(result, Ok(SlotNumber::from_index(index)));
                            model[index] = true;
                        }
                        None => prop_assert_eq!(result, Err(Notice::LotFull)),
                    }
                }
                Op::Leave(slot) => {
                    let result = lot.leave(slot);
                    let index = usize::try_from(slot - 1).ok().filter(|&i| i < model.len());
                    match index {
                        None => prop_assert_eq!(result, Err(Notice::SlotNotAvailable)),
                        Some(i) if model[i] => {
                            prop_assert_eq!(result, Ok(SlotNumber::from_index(i)));
                            model[i] = false;
                        }
                        Some(_) => prop_assert_eq!(result, Err(Notice::SlotAlreadyFree)),
                    }
                }
            }

            prop_assert_eq!(&model_of(&lot), &model);
            prop_assert_eq!(lot.capacity(), model.len());
            prop_assert_eq!(lot.is_full(), model.iter().all(|&t| t));
            prop_assert_eq!(lot.is_empty(), model.iter().all(|&t| !t));
        }
    }

    // Colour queries return ascending slots and ignore case
    #[test]
    fn colour_queries_are_ordered((capacity, ops) in scenario_strategy()) {
        let mut lot = ParkingLot::new();
        lot.create(capacity).unwrap();
        for op in ops {
            match op {
                Op::Park(reg, colour) => { let _ = lot.park(reg, colour); }
                Op::Leave(slot) => { let _ = lot.leave(slot); }
            }
        }

        if let Ok(slots) = lot.slot_numbers_for_colour("white") {
            prop_assert!(slots.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(Ok(slots.clone()), lot.slot_numbers_for_colour("WHITE"));
            for number in slots {
                let colour = lot.slot(number).and_then(Slot::vehicle).map(|v| v.colour().to_lowercase());
                prop_assert_eq!(colour.as_deref(), Some("white"));
            }
        }
    }
}
