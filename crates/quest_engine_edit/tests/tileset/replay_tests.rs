//! Random create/delete/rename sequences checked against an ordered map.

use std::collections::BTreeMap;
use std::ops::Bound;

use pretty_assertions::assert_eq;
use quest_engine_edit::{Color, Rectangle, TilesetData, TilesetEditState, TilesetEvent};

const POOL: &[&str] = &["arch", "bush", "cliff", "door", "floor", "grass", "hole", "ice", "lava", "moss", "rock", "sand"];

fn rank(reference: &BTreeMap<String, ()>, id: &str) -> usize {
    reference.range::<str, _>((Bound::Unbounded, Bound::Excluded(id))).count()
}

fn assert_same_mapping(state: &TilesetEditState, reference: &BTreeMap<String, ()>) {
    assert_eq!(state.pattern_count(), reference.len());
    for (index, id) in reference.keys().enumerate() {
        assert_eq!(state.pattern_index(id), Some(index), "{id}");
        assert_eq!(state.pattern_id(index), Some(id.as_str()));
    }
}

fn replay(seed: u64, steps: usize) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut state = TilesetEditState::new(TilesetData::new(Color::BLACK));
    let mut reference: BTreeMap<String, ()> = BTreeMap::new();

    for _ in 0..steps {
        let id = POOL[rng.usize(..POOL.len())];
        match rng.u8(..3) {
            0 => {
                let result = state.create_pattern(id, Rectangle::from(0, 0, 8, 8));
                if reference.contains_key(id) {
                    assert!(result.is_err());
                } else {
                    reference.insert(id.to_string(), ());
                    let expected = TilesetEvent::PatternCreated {
                        index: rank(&reference, id),
                        id: id.to_string(),
                    };
                    assert_eq!(result.unwrap(), expected);
                }
            }
            1 => {
                let result = state.delete_pattern(id);
                if reference.contains_key(id) {
                    let expected = TilesetEvent::PatternDeleted {
                        index: rank(&reference, id),
                        id: id.to_string(),
                    };
                    reference.remove(id);
                    assert_eq!(result.unwrap(), expected);
                } else {
                    assert!(result.is_err());
                }
            }
            _ => {
                let new_id = POOL[rng.usize(..POOL.len())];
                let result = state.rename_pattern(id, new_id);
                if !reference.contains_key(id) {
                    assert!(result.is_err());
                } else if id == new_id {
                    assert_eq!(result.unwrap(), None);
                } else if reference.contains_key(new_id) {
                    assert!(result.is_err());
                } else {
                    let old_index = rank(&reference, id);
                    reference.remove(id);
                    reference.insert(new_id.to_string(), ());
                    let expected = TilesetEvent::PatternRenamed {
                        old_index,
                        old_id: id.to_string(),
                        new_index: rank(&reference, new_id),
                        new_id: new_id.to_string(),
                    };
                    assert_eq!(result.unwrap(), Some(expected));
                }
            }
        }
        assert_same_mapping(&state, &reference);
    }
}

#[test]
fn test_replay_matches_ordered_map() {
    replay(0x5eed, 500);
}

#[test]
fn test_replay_with_other_seeds() {
    for seed in 1..8 {
        replay(seed, 200);
    }
}
