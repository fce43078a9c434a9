//! The record registry shared by every turtle in the process. Records are
//! stored as ops and handed out as fresh copies, so a replay can never
//! disturb the stored sequence or another replay of it.
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::task::Op;

static RECORDS: OnceLock<Mutex<HashMap<String, Vec<Op>>>> = OnceLock::new();

fn registry() -> MutexGuard<'static, HashMap<String, Vec<Op>>> {
    RECORDS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Store `ops` under `id` unless the name is already taken. Returns whether
/// anything was stored.
pub fn store_record(id: &str, ops: Vec<Op>) -> bool {
    let mut records = registry();
    if records.contains_key(id) {
        return false;
    }
    records.insert(id.to_string(), ops);
    true
}

pub fn has_record(id: &str) -> bool {
    registry().contains_key(id)
}

/// A copy of the ops recorded under `id`.
pub fn fetch_record(id: &str) -> Option<Vec<Op>> {
    registry().get(id).cloned()
}

pub fn clear_records() {
    registry().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Turning;

    // Names here are unique to this module; the registry is shared by every
    // test in the binary.

    #[test]
    fn test_first_writer_wins() {
        assert!(store_record("records-first", vec![Op::Home]));
        assert!(!store_record("records-first", vec![Op::Clear, Op::Clear]));
        let ops = fetch_record("records-first").unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name(), "home");
    }

    #[test]
    fn test_fetch_is_a_copy() {
        store_record(
            "records-copy",
            vec![Op::Turn {
                angle: 1.0,
                turning: Turning::Left,
            }],
        );
        let mut ops = fetch_record("records-copy").unwrap();
        ops.push(Op::Home);
        assert_eq!(fetch_record("records-copy").unwrap().len(), 1);
        assert!(has_record("records-copy"));
        assert!(fetch_record("records-missing").is_none());
    }
}
