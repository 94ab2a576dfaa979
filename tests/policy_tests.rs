//! Integration tests for OPT victim selection.

use opt_cache_sim::common::NextUse;
use opt_cache_sim::config::Associativity;
use opt_cache_sim::core::policy::{select_victim, Victim};
use opt_cache_sim::core::CacheSet;
use opt_cache_sim::sim::ReuseSchedule;

/// Creates a full set holding `lines` in slot order.
fn create_full_set(lines: &[i64]) -> CacheSet {
    let mut set = CacheSet::new(Associativity::new(lines.len() as i64, 1000).unwrap());
    for &line in lines {
        set.insert(line);
    }
    set
}

/// Tests next-use ordering: any future access ranks below "never".
#[test]
fn test_next_use_ordering() {
    assert!(NextUse::At(3) < NextUse::At(4));
    assert!(NextUse::At(usize::MAX) < NextUse::Never);
    assert_eq!(NextUse::Never.max(NextUse::At(0)), NextUse::Never);
}

/// Tests that the line reused furthest in the future is chosen.
#[test]
fn test_victim_furthest_next_use() {
    let set = create_full_set(&[10, 20, 30]);
    let mut schedule = ReuseSchedule::default();
    schedule.record(10, 5);
    schedule.record(30, 7);
    schedule.record(20, 9);

    let victim = select_victim(&set, &schedule);

    assert_eq!(
        victim,
        Some(Victim {
            slot: 1,
            next_use: NextUse::At(9)
        })
    );
}

/// Tests that a line with no future access beats any scheduled line.
#[test]
fn test_victim_never_reused() {
    let set = create_full_set(&[10, 20, 30]);
    let mut schedule = ReuseSchedule::default();
    schedule.record(10, 100);
    schedule.record(20, 200);

    let victim = select_victim(&set, &schedule).unwrap();

    assert_eq!(victim.slot, 2);
    assert_eq!(victim.next_use, NextUse::Never);
}

/// Tests tie-breaking among lines that are never reused: first slot wins.
#[test]
fn test_victim_tie_first_slot() {
    let set = create_full_set(&[10, 20, 30]);
    let mut schedule = ReuseSchedule::default();
    schedule.record(20, 4);

    let victim = select_victim(&set, &schedule).unwrap();

    assert_eq!(victim.slot, 0);
}

/// Tests that drained queues count as "never".
#[test]
fn test_victim_drained_queue() {
    let set = create_full_set(&[1, 2]);
    let mut schedule = ReuseSchedule::default();
    schedule.record(1, 0);
    schedule.record(2, 3);
    assert_eq!(schedule.consume(1), Some(0));

    let victim = select_victim(&set, &schedule).unwrap();

    assert_eq!(victim.slot, 0);
    assert_eq!(victim.next_use, NextUse::Never);
}

/// Tests victim selection on an empty set.
#[test]
fn test_victim_empty_set() {
    let set = CacheSet::new(Associativity::new(2, 1000).unwrap());
    assert_eq!(select_victim(&set, &ReuseSchedule::default()), None);
}
