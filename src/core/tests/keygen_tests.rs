use crate::core::keygen::{Clock, CollisionPolicy, KeyGenerator, ManualClock};

#[test]
fn test_distinct_ticks_give_distinct_keys() {
    let clock = ManualClock::new(100);
    let mut keygen = KeyGenerator::new(&clock, CollisionPolicy::Advance, "_");

    let first = keygen.next_key("row");
    clock.advance(1);
    let second = keygen.next_key("row");

    assert_eq!(first, "row_100");
    assert_eq!(second, "row_101");
}

#[test]
fn test_advance_bumps_repeated_reading() {
    let clock = ManualClock::new(100);
    let mut keygen = KeyGenerator::new(&clock, CollisionPolicy::Advance, "_");

    let keys: Vec<String> = (0..3).map(|_| keygen.next_key("row")).collect();

    assert_eq!(keys, ["row_100", "row_101", "row_102"]);
}

#[test]
fn test_advance_survives_clock_going_backwards() {
    let clock = ManualClock::new(500);
    let mut keygen = KeyGenerator::new(&clock, CollisionPolicy::Advance, "_");

    assert_eq!(keygen.next_key(""), "500");
    clock.set(400);
    assert_eq!(keygen.next_key(""), "501");
}

#[test]
fn test_advance_catches_up_with_clock() {
    let clock = ManualClock::new(10);
    let mut keygen = KeyGenerator::new(&clock, CollisionPolicy::Advance, "_");

    keygen.next_key("a");
    keygen.next_key("a");
    clock.set(50);

    assert_eq!(keygen.next_key("a"), "a_50");
}

#[test]
fn test_overwrite_repeats_reading() {
    let clock = ManualClock::new(100);
    let mut keygen = KeyGenerator::new(&clock, CollisionPolicy::Overwrite, "_");

    assert_eq!(keygen.next_key("row"), keygen.next_key("row"));
}

#[test]
fn test_custom_separator() {
    let clock = ManualClock::new(7);
    let mut keygen = KeyGenerator::new(&clock, CollisionPolicy::Advance, "::");

    assert_eq!(keygen.next_key("file"), "file::7");
    assert_eq!(keygen.separator(), "::");
}

#[test]
fn test_manual_clock() {
    let clock = ManualClock::new(1_000);
    clock.advance(250);
    assert_eq!(clock.now_millis(), 1_250);

    clock.set(3);
    assert_eq!(clock.now_millis(), 3);
}

#[test]
fn test_policy_deserializes_from_lowercase() {
    let policy: CollisionPolicy = serde_json::from_str(r#""advance""#).unwrap();
    assert_eq!(policy, CollisionPolicy::Advance);
    assert_eq!(CollisionPolicy::default(), CollisionPolicy::Advance);
}

#[test]
fn test_advance_stops_at_max_timestamp() {
    let clock = ManualClock::new(i64::MAX);
    let mut keygen = KeyGenerator::new(&clock, CollisionPolicy::Advance, "_");

    let first = keygen.next_key("row");
    let second = keygen.next_key("row");

    assert_eq!(first, format!("row_{}", i64::MAX));
    assert_eq!(second, first);
}

#[test]
fn test_manual_clock_advance_saturates() {
    let clock = ManualClock::new(i64::MAX - 1);
    clock.advance(10);
    assert_eq!(clock.now_millis(), i64::MAX);

    clock.set(i64::MIN + 1);
    clock.advance(-10);
    assert_eq!(clock.now_millis(), i64::MIN);
}
