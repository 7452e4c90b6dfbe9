//! Checkpoint tests - save/load generator state
//!
//! Critical invariants tested:
//! - Determinism: a restored generator produces the identical tail of the
//!   sequence, mid-stream, with no replay needed
//! - Seed integrity: the stored initial seed survives the round trip
//! - Reset semantics: a restored generator still rewinds to the seeded state

use tinymt_core_rs::{TinyMt32, TinyMt64};

#[test]
fn test_roundtrip_resumes_sequence_32() {
    let mut original = TinyMt32::new(42);

    // Burn some of the stream before checkpointing
    for _ in 0..17 {
        original.generate();
    }

    let snapshot = serde_json::to_string(&original).expect("Failed to serialize generator");
    let mut restored: TinyMt32 =
        serde_json::from_str(&snapshot).expect("Failed to deserialize generator");

    for _ in 0..100 {
        assert_eq!(
            original.generate(),
            restored.generate(),
            "Restored generator diverged from original"
        );
    }
}

#[test]
fn test_roundtrip_resumes_sequence_64() {
    let mut original = TinyMt64::new(42);

    for _ in 0..17 {
        original.generate();
    }

    let snapshot = serde_json::to_string(&original).expect("Failed to serialize generator");
    let mut restored: TinyMt64 =
        serde_json::from_str(&snapshot).expect("Failed to deserialize generator");

    for _ in 0..100 {
        assert_eq!(
            original.generate(),
            restored.generate(),
            "Restored generator diverged from original"
        );
    }
}

#[test]
fn test_roundtrip_preserves_initial_seed() {
    let mut original = TinyMt32::new(9001);
    for _ in 0..5 {
        original.generate();
    }

    let snapshot = serde_json::to_string(&original).expect("Failed to serialize generator");
    let restored: TinyMt32 =
        serde_json::from_str(&snapshot).expect("Failed to deserialize generator");

    assert_eq!(restored.initial_seed(), 9001);
}

#[test]
fn test_restored_generator_resets_to_seeded_state() {
    let mut original = TinyMt64::new(9001);
    for _ in 0..25 {
        original.generate();
    }

    let snapshot = serde_json::to_string(&original).expect("Failed to serialize generator");
    let mut restored: TinyMt64 =
        serde_json::from_str(&snapshot).expect("Failed to deserialize generator");
    restored.reset();

    let mut fresh = TinyMt64::new(9001);
    for _ in 0..20 {
        assert_eq!(restored.generate(), fresh.generate());
    }
}

#[test]
fn test_clone_is_an_in_memory_checkpoint() {
    let mut original = TinyMt32::new(31337);
    for _ in 0..13 {
        original.generate();
    }

    let mut cloned = original.clone();
    for _ in 0..50 {
        assert_eq!(original.generate(), cloned.generate());
    }
}
