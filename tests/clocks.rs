use drift::{Error, ScalarClock, VectorClock};

#[test]
fn scalar_tick_yields_one_through_k() {
    let clock = ScalarClock::new();
    let observed: Vec<i64> = (0..5).map(|_| clock.tick()).collect();
    assert_eq!(observed, vec![1, 2, 3, 4, 5]);
}

#[test]
fn scalar_receive_exceeds_local_history_and_origin() {
    let clock = ScalarClock::new();
    clock.tick();
    clock.tick();
    clock.tick(); // at 3
    assert_eq!(clock.receive(1), 4);

    let clock = ScalarClock::new();
    clock.tick();
    clock.tick();
    clock.tick();
    assert_eq!(clock.receive(10), 11);
}

#[test]
fn vector_tick_increments_only_owner() {
    let clock = VectorClock::new(2, 4);
    let before = clock.value();
    let after = clock.tick();
    for i in 0..4 {
        if i == 2 {
            assert_eq!(after[i], before[i] + 1);
        } else {
            assert_eq!(after[i], before[i]);
        }
    }
}

#[test]
fn vector_receive_merge_example() {
    // Owner index 1, size 3, current [0,1,0], incoming [2,0,1].
    let clock = VectorClock::new(1, 3);
    clock.tick();
    assert_eq!(clock.receive(&[2, 0, 1]).unwrap(), vec![2, 2, 1]);
}

#[test]
fn vector_receive_length_mismatch_leaves_clock_untouched() {
    let clock = VectorClock::new(0, 2);
    clock.tick();
    let err = clock.receive(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 3 }));
    assert_eq!(clock.value(), vec![1, 0]);
}

#[test]
fn clocks_are_safe_under_concurrent_callers() {
    use std::thread;

    let scalar = ScalarClock::new();
    let vector = VectorClock::new(0, 2);
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    scalar.tick();
                    vector.tick();
                }
            });
        }
    });
    assert_eq!(scalar.value(), 4000);
    assert_eq!(vector.value(), vec![4000, 0]);
}
