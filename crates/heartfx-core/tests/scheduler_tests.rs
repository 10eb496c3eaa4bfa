use heartfx_core::scheduler::Scheduler;

fn drain(s: &mut Scheduler<&'static str>, now: f64) -> Vec<(f64, &'static str)> {
    std::iter::from_fn(|| s.pop_due(now)).collect()
}

#[test]
fn test_fires_in_due_order_with_ties_in_schedule_order() {
    let mut s = Scheduler::new();
    s.schedule(0.0, 30.0, "late");
    s.schedule(0.0, 10.0, "first");
    s.schedule(5.0, 5.0, "second");
    s.schedule(0.0, 20.0, "middle");

    assert_eq!(
        drain(&mut s, 100.0),
        vec![(10.0, "first"), (10.0, "second"), (20.0, "middle"), (30.0, "late")]
    );
    assert!(s.is_empty());
}

#[test]
fn test_nothing_fires_early() {
    let mut s = Scheduler::new();
    s.schedule(0.0, 50.0, "a");

    assert!(drain(&mut s, 49.9).is_empty());
    assert_eq!(s.len(), 1);
    assert_eq!(drain(&mut s, 50.0), vec![(50.0, "a")]);
}

#[test]
fn test_cancelled_task_never_fires() {
    let mut s = Scheduler::new();
    let keep = s.schedule(0.0, 10.0, "keep");
    let gone = s.schedule(0.0, 5.0, "gone");

    assert!(s.is_pending(gone));
    assert!(s.cancel(gone));
    assert!(!s.cancel(gone), "second cancel is a no-op");
    assert!(!s.is_pending(gone));
    assert_eq!(s.len(), 1);

    assert_eq!(drain(&mut s, 100.0), vec![(10.0, "keep")]);
    assert!(!s.is_pending(keep));
    assert!(!s.cancel(keep), "fired tasks cannot be cancelled");
}

#[test]
fn test_negative_delay_fires_immediately() {
    let mut s = Scheduler::new();
    s.schedule(7.0, -3.0, "now");
    assert_eq!(drain(&mut s, 7.0), vec![(7.0, "now")]);
}

#[test]
fn test_clear_drops_everything() {
    let mut s = Scheduler::new();
    let h = s.schedule(0.0, 1.0, "a");
    s.schedule(0.0, 2.0, "b");
    s.clear();

    assert!(s.is_empty());
    assert!(!s.is_pending(h));
    assert!(drain(&mut s, 1_000.0).is_empty());
}
