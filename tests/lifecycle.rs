use pocket_stopwatch::{
    services::{Chronometer, ElapsedDisplay, ManualClock},
    Intent, Lifecycle, StopwatchController, TimerSnapshot,
};

type Controller = StopwatchController<Chronometer<ManualClock>, ManualClock>;

fn controller(clock: &ManualClock) -> Controller {
    StopwatchController::new(Chronometer::new(clock.clone()), clock.clone())
}

#[test]
fn start_and_pause_bank_the_run_segment() {
    let clock = ManualClock::at(1_000);
    let mut sw = controller(&clock);

    sw.handle(Intent::Start);
    clock.set(4_500);
    sw.handle(Intent::Pause);

    assert_eq!(sw.offset(), 3_500);
}

#[test]
fn paused_restore_rebases_on_the_banked_offset() {
    let clock = ManualClock::at(10_000);
    let mut sw = controller(&clock);

    sw.on_create(Some(TimerSnapshot::new(3_500, false, 0)));

    assert_eq!(sw.display().base(), 6_500);
    assert_eq!(sw.display().elapsed_millis(), 3_500);
    assert_eq!(sw.display().text(), "00:03");
}

#[test]
fn resume_folds_offset_into_base_then_clears_it() {
    let clock = ManualClock::at(0);
    let mut sw = controller(&clock);

    sw.start();
    clock.set(2_000);
    sw.on_suspend();
    assert_eq!(sw.offset(), 2_000);
    assert!(sw.is_running());

    clock.set(5_000);
    sw.on_resume();
    assert_eq!(sw.display().base(), 3_000);
    assert_eq!(sw.offset(), 0);
}

#[test]
fn reset_while_running_counts_up_from_zero() {
    let clock = ManualClock::at(0);
    let mut sw = controller(&clock);

    sw.start();
    clock.set(9_000);
    sw.reset();
    assert!(sw.is_running());
    assert_eq!(sw.on_capture_state().offset, 0);

    clock.advance(2_000);
    assert_eq!(sw.display().elapsed_millis(), 2_000);
}

#[test]
fn configuration_change_through_a_json_bundle() {
    let clock = ManualClock::at(0);
    let mut old = controller(&clock);
    old.start();
    clock.set(3_000);
    old.pause();
    clock.set(4_000);
    old.start();
    clock.set(5_000);

    old.on_suspend();
    let bundle = old.on_capture_state().encode();
    drop(old);

    let mut new = controller(&clock);
    new.on_create(TimerSnapshot::from_bundle(Some(&bundle)));
    new.on_resume();

    assert!(new.is_running());
    assert_eq!(new.display().elapsed_millis(), 4_000);
    clock.advance(1_000);
    new.pause();
    assert_eq!(new.offset(), 5_000);
}

#[test]
fn garbage_bundle_starts_fresh() {
    let clock = ManualClock::at(500);
    let mut sw = controller(&clock);

    sw.on_create(TimerSnapshot::from_bundle(Some("{\"offset\":")));

    assert!(!sw.is_running());
    assert_eq!(sw.offset(), 0);
    assert_eq!(sw.display().elapsed_millis(), 0);
}

#[test]
fn out_of_range_bundles_restore_as_first_run() {
    let clock = ManualClock::at(1_000);
    let huge_offset = r#"{"offset":9223372036854775807,"running":false,"base":0}"#;
    let min_base = r#"{"offset":0,"running":true,"base":-9223372036854775808}"#;

    for bundle in [huge_offset, min_base] {
        let mut sw = controller(&clock);
        sw.on_create(TimerSnapshot::from_bundle(Some(bundle)));
        assert!(!sw.is_running());
        assert_eq!(sw.offset(), 0);

        sw.start();
        clock.advance(10);
        sw.pause();
        assert_eq!(sw.offset(), 10);
    }
}

#[test]
fn extreme_snapshots_saturate_rather_than_panic() {
    let clock = ManualClock::at(1_000);

    let mut sw = controller(&clock);
    sw.on_create(Some(TimerSnapshot::new(i64::MAX, false, 0)));
    sw.start();
    clock.advance(10);
    sw.pause();
    assert_eq!(sw.display().elapsed_millis(), sw.offset());

    let mut sw = controller(&clock);
    sw.on_create(Some(TimerSnapshot::new(0, true, i64::MIN)));
    assert_eq!(sw.display().elapsed_millis(), i64::MAX);
}
