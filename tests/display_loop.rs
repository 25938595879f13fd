use std::time::Duration;

use tokio::sync::mpsc;

use pocket_stopwatch::{
    host::{Activity, Command, StatusReport},
    services::ManualClock,
    tasks::run_display_loop,
    Intent, TimerSnapshot,
};

async fn drive(activity: &mut Activity<ManualClock>, commands: Vec<Command>) -> (TimerSnapshot, Vec<String>) {
    let (tx, mut rx) = mpsc::channel(16);
    for command in commands {
        tx.send(command).await.unwrap();
    }
    drop(tx);

    let mut out = Vec::new();
    let snapshot = run_display_loop(activity, Duration::from_secs(3600), &mut rx, &mut out).await;
    let lines = String::from_utf8(out).unwrap().lines().map(str::to_string).collect();
    (snapshot, lines)
}

#[tokio::test]
async fn quit_stops_the_loop_and_returns_state() {
    let clock = ManualClock::at(0);
    let mut activity = Activity::create(clock.clone(), None);

    let (snapshot, lines) = drive(
        &mut activity,
        vec![Command::Intent(Intent::Start), Command::Quit, Command::Intent(Intent::Pause)],
    )
    .await;

    assert_eq!(snapshot, TimerSnapshot::new(0, true, 0));
    assert_eq!(lines.first().map(String::as_str), Some("00:00"));
    assert!(activity.controller().is_running());
}

#[tokio::test]
async fn save_and_status_are_printed_as_json() {
    let clock = ManualClock::at(1_000);
    let mut activity = Activity::create(clock.clone(), None);
    activity.press(Intent::Start);
    clock.set(4_500);
    activity.press(Intent::Pause);

    let (_, lines) = drive(&mut activity, vec![Command::Save, Command::Status]).await;

    let saved = lines.iter().find_map(|line| TimerSnapshot::decode(line).ok()).unwrap();
    assert_eq!(saved, TimerSnapshot::new(3_500, false, 1_000));

    let status: StatusReport = lines
        .iter()
        .find_map(|line| serde_json::from_str(line).ok())
        .unwrap();
    assert!(!status.running);
    assert_eq!(status.display, "00:03");
    assert_eq!(status.last_action.as_deref(), Some("pause"));
}

#[tokio::test]
async fn rotate_keeps_the_watch_running() {
    let clock = ManualClock::at(0);
    let mut activity = Activity::create(clock.clone(), None);
    activity.press(Intent::Start);
    clock.set(7_000);

    let (snapshot, lines) = drive(&mut activity, vec![Command::Rotate]).await;

    assert!(snapshot.running);
    assert_eq!(activity.status().rotations, 1);
    assert!(lines.iter().any(|line| line == "00:07"));
}
