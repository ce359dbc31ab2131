use std::time::{Duration, Instant};

use bullet_dodge::timer::Timer;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn new_timer_reads_zero() {
    let t = Timer::new();
    assert!(!t.is_started());
    assert!(!t.is_paused());
    assert_eq!(t.ticks(Instant::now()), 0);
}

#[test]
fn started_timer_counts_milliseconds() {
    let base = Instant::now();
    let mut t = Timer::new();
    t.start(base);
    assert!(t.is_started());
    assert_eq!(t.ticks(base), 0);
    assert_eq!(t.ticks(base + ms(1500)), 1500);
}

#[test]
fn paused_timer_freezes() {
    let base = Instant::now();
    let mut t = Timer::new();
    t.start(base);
    t.pause(base + ms(200));
    assert!(t.is_paused());
    assert_eq!(t.ticks(base + ms(200)), 200);
    assert_eq!(t.ticks(base + ms(5000)), 200);
}

#[test]
fn unpause_resumes_from_frozen_value() {
    let base = Instant::now();
    let mut t = Timer::new();
    t.start(base);
    t.pause(base + ms(200));
    t.unpause(base + ms(1200));
    assert!(!t.is_paused());
    assert_eq!(t.ticks(base + ms(1200)), 200);
    assert_eq!(t.ticks(base + ms(1300)), 300);
}

#[test]
fn double_pause_keeps_first_reading() {
    let base = Instant::now();
    let mut t = Timer::new();
    t.start(base);
    t.pause(base + ms(100));
    t.pause(base + ms(900));
    assert_eq!(t.ticks(base + ms(1000)), 100);
}

#[test]
fn pause_before_start_is_ignored() {
    let base = Instant::now();
    let mut t = Timer::new();
    t.pause(base);
    assert!(!t.is_paused());
    t.unpause(base);
    assert_eq!(t.ticks(base + ms(10)), 0);
}

#[test]
fn stop_resets() {
    let base = Instant::now();
    let mut t = Timer::new();
    t.start(base);
    t.pause(base + ms(50));
    t.stop();
    assert!(!t.is_started());
    assert!(!t.is_paused());
    assert_eq!(t.ticks(base + ms(100)), 0);
}

#[test]
fn restart_begins_at_zero() {
    let base = Instant::now();
    let mut t = Timer::new();
    t.start(base);
    t.start(base + ms(1000));
    assert_eq!(t.ticks(base + ms(1250)), 250);
}
