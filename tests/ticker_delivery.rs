//! Integration tests for tick delivery

use pomotui::timer::Ticker;
use std::time::{Duration, Instant};
use tokio::time::timeout;

#[tokio::test]
async fn ticker_delivers_a_steady_stream() {
    let mut rx = Ticker::start(250);
    for _ in 0..10 {
        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("tick within deadline")
            .expect("channel open");
    }
}

#[tokio::test]
async fn first_tick_arrives_promptly() {
    let start = Instant::now();
    let mut rx = Ticker::start(25);
    timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("tick within deadline")
        .expect("channel open");
    // tokio intervals fire immediately on the first tick
    assert!(start.elapsed() < Duration::from_millis(200));
}

#[tokio::test]
async fn slow_consumer_receives_queued_ticks() {
    let mut rx = Ticker::start(200);

    // Ignore the channel for a while; ticks queue up instead of vanishing
    tokio::time::sleep(Duration::from_millis(250)).await;

    let mut queued = 0;
    while rx.try_recv().is_ok() {
        queued += 1;
    }
    // ~50 ticks elapsed; allow generous slack for a loaded test host
    assert!(queued >= 20, "only {} ticks were queued", queued);
}
