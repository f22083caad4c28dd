use super::*;

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

#[test]
fn ticks_fire_repeatedly() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let source = TickSource::spawn(Duration::from_millis(5), move || {
        seen.fetch_add(1, Ordering::Relaxed);
    });
    thread::sleep(Duration::from_millis(100));
    source.stop();
    assert!(count.load(Ordering::Relaxed) >= 2);
}

#[test]
fn stop_halts_the_thread() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let source = TickSource::spawn(Duration::from_millis(5), move || {
        seen.fetch_add(1, Ordering::Relaxed);
    });
    thread::sleep(Duration::from_millis(30));
    source.stop();
    let at_stop = count.load(Ordering::Relaxed);
    thread::sleep(Duration::from_millis(30));
    assert_eq!(count.load(Ordering::Relaxed), at_stop);
}

#[test]
fn dropping_the_source_also_stops_it() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    {
        let _source = TickSource::spawn(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::Relaxed);
        });
        thread::sleep(Duration::from_millis(20));
    }
    let at_drop = count.load(Ordering::Relaxed);
    thread::sleep(Duration::from_millis(20));
    assert_eq!(count.load(Ordering::Relaxed), at_drop);
}
