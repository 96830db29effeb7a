//! Animation driver tests - session lifecycle, cleanup and clock wrap

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use tui_atom::core::lookup;
use tui_atom::engine::{
    AnimationClock, AnimationDriver, CancelToken, DriverState, FrameSink, Pacer, SleepPacer,
};
use tui_atom::term::{AtomView, Frame, Line};
use tui_atom::types::VisualizationMode;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Begin,
    Present(Frame),
    Finish(String),
}

#[derive(Default)]
struct RecordingSink {
    events: Vec<Event>,
    fail_begin: bool,
    fail_on_present: Option<usize>,
    panic_on_present: Option<usize>,
}

impl RecordingSink {
    fn frames(&self) -> Vec<&Frame> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Present(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    fn finishes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Finish(_)))
            .count()
    }
}

impl FrameSink for RecordingSink {
    fn begin(&mut self) -> Result<()> {
        self.events.push(Event::Begin);
        if self.fail_begin {
            bail!("terminal unavailable");
        }
        Ok(())
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        let n = self.frames().len() + 1;
        if self.panic_on_present == Some(n) {
            panic!("sink exploded on frame {}", n);
        }
        if self.fail_on_present == Some(n) {
            bail!("broken pipe");
        }
        self.events.push(Event::Present(frame.clone()));
        Ok(())
    }

    fn finish(&mut self, farewell: &Line) -> Result<()> {
        self.events.push(Event::Finish(farewell.plain()));
        Ok(())
    }
}

/// Never sleeps; fires the cancel token on the given wait.
struct ScriptedPacer {
    cancel_on_wait: usize,
    waits: usize,
    intervals: Vec<Duration>,
}

impl ScriptedPacer {
    fn cancel_after(waits: usize) -> Self {
        Self {
            cancel_on_wait: waits,
            waits: 0,
            intervals: Vec::new(),
        }
    }
}

impl Pacer for ScriptedPacer {
    fn wait(&mut self, interval: Duration, cancel: &CancelToken) -> Result<()> {
        self.waits += 1;
        self.intervals.push(interval);
        if self.waits >= self.cancel_on_wait {
            cancel.cancel();
        }
        Ok(())
    }
}

fn small_driver() -> AnimationDriver {
    AnimationDriver::new(AtomView::new(40, 20))
}

#[test]
fn session_runs_until_cancelled_then_cleans_up() {
    let mut driver = small_driver();
    let mut sink = RecordingSink::default();
    let mut pacer = ScriptedPacer::cancel_after(5);
    let cancel = CancelToken::new();

    assert_eq!(driver.state(), DriverState::Idle);
    driver
        .run(&lookup(6), &mut sink, &mut pacer, &cancel)
        .unwrap();
    assert_eq!(driver.state(), DriverState::Stopped);

    assert_eq!(sink.events.first(), Some(&Event::Begin));
    assert_eq!(sink.frames().len(), 5);
    assert_eq!(
        sink.events.last(),
        Some(&Event::Finish(
            "Thank you for exploring the atomic world! ⚛️".to_string()
        ))
    );
    assert_eq!(sink.finishes(), 1);

    // The tick interrupted by cancellation does not count.
    assert_eq!(driver.ticks(), 4);
    assert!(pacer
        .intervals
        .iter()
        .all(|i| *i == Duration::from_millis(120)));
}

#[test]
fn frames_follow_the_clock() {
    let mut driver = small_driver();
    let mut sink = RecordingSink::default();
    let cancel = CancelToken::new();
    driver
        .run(&lookup(8), &mut sink, &mut ScriptedPacer::cancel_after(3), &cancel)
        .unwrap();

    let view = AtomView::new(40, 20);
    let oxygen = lookup(8);
    let frames = sink.frames();
    for (i, frame) in frames.iter().enumerate() {
        let t = i as f64 * 0.08;
        assert_eq!(
            **frame,
            view.compose(&oxygen, VisualizationMode::Animated, t),
            "frame {}",
            i
        );
    }
    assert!((driver.clock().time() - 0.16).abs() < 1e-9);
}

#[test]
fn cancelled_before_start_draws_nothing() {
    let mut driver = small_driver();
    let mut sink = RecordingSink::default();
    let cancel = CancelToken::new();
    cancel.cancel();

    driver
        .run(&lookup(1), &mut sink, &mut ScriptedPacer::cancel_after(1), &cancel)
        .unwrap();

    assert!(sink.frames().is_empty());
    assert_eq!(sink.events.first(), Some(&Event::Begin));
    assert_eq!(sink.finishes(), 1);
    assert_eq!(driver.state(), DriverState::Stopped);
}

#[test]
fn driver_cannot_be_restarted() {
    let mut driver = small_driver();
    let cancel = CancelToken::new();
    driver
        .run(
            &lookup(1),
            &mut RecordingSink::default(),
            &mut ScriptedPacer::cancel_after(1),
            &cancel,
        )
        .unwrap();

    let mut sink = RecordingSink::default();
    let again = CancelToken::new();
    let err = driver
        .run(&lookup(1), &mut sink, &mut ScriptedPacer::cancel_after(1), &again)
        .unwrap_err();
    assert!(err.to_string().contains("only be run once"));
    assert!(sink.events.is_empty());
    assert_eq!(driver.state(), DriverState::Stopped);
}

#[test]
fn output_error_stops_session_and_still_cleans_up() {
    let mut driver = small_driver();
    let mut sink = RecordingSink {
        fail_on_present: Some(3),
        ..Default::default()
    };
    let cancel = CancelToken::new();

    let err = driver
        .run(&lookup(2), &mut sink, &mut ScriptedPacer::cancel_after(100), &cancel)
        .unwrap_err();
    assert_eq!(err.to_string(), "broken pipe");
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.finishes(), 1);
    assert_eq!(driver.state(), DriverState::Stopped);
}

#[test]
fn begin_error_still_cleans_up() {
    let mut driver = small_driver();
    let mut sink = RecordingSink {
        fail_begin: true,
        ..Default::default()
    };
    let cancel = CancelToken::new();

    assert!(driver
        .run(&lookup(2), &mut sink, &mut ScriptedPacer::cancel_after(1), &cancel)
        .is_err());
    assert!(sink.frames().is_empty());
    assert_eq!(sink.finishes(), 1);
}

#[test]
fn panic_during_session_still_cleans_up() {
    let mut driver = small_driver();
    let mut sink = RecordingSink {
        panic_on_present: Some(2),
        ..Default::default()
    };
    let mut pacer = ScriptedPacer::cancel_after(100);
    let cancel = CancelToken::new();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        driver.run(&lookup(26), &mut sink, &mut pacer, &cancel)
    }));
    assert!(outcome.is_err());
    assert_eq!(sink.frames().len(), 1);
    assert_eq!(sink.finishes(), 1);
}

#[test]
fn frame_after_wrap_matches_first_frame() {
    let clock = AnimationClock::default();
    let cycle = clock.ticks_per_cycle() as usize;

    let mut driver = small_driver().with_clock(clock);
    let mut sink = RecordingSink::default();
    let cancel = CancelToken::new();
    driver
        .run(
            &lookup(10),
            &mut sink,
            &mut ScriptedPacer::cancel_after(cycle + 1),
            &cancel,
        )
        .unwrap();

    let frames = sink.frames();
    assert_eq!(frames.len(), cycle + 1);
    assert_ne!(frames[1], frames[0]);
    assert_eq!(frames[cycle], frames[0]);
    assert_eq!(driver.clock().time(), 0.0);
}

#[test]
fn custom_interval_is_passed_to_the_pacer() {
    let mut driver = small_driver().with_interval(Duration::from_millis(15));
    let mut pacer = ScriptedPacer::cancel_after(2);
    driver
        .run(
            &lookup(3),
            &mut RecordingSink::default(),
            &mut pacer,
            &CancelToken::new(),
        )
        .unwrap();
    assert_eq!(pacer.intervals, vec![Duration::from_millis(15); 2]);
}

#[test]
fn cancel_from_another_thread_stops_a_sleeping_session() {
    let mut driver = small_driver().with_interval(Duration::from_millis(10));
    let mut sink = RecordingSink::default();
    let cancel = CancelToken::new();

    let remote = cancel.clone();
    let interrupter = thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        remote.cancel();
    });

    driver
        .run(&lookup(7), &mut sink, &mut SleepPacer::default(), &cancel)
        .unwrap();
    interrupter.join().unwrap();

    assert_eq!(driver.state(), DriverState::Stopped);
    assert!(!sink.frames().is_empty());
    assert_eq!(
        sink.events.last(),
        Some(&Event::Finish(
            "Thank you for exploring the atomic world! ⚛️".to_string()
        ))
    );
    assert_eq!(sink.finishes(), 1);
}
