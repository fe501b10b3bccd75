use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::{StringSearch, char_index};

/// Decimal digits kept in reported timings.
pub const PRECISION: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub found: Option<usize>,
    pub elapsed_seconds: f64,
}

/// Wall-clock timer around a single call.
///
/// Dropping a stopwatch that was never stopped means the timed call
/// unwound; that is logged and the unwind carries on untouched.
pub struct Stopwatch {
    label: &'static str,
    start: Instant,
    stopped: bool,
}

impl Stopwatch {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            stopped: false,
        }
    }

    pub fn stop(mut self) -> Duration {
        let elapsed = self.start.elapsed();
        self.stopped = true;
        elapsed
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        if !self.stopped {
            log::warn!(
                "{}: measurement aborted after {:?}",
                self.label,
                self.start.elapsed()
            );
        }
    }
}

pub fn round_to_precision(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Run `search` exactly once on `(text, pattern)` and time that call only.
pub fn measure<F>(search: F, text: &str, pattern: &str) -> Measurement
where
    F: FnOnce(&str, &str) -> Option<usize>,
{
    measure_named("search", search, text, pattern)
}

/// Time `S` on `(text, pattern)`. Only the byte search is inside the timed
/// interval; the match is converted to a character index afterwards.
pub fn measure_search<S: StringSearch>(text: &str, pattern: &str) -> Measurement {
    let m = measure_named(
        S::NAME,
        |t, p| S::find_bytes(t.as_bytes(), p.as_bytes()),
        text,
        pattern,
    );
    Measurement {
        found: m.found.map(|i| char_index(text, i)),
        ..m
    }
}

fn measure_named<F>(label: &'static str, search: F, text: &str, pattern: &str) -> Measurement
where
    F: FnOnce(&str, &str) -> Option<usize>,
{
    let watch = Stopwatch::start(label);
    let found = black_box(search(black_box(text), black_box(pattern)));
    let elapsed = watch.stop();

    let elapsed_seconds = round_to_precision(elapsed.as_secs_f64(), PRECISION);
    log::debug!(
        "{}: found={:?} elapsed={:.8}s (text={}B, pattern={}B)",
        label,
        found,
        elapsed_seconds,
        text.len(),
        pattern.len()
    );

    Measurement {
        found,
        elapsed_seconds,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    use super::*;
    use crate::KMP;

    #[test]
    fn rounds_to_eight_digits() {
        assert_eq!(round_to_precision(0.123456789, 8), 0.12345679);
        assert_eq!(round_to_precision(0.000000004, 8), 0.0);
        assert_eq!(round_to_precision(1.5, 0), 2.0);
    }

    #[test]
    fn measure_calls_exactly_once() {
        let calls = Cell::new(0);
        let m = measure(
            |t, p| {
                calls.set(calls.get() + 1);
                t.find(p)
            },
            "abracadabra",
            "cad",
        );
        assert_eq!(calls.get(), 1);
        assert_eq!(m.found, Some(4));
        assert!(m.elapsed_seconds >= 0.0 && m.elapsed_seconds.is_finite());
    }

    #[test]
    fn measure_search_reports_match() {
        let m = measure_search::<KMP>("hello world", "world");
        assert_eq!(m.found, Some(6));
        assert!(m.elapsed_seconds >= 0.0 && m.elapsed_seconds.is_finite());
    }

    #[test]
    fn measure_search_reports_char_index() {
        let m = measure_search::<KMP>("алгоритми та структури даних", "структури даних");
        assert_eq!(m.found, Some(13));
    }

    #[test]
    fn measure_times_a_slow_call() {
        let m = measure(
            |t, p| {
                std::thread::sleep(Duration::from_millis(5));
                t.find(p)
            },
            "abc",
            "z",
        );
        assert_eq!(m.found, None);
        assert!(m.elapsed_seconds >= 0.005);
    }

    #[test]
    fn measure_propagates_panics() {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            measure(|_, _| panic!("matcher defect"), "abc", "a")
        }));
        let err = result.unwrap_err();
        assert_eq!(err.downcast_ref::<&str>(), Some(&"matcher defect"));
    }

    #[test]
    fn stopwatch_stop_is_monotonic() {
        let watch = Stopwatch::start("test");
        let elapsed = watch.stop();
        assert!(elapsed >= Duration::ZERO);
    }
}
