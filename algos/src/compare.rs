use crate::timing::{Measurement, measure_search};
use crate::{BM, KMP, RK, StringSearch};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    pub name: &'static str,
    pub elapsed_seconds: f64,
    pub found: Option<usize>,
}

impl TimingRecord {
    fn of<S: StringSearch>(text: &str, pattern: &str) -> Self {
        let Measurement {
            found,
            elapsed_seconds,
        } = measure_search::<S>(text, pattern);
        Self {
            name: S::NAME,
            elapsed_seconds,
            found,
        }
    }
}

/// Time Boyer–Moore, KMP and Rabin–Karp once each on the same input,
/// in that order.
///
/// A panic in any matcher unwinds out of here; no partial result is
/// returned.
pub fn compare(text: &str, pattern: &str) -> Vec<TimingRecord> {
    log::debug!("compare: text={}B pattern={:?}", text.len(), pattern);

    vec![
        TimingRecord::of::<BM>(text, pattern),
        TimingRecord::of::<KMP>(text, pattern),
        TimingRecord::of::<RK>(text, pattern),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{left} found {left_found:?} but {right} found {right_found:?}")]
pub struct Disagreement {
    pub left: &'static str,
    pub left_found: Option<usize>,
    pub right: &'static str,
    pub right_found: Option<usize>,
}

/// The match every record agrees on, or the first pair that differs.
/// An empty slice agrees on `None`.
pub fn agreed_match(records: &[TimingRecord]) -> Result<Option<usize>, Disagreement> {
    let Some(first) = records.first() else {
        return Ok(None);
    };

    for other in &records[1..] {
        if other.found != first.found {
            log::warn!(
                "matchers disagree: {}={:?} {}={:?}",
                first.name,
                first.found,
                other.name,
                other.found
            );
            return Err(Disagreement {
                left: first.name,
                left_found: first.found,
                right: other.name,
                right_found: other.found,
            });
        }
    }

    Ok(first.found)
}
