//! Evaluation clock.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::{Europe::London, Tz};

/// The reference instant of one evaluation, fixed in Europe/London.
///
/// Established once and shared by every stage, so the despatch cutoff,
/// the despatch base date and the title's "today" can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    now: DateTime<Tz>,
}

impl EvaluationContext {
    /// Context at a UTC instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            now: instant.with_timezone(&London),
        }
    }

    /// Context at the current system time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Context at a London wall-clock time.
    ///
    /// Returns `None` for times skipped by the spring clock change. For
    /// the repeated hour in autumn the earlier instant is used.
    pub fn at_london(date: NaiveDate, time: NaiveTime) -> Option<Self> {
        match London.from_local_datetime(&date.and_time(time)) {
            LocalResult::Single(now) | LocalResult::Ambiguous(now, _) => Some(Self { now }),
            LocalResult::None => None,
        }
    }

    /// The instant in Europe/London.
    #[inline]
    pub fn instant(&self) -> DateTime<Tz> {
        self.now
    }

    /// Calendar date in London.
    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Wall-clock time in London.
    #[inline]
    pub fn time_of_day(&self) -> NaiveTime {
        self.now.time()
    }
}
