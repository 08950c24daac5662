//! Timestamp-based sequencer

use super::{
    clock::{Clock, SystemClock},
    sequencer::{SequenceError, Sequencer},
    template::NameTemplate,
};
use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};

/// Names each file after the current UTC time, e.g. `2024-05-01T10:00:00.000Z`
///
/// Timestamps have millisecond precision. When `previous` carries a
/// timestamp at or after the current one (several rotations within the
/// same millisecond, or a clock step backwards) the next name is bumped one
/// millisecond past it, so chained names are always distinct and ascending.
#[derive(Debug, Clone, Default)]
pub struct DateTimeSequencer<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> DateTimeSequencer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    fn previous_timestamp(template: &NameTemplate, previous: &str) -> Option<DateTime<Utc>> {
        let stamp = template.scan(previous)?;
        DateTime::parse_from_rfc3339(stamp)
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }
}

impl<C: Clock> Sequencer for DateTimeSequencer<C> {
    fn next_name(&self, format: &str, previous: &str) -> Result<String, SequenceError> {
        let template = NameTemplate::parse(format)?;

        let mut at = self.clock.now().trunc_subsecs(3);
        if let Some(last) = Self::previous_timestamp(&template, previous)
            && at <= last
        {
            at = last + Duration::milliseconds(1);
        }

        Ok(template.render(&at.to_rfc3339_opts(SecondsFormat::Millis, true)))
    }
}
