// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! ISO 8601 duration declarations.
//!
//! ```text
//! P2W            two weeks
//! P1DT2H         one day, two hours
//! PT1M30.5S      ninety and a half seconds
//! P1Y / P1M      rejected: calendar units have no fixed length
//! ```

use std::fmt::Write;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use super::{Declarator, Kind};
use crate::environment::Environment;
use crate::error::{SpecError, ValueError};
use crate::schema::{ScalarSchema, Schema};
use crate::variable::Example;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK_SECONDS: f64 = 604_800.0;

const PATTERN: &str = r"^P(?:([0-9]+(?:[.,][0-9]+)?)W|(?:([0-9]+(?:[.,][0-9]+)?)D)?(?:T(?:([0-9]+(?:[.,][0-9]+)?)H)?(?:([0-9]+(?:[.,][0-9]+)?)M)?(?:([0-9]+(?:[.,][0-9]+)?)S)?)?)$";

fn pattern() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(PATTERN).ok()).as_ref()
}

/// A non-negative span of time.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDuration;

impl Kind for IsoDuration {
    type Native = Duration;

    fn schema(&self) -> Result<Schema<Duration>, SpecError> {
        Ok(Schema::Scalar(ScalarSchema::new(
            "ISO 8601 duration",
            format_duration,
            parse_duration,
        )))
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new("PT30S", "30 seconds"),
            Example::new("PT1M30S", "1 minute, 30 seconds"),
            Example::new("P1DT2H", "1 day, 2 hours"),
        ]
    }
}

impl Environment {
    /// Declares an ISO 8601 duration variable.
    pub fn duration(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, IsoDuration> {
        Declarator::new(self, name, description, IsoDuration)
    }
}

/// Parses the week form `PnW` or the `PnDTnHnMnS` form.
///
/// At least one component is required, and a `T` must be followed by a time
/// component.
pub(crate) fn parse_duration(raw: &str) -> Result<Duration, ValueError> {
    let captures = pattern()
        .and_then(|regex| regex.captures(raw))
        .ok_or(ValueError::InvalidDuration)?;

    let component = |index: usize| -> Option<f64> {
        captures
            .get(index)
            .and_then(|m| m.as_str().replace(',', ".").parse().ok())
    };

    let has_time = (3..=5).any(|index| captures.get(index).is_some());
    if raw.contains('T') && !has_time {
        return Err(ValueError::InvalidDuration);
    }

    let seconds = if let Some(weeks) = component(1) {
        weeks * WEEK_SECONDS
    } else {
        if captures.get(2).is_none() && !has_time {
            return Err(ValueError::InvalidDuration);
        }
        [(2, 86_400.0), (3, 3_600.0), (4, 60.0), (5, 1.0)]
            .into_iter()
            .filter_map(|(index, unit)| component(index).map(|n| n * unit))
            .sum()
    };

    Duration::try_from_secs_f64(seconds).map_err(|_| ValueError::InvalidDuration)
}

/// Formats a duration as `PnDTnHnMnS`, omitting zero components.
pub(crate) fn format_duration(duration: &Duration) -> String {
    let total = duration.as_secs();
    let nanos = duration.subsec_nanos();
    let (days, rest) = (total / DAY, total % DAY);
    let (hours, rest) = (rest / HOUR, rest % HOUR);
    let (minutes, seconds) = (rest / MINUTE, rest % MINUTE);

    let mut out = String::from("P");
    if days > 0 {
        let _ = write!(out, "{days}D");
    }
    if hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
        if days == 0 {
            out.push_str("T0S");
        }
        return out;
    }

    out.push('T');
    if hours > 0 {
        let _ = write!(out, "{hours}H");
    }
    if minutes > 0 {
        let _ = write!(out, "{minutes}M");
    }
    if seconds > 0 || nanos > 0 {
        if nanos == 0 {
            let _ = write!(out, "{seconds}S");
        } else {
            let fraction = format!("{nanos:09}");
            let _ = write!(out, "{seconds}.{}S", fraction.trim_end_matches('0'));
        }
    }
    out
}
