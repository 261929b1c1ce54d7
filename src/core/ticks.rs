//! Tick generation for the time and value axes.
//!
//! Value ticks are "nice" multiples of 1, 2 or 5 times a power of ten.
//! Time ticks snap to calendar boundaries (days, weeks, months, years) in
//! UTC. Labels are day-only, so no interval is shorter than one day; a
//! deeply zoomed axis shows fewer ticks instead of repeated dates. Both take
//! the current scale domain, so callers must regenerate them after every
//! rescale.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::primitives::{datetime_to_unix_seconds, format_day_label, unix_seconds_to_datetime};

pub const DEFAULT_TICK_COUNT: usize = 6;

const MAX_GENERATED_TICKS: usize = 2_048;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: f64 = 30.0 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;

/// Nice value ticks plus the step they were generated with.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTicks {
    pub values: Vec<f64>,
    pub step: f64,
}

impl ValueTicks {
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|value| format_value_tick(*value, self.step))
            .collect()
    }
}

struct TickRange {
    first: i64,
    last: i64,
    increment: f64,
    inverted: bool,
}

impl TickRange {
    fn value(&self, index: i64) -> f64 {
        if self.inverted {
            index as f64 / self.increment
        } else {
            index as f64 * self.increment
        }
    }

    fn step(&self) -> f64 {
        if self.inverted {
            1.0 / self.increment
        } else {
            self.increment
        }
    }
}

fn tick_range(start: f64, stop: f64, count: f64) -> Option<TickRange> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let ticks = if power < 0.0 {
        let increment = 10f64.powf(-power) / factor;
        let mut first = (start * increment).round() as i64;
        let mut last = (stop * increment).round() as i64;
        if (first as f64) / increment < start {
            first += 1;
        }
        if (last as f64) / increment > stop {
            last -= 1;
        }
        TickRange {
            first,
            last,
            increment,
            inverted: true,
        }
    } else {
        let increment = 10f64.powf(power) * factor;
        let mut first = (start / increment).round() as i64;
        let mut last = (stop / increment).round() as i64;
        if (first as f64) * increment < start {
            first += 1;
        }
        if (last as f64) * increment > stop {
            last -= 1;
        }
        TickRange {
            first,
            last,
            increment,
            inverted: false,
        }
    };

    if ticks.last < ticks.first && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    Some(ticks)
}

/// Nice step size for roughly `count` intervals over `[start, stop]`.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (low, high) = (start.min(stop), start.max(stop));
    tick_range(low, high, count as f64).map_or(0.0, |ticks| ticks.step())
}

/// Generates roughly `count` evenly spaced nice ticks inside the domain.
///
/// The domain may be given in either order; ticks are always ascending.
#[must_use]
pub fn value_ticks(start: f64, stop: f64, count: usize) -> ValueTicks {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return ValueTicks {
            values: Vec::new(),
            step: 0.0,
        };
    }
    if start == stop {
        return ValueTicks {
            values: vec![start],
            step: 0.0,
        };
    }

    let (low, high) = (start.min(stop), start.max(stop));
    let Some(ticks) = tick_range(low, high, count as f64) else {
        return ValueTicks {
            values: Vec::new(),
            step: 0.0,
        };
    };

    let values = (ticks.first..=ticks.last)
        .take(MAX_GENERATED_TICKS)
        .map(|index| ticks.value(index))
        .collect();
    ValueTicks {
        values,
        step: ticks.step(),
    }
}

/// Formats a value tick with just enough decimals for `step`.
#[must_use]
pub fn format_value_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        2
    };
    let formatted = format!("{value:.decimals$}");
    // Avoid "-0" / "-0.00" labels.
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        formatted.trim_start_matches('-').to_owned()
    } else {
        formatted
    }
}

/// Calendar interval used to place time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    Days(u32),
    Weeks,
    Months(u32),
    Years(u32),
}

impl TimeInterval {
    #[must_use]
    pub fn approx_seconds(self) -> f64 {
        match self {
            Self::Days(n) => f64::from(n) * SECONDS_PER_DAY,
            Self::Weeks => SECONDS_PER_WEEK,
            Self::Months(n) => f64::from(n) * SECONDS_PER_MONTH,
            Self::Years(n) => f64::from(n) * SECONDS_PER_YEAR,
        }
    }
}

const TIME_INTERVALS: [TimeInterval; 6] = [
    TimeInterval::Days(1),
    TimeInterval::Days(2),
    TimeInterval::Weeks,
    TimeInterval::Months(1),
    TimeInterval::Months(3),
    TimeInterval::Years(1),
];

/// Picks the calendar interval whose duration is closest to `span / count`.
#[must_use]
pub fn select_time_interval(start: f64, stop: f64, count: usize) -> TimeInterval {
    let target = (stop - start).abs() / count.max(1) as f64;
    let index = TIME_INTERVALS.partition_point(|interval| interval.approx_seconds() <= target);

    if index == TIME_INTERVALS.len() {
        let years = tick_step(start / SECONDS_PER_YEAR, stop / SECONDS_PER_YEAR, count)
            .round()
            .max(1.0);
        return TimeInterval::Years(years as u32);
    }
    if index == 0 {
        return TIME_INTERVALS[0];
    }

    let lower = TIME_INTERVALS[index - 1];
    let upper = TIME_INTERVALS[index];
    if target / lower.approx_seconds() < upper.approx_seconds() / target {
        lower
    } else {
        upper
    }
}

/// Generates calendar-aligned time ticks (unix seconds) inside the domain.
#[must_use]
pub fn time_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let (low, high) = (start.min(stop), start.max(stop));
    if low == high {
        return vec![low];
    }

    match select_time_interval(low, high, count) {
        TimeInterval::Days(1) => fixed_step_ticks(low, high, SECONDS_PER_DAY),
        TimeInterval::Days(n) => day_ticks(low, high, |date| (date.day() - 1) % n == 0),
        TimeInterval::Weeks => day_ticks(low, high, |date| date.weekday() == Weekday::Sun),
        TimeInterval::Months(n) => month_ticks(low, high, n),
        TimeInterval::Years(n) => year_ticks(low, high, n),
    }
}

/// Formats a time tick as a day/month/year label.
#[must_use]
pub fn format_time_tick(time: f64) -> String {
    format_day_label(time)
}

fn fixed_step_ticks(low: f64, high: f64, step: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut tick = (low / step).ceil() * step;
    while tick <= high && ticks.len() < MAX_GENERATED_TICKS {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

fn midnight_seconds(date: NaiveDate) -> Option<f64> {
    date.and_hms_opt(0, 0, 0)
        .map(|time| datetime_to_unix_seconds(time.and_utc()))
}

fn day_ticks(low: f64, high: f64, keep: impl Fn(NaiveDate) -> bool) -> Vec<f64> {
    let Some(mut date) = unix_seconds_to_datetime(low).map(|time| time.date_naive()) else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    while ticks.len() < MAX_GENERATED_TICKS {
        let Some(seconds) = midnight_seconds(date) else {
            break;
        };
        if seconds > high {
            break;
        }
        if seconds >= low && keep(date) {
            ticks.push(seconds);
        }
        let Some(next) = date.succ_opt() else {
            break;
        };
        date = next;
    }
    ticks
}

fn month_ticks(low: f64, high: f64, every: u32) -> Vec<f64> {
    let Some(start) = unix_seconds_to_datetime(low) else {
        return Vec::new();
    };
    let (mut year, mut month) = (start.year(), start.month());

    let mut ticks = Vec::new();
    while ticks.len() < MAX_GENERATED_TICKS {
        let Some(seconds) = NaiveDate::from_ymd_opt(year, month, 1).and_then(midnight_seconds)
        else {
            break;
        };
        if seconds > high {
            break;
        }
        if seconds >= low && (month - 1) % every == 0 {
            ticks.push(seconds);
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    ticks
}

fn year_ticks(low: f64, high: f64, every: u32) -> Vec<f64> {
    let Some(start) = unix_seconds_to_datetime(low) else {
        return Vec::new();
    };
    let every = i32::try_from(every.max(1)).unwrap_or(1);

    let mut ticks = Vec::new();
    let mut year = start.year();
    while ticks.len() < MAX_GENERATED_TICKS {
        let Some(seconds) = NaiveDate::from_ymd_opt(year, 1, 1).and_then(midnight_seconds) else {
            break;
        };
        if seconds > high {
            break;
        }
        if seconds >= low && year.rem_euclid(every) == 0 {
            ticks.push(seconds);
        }
        year += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::{format_value_tick, tick_step};

    #[test]
    fn tick_step_uses_one_two_five_progression() {
        assert_eq!(tick_step(0.0, 10.0, 6), 2.0);
        assert_eq!(tick_step(0.0, 100.0, 6), 20.0);
        assert_eq!(tick_step(0.0, 1.0, 6), 0.2);
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
    }

    #[test]
    fn value_labels_use_step_precision() {
        assert_eq!(format_value_tick(1.2, 0.2), "1.2");
        assert_eq!(format_value_tick(40.0, 20.0), "40");
        assert_eq!(format_value_tick(1.085, 0.005), "1.085");
        assert_eq!(format_value_tick(-0.0001, 0.5), "0.0");
    }
}
