/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

//! Humanized relative timestamps ("3 days ago", "há 3 dias").
//!
//! Bucketing follows the thresholds popularized by day.js `relativeTime`,
//! so values read the same as in the rest of the event tooling.

use chrono::{DateTime, Utc};

use crate::labels::Locale;

const SECS_PER_MONTH: f64 = 30.436_875 * 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Seconds,
    Minute,
    Minutes(i64),
    Hour,
    Hours(i64),
    Day,
    Days(i64),
    Month,
    Months(i64),
    Year,
    Years(i64),
}

fn bucket(secs: f64) -> Span {
    let secs_r = secs.round();
    if secs_r <= 44.0 {
        return Span::Seconds;
    }
    if secs_r <= 89.0 {
        return Span::Minute;
    }
    let minutes = (secs / 60.0).round();
    if minutes <= 44.0 {
        return Span::Minutes(minutes as i64);
    }
    if minutes <= 89.0 {
        return Span::Hour;
    }
    let hours = (secs / 3_600.0).round();
    if hours <= 21.0 {
        return Span::Hours(hours as i64);
    }
    if hours <= 35.0 {
        return Span::Day;
    }
    let days = (secs / 86_400.0).round();
    if days <= 25.0 {
        return Span::Days(days as i64);
    }
    if days <= 45.0 {
        return Span::Month;
    }
    let months = (secs / SECS_PER_MONTH).round();
    if months <= 10.0 {
        return Span::Months(months as i64);
    }
    if months <= 17.0 {
        return Span::Year;
    }
    Span::Years((secs / (SECS_PER_MONTH * 12.0)).round() as i64)
}

fn phrase(span: Span, locale: Locale) -> String {
    match locale {
        Locale::PtBr => match span {
            Span::Seconds => "poucos segundos".to_string(),
            Span::Minute => "um minuto".to_string(),
            Span::Minutes(n) => format!("{n} minutos"),
            Span::Hour => "uma hora".to_string(),
            Span::Hours(n) => format!("{n} horas"),
            Span::Day => "um dia".to_string(),
            Span::Days(n) => format!("{n} dias"),
            Span::Month => "um mês".to_string(),
            Span::Months(n) => format!("{n} meses"),
            Span::Year => "um ano".to_string(),
            Span::Years(n) => format!("{n} anos"),
        },
        Locale::En => match span {
            Span::Seconds => "a few seconds".to_string(),
            Span::Minute => "a minute".to_string(),
            Span::Minutes(n) => format!("{n} minutes"),
            Span::Hour => "an hour".to_string(),
            Span::Hours(n) => format!("{n} hours"),
            Span::Day => "a day".to_string(),
            Span::Days(n) => format!("{n} days"),
            Span::Month => "a month".to_string(),
            Span::Months(n) => format!("{n} months"),
            Span::Year => "a year".to_string(),
            Span::Years(n) => format!("{n} years"),
        },
    }
}

/// Describe `then` relative to `now` in the given locale.
pub fn format_relative(now: DateTime<Utc>, then: DateTime<Utc>, locale: Locale) -> String {
    let delta_ms = then.signed_duration_since(now).num_milliseconds();
    let future = delta_ms > 0;
    let text = phrase(bucket(delta_ms.unsigned_abs() as f64 / 1_000.0), locale);
    match (locale, future) {
        (Locale::PtBr, true) => format!("em {text}"),
        (Locale::PtBr, false) => format!("há {text}"),
        (Locale::En, true) => format!("in {text}"),
        (Locale::En, false) => format!("{text} ago"),
    }
}
