// Domain scalars with several accepted wire representations
//
// `ByteCount` is the firmware's traffic/bandwidth counter. It arrives as a
// JSON integer or as a quoted integer depending on the endpoint. `Uptime` is
// an elapsed-time value that arrives as seconds (number or string), as a
// clock string like "1 day, 2:03:04", or as an ISO 8601 duration.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::{FieldPath, ValidationError};
use crate::schema::{FromRaw, invalid_scalar, type_mismatch};

// ── ByteCount ────────────────────────────────────────────────────────

const UNIT: f64 = 1024.0;
const UNIT_LABELS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Non-negative count of bytes.
///
/// Unit views divide by powers of 1024 and round to two decimal places,
/// half away from zero: 128 bytes is `0.13` KiB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ByteCount(u64);

impl ByteCount {
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Accept a JSON integer ≥ 0 or a base-10 string; anything else is `InvalidScalar`.
    pub fn parse(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        Self::from_raw(raw, path)
    }

    pub const fn bytes(self) -> u64 {
        self.0
    }

    pub fn kilobytes(self) -> f64 {
        self.scaled(1)
    }

    pub fn megabytes(self) -> f64 {
        self.scaled(2)
    }

    pub fn gigabytes(self) -> f64 {
        self.scaled(3)
    }

    pub fn terabytes(self) -> f64 {
        self.scaled(4)
    }

    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    fn raw_scaled(self, exponent: i32) -> f64 {
        self.0 as f64 / UNIT.powi(exponent)
    }

    fn scaled(self, exponent: i32) -> f64 {
        round_2dp(self.raw_scaled(exponent))
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl FromRaw for ByteCount {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let parsed = match raw {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        parsed
            .map(Self)
            .ok_or_else(|| invalid_scalar(path, "byte count", raw))
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unit chosen on the rounded value: 1048575 B is 1.00 MiB, not 1024.00 KiB.
        let mut exponent = 0;
        while exponent + 1 < UNIT_LABELS.len() && self.scaled(exponent_i32(exponent + 1)) >= 1.0 {
            exponent += 1;
        }
        if exponent == 0 {
            write!(f, "{} B", self.0)
        } else {
            let label = UNIT_LABELS.get(exponent).copied().unwrap_or("B");
            write!(f, "{:.2} {label}", self.scaled(exponent_i32(exponent)))
        }
    }
}

fn exponent_i32(exponent: usize) -> i32 {
    i32::try_from(exponent).unwrap_or(i32::MAX)
}

// ── Uptime ───────────────────────────────────────────────────────────

/// Non-negative elapsed time, stored as seconds. Always representable as a
/// [`Duration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Uptime(f64);

impl Uptime {
    /// `None` unless `secs` is non-negative and fits a [`Duration`].
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        Duration::try_from_secs_f64(secs).ok().map(|_| Self(secs))
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::try_from_secs_f64(self.0).unwrap_or(Duration::MAX)
    }
}

impl FromRaw for Uptime {
    fn from_raw(raw: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let secs = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<f64>()
                    .ok()
                    .or_else(|| parse_clock(s))
                    .or_else(|| parse_iso8601(s))
            }
            other => return Err(type_mismatch(path, "duration", other)),
        };
        secs.and_then(Self::from_secs_f64)
            .ok_or_else(|| invalid_scalar(path, "duration", raw))
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = Duration::from_secs(self.as_duration().as_secs());
        write!(f, "{}", humantime::format_duration(whole))
    }
}

/// Parse `[D day[s][,] ]HH:MM:SS[.f]` or `MM:SS[.f]` into seconds.
fn parse_clock(s: &str) -> Option<f64> {
    let (days, clock) = match s.split_once(' ') {
        Some((days, rest)) => {
            let days: u32 = days.parse().ok()?;
            let rest = rest.trim_start();
            let rest = rest
                .strip_prefix("days")
                .or_else(|| rest.strip_prefix("day"))
                .unwrap_or(rest);
            (days, rest.trim_start_matches(',').trim_start())
        }
        None => (0, s),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, sec] => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?, *sec),
        [m, sec] => (0, m.parse::<u32>().ok()?, *sec),
        _ => return None,
    };
    let seconds: f64 = seconds.parse().ok()?;
    if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return None;
    }

    Some(
        f64::from(days) * 86_400.0
            + f64::from(hours) * 3_600.0
            + f64::from(minutes) * 60.0
            + seconds,
    )
}

/// Parse an ISO 8601 duration such as `P1DT2H3M4.5S` into seconds.
///
/// Weeks, days, hours, minutes and seconds only. Years and months have no
/// fixed length and are rejected.
fn parse_iso8601(s: &str) -> Option<f64> {
    let body = s.strip_prefix('P')?;
    let (date, time) = match body.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };
    if time.map_or(date.is_empty(), str::is_empty) {
        return None;
    }
    let mut secs = designators(date, &[('W', 604_800.0), ('D', 86_400.0)])?;
    if let Some(time) = time {
        secs += designators(time, &[('H', 3_600.0), ('M', 60.0), ('S', 1.0)])?;
    }
    Some(secs)
}

/// Sum `<number><unit>` pairs. Units must come from `units`, in its order,
/// each at most once.
fn designators(mut s: &str, units: &[(char, f64)]) -> Option<f64> {
    let mut total = 0.0;
    let mut allowed = units;
    while !s.is_empty() {
        let end = s.find(|c: char| c.is_ascii_alphabetic())?;
        let (number, rest) = s.split_at(end);
        if !number.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let unit = rest.chars().next()?;
        let pos = allowed.iter().position(|(u, _)| *u == unit)?;
        let (_, factor) = allowed.get(pos)?;
        total += number.parse::<f64>().ok()? * factor;
        allowed = allowed.get(pos + 1..)?;
        s = rest.get(unit.len_utf8()..)?;
    }
    Some(total)
}

// ── Field-specific coercions ─────────────────────────────────────────

/// Integer flag that may also arrive as a quoted integer or a boolean.
///
/// Used for the current VPN tunnel's `auto` field.
pub fn int_flag(raw: &Value, path: &FieldPath) -> Result<i64, ValidationError> {
    match raw {
        Value::Bool(b) => Ok(i64::from(*b)),
        other => i64::from_raw(other, path),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn path() -> FieldPath {
        FieldPath::root("status").key("upload")
    }

    #[test]
    fn byte_count_from_int_and_string_agree() {
        let from_int = ByteCount::parse(&json!(1_048_576), &path()).unwrap();
        let from_str = ByteCount::parse(&json!("1048576"), &path()).unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_int.bytes(), 1_048_576);
        assert_eq!(from_int.megabytes(), 1.0);
    }

    #[test]
    fn byte_count_unit_views() {
        assert_eq!(ByteCount::new(1024).kilobytes(), 1.0);
        assert_eq!(ByteCount::new(1536).kilobytes(), 1.5);
        assert_eq!(ByteCount::new(5 * 1024 * 1024 * 1024).gigabytes(), 5.0);
        assert_eq!(ByteCount::new(1 << 40).terabytes(), 1.0);
        assert_eq!(ByteCount::new(1000).kilobytes(), 0.98);
    }

    #[test]
    fn byte_count_rounds_half_away_from_zero() {
        // 128 / 1024 = 0.125 exactly
        assert_eq!(ByteCount::new(128).kilobytes(), 0.13);
        // 640 / 1024 = 0.625 exactly
        assert_eq!(ByteCount::new(640).kilobytes(), 0.63);
    }

    #[test]
    fn byte_count_rejects_other_representations() {
        for raw in [json!(-1), json!("-1"), json!(1.5), json!("12kb"), json!(true), json!(null)] {
            let err = ByteCount::parse(&raw, &path()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidScalar, "{raw}");
            assert_eq!(err.offending_value(), Some(&raw));
        }
    }

    #[test]
    fn byte_count_display_picks_largest_unit() {
        assert_eq!(ByteCount::new(512).to_string(), "512 B");
        assert_eq!(ByteCount::new(1536).to_string(), "1.50 KiB");
        assert_eq!(ByteCount::new(3 * 1024 * 1024).to_string(), "3.00 MiB");
    }

    #[test]
    fn byte_count_display_promotes_when_rounding_reaches_next_unit() {
        assert_eq!(ByteCount::new(1_048_575).to_string(), "1.00 MiB");
        // 1018 / 1024 = 0.9941, 1019 / 1024 = 0.9951
        assert_eq!(ByteCount::new(1018).to_string(), "1018 B");
        assert_eq!(ByteCount::new(1019).to_string(), "1.00 KiB");
    }

    #[test]
    fn byte_count_serializes_as_integer() {
        assert_eq!(serde_json::to_value(ByteCount::new(42)).unwrap(), json!(42));
    }

    #[test]
    fn uptime_accepts_seconds() {
        let up = Uptime::from_raw(&json!(90), &path()).unwrap();
        assert_eq!(up.as_secs_f64(), 90.0);
        let up = Uptime::from_raw(&json!("3600.5"), &path()).unwrap();
        assert_eq!(up.as_secs_f64(), 3600.5);
    }

    #[test]
    fn uptime_accepts_clock_strings() {
        let cases = [
            ("1 day, 2:03:04", 93_784.0),
            ("2 days 00:00:01", 172_801.0),
            ("10:30", 630.0),
            ("0:00:01.5", 1.5),
        ];
        for (raw, secs) in cases {
            let up = Uptime::from_raw(&json!(raw), &path()).unwrap();
            assert_eq!(up.as_secs_f64(), secs, "{raw}");
        }
    }

    #[test]
    fn uptime_accepts_iso8601_durations() {
        let cases = [
            ("P1DT2H3M4S", 93_784.0),
            ("PT1.5S", 1.5),
            ("P1W", 604_800.0),
            ("PT90M", 5_400.0),
        ];
        for (raw, secs) in cases {
            let up = Uptime::from_raw(&json!(raw), &path()).unwrap();
            assert_eq!(up.as_secs_f64(), secs, "{raw}");
        }
    }

    #[test]
    fn uptime_rejects_malformed_iso8601() {
        for raw in ["P", "PT", "P1Y", "P1M", "PT1S2M", "P-1D", "PT1H1H", "PTS", "P1D2"] {
            assert_eq!(
                Uptime::from_raw(&json!(raw), &path()).unwrap_err().kind(),
                ErrorKind::InvalidScalar,
                "{raw}"
            );
        }
    }

    #[test]
    fn uptime_beyond_duration_range_is_rejected() {
        let err = Uptime::from_raw(&json!(1e20), &path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScalar);
        assert!(Uptime::from_secs_f64(f64::MAX).is_none());
        assert!(Uptime::from_secs_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn uptime_accessors_cover_the_accepted_range() {
        let up = Uptime::from_raw(&json!("10000000000000000000"), &path()).unwrap();
        assert!(up.as_duration() > Duration::from_secs(u64::MAX / 2));
        assert!(!up.to_string().is_empty());
    }

    #[test]
    fn uptime_rejects_garbage() {
        for raw in [json!("-5"), json!("soon"), json!("1:99:00"), json!(-1)] {
            assert_eq!(
                Uptime::from_raw(&raw, &path()).unwrap_err().kind(),
                ErrorKind::InvalidScalar,
                "{raw}"
            );
        }
        assert_eq!(
            Uptime::from_raw(&json!([]), &path()).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn uptime_display_is_humanized() {
        let up = Uptime::from_secs_f64(3_661.7).unwrap();
        assert_eq!(up.to_string(), "1h 1m 1s");
    }

    #[test]
    fn int_flag_accepts_strings_and_booleans() {
        assert_eq!(int_flag(&json!("1"), &path()).unwrap(), 1);
        assert_eq!(int_flag(&json!(0), &path()).unwrap(), 0);
        assert_eq!(int_flag(&json!(true), &path()).unwrap(), 1);
        assert_eq!(
            int_flag(&json!("yes"), &path()).unwrap_err().kind(),
            ErrorKind::InvalidScalar
        );
    }
}
