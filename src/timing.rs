use std::time::SystemTime;

/// Seconds elapsed since `start`, rounded to microsecond precision.
///
/// A `start` in the future yields a negative value.
pub fn elapsed(start: SystemTime) -> f64 {
    let now = SystemTime::now();
    let seconds = match now.duration_since(start) {
        Ok(delta) => delta.as_secs_f64(),
        Err(ahead) => -ahead.duration().as_secs_f64(),
    };
    round_micros(seconds)
}

pub fn round_micros(seconds: f64) -> f64 {
    (seconds * 1_000_000.0).round() / 1_000_000.0
}
