//! Easing curves and progress helpers for time-driven fades
//!
//! All curves take and return a unit fraction and are pinned at both ends:
//! `f(0.0) == 0.0` and `f(1.0) == 1.0`.

use embassy_time::Duration;

/// Exponential ease-in
///
/// Stays close to the start value for most of the range, then rushes to
/// the end.
pub fn exponential_in(unit: f32) -> f32 {
    if unit <= 0.0 {
        return 0.0;
    }
    if unit >= 1.0 {
        return 1.0;
    }
    libm::powf(2.0, 10.0 * (unit - 1.0))
}

/// Exponential ease-out
///
/// Approaches the end value early and settles there.
pub fn exponential_out(unit: f32) -> f32 {
    if unit <= 0.0 {
        return 0.0;
    }
    if unit >= 1.0 {
        return 1.0;
    }
    1.0 - libm::powf(2.0, -10.0 * unit)
}

/// Progress of `elapsed` over `total` as a unit fraction, clamped to 0.0-1.0
///
/// A zero `total` is treated as an already finished run.
#[allow(clippy::cast_precision_loss)]
pub fn unit_progress(elapsed: Duration, total: Duration) -> f32 {
    let total = total.as_millis();
    if total == 0 {
        return 1.0;
    }
    let elapsed = elapsed.as_millis();
    if elapsed >= total {
        return 1.0;
    }
    elapsed as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_are_pinned_at_both_ends() {
        assert_eq!(exponential_in(0.0), 0.0);
        assert_eq!(exponential_in(1.0), 1.0);
        assert_eq!(exponential_out(0.0), 0.0);
        assert_eq!(exponential_out(1.0), 1.0);
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(exponential_in(0.5) < 0.05);
        assert!(exponential_out(0.5) > 0.95);
    }

    #[test]
    fn progress_is_clamped() {
        let total = Duration::from_millis(50_000);
        assert_eq!(unit_progress(Duration::from_millis(0), total), 0.0);
        assert_eq!(unit_progress(Duration::from_millis(25_000), total), 0.5);
        assert_eq!(unit_progress(Duration::from_millis(90_000), total), 1.0);
        assert_eq!(unit_progress(Duration::from_millis(1), Duration::from_millis(0)), 1.0);
    }
}
