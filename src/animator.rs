//! Two-phrase cross-fade
//!
//! The fade runs over a fixed duration. During the first half the previous
//! phrase fades out on an exponential-in curve, during the second half the
//! current phrase fades in on an exponential-out curve. At the exact
//! midpoint nothing is drawn.

use embassy_time::{Duration, Instant};

use crate::catalog::SegmentCatalog;
use crate::color::{Rgb, lerp_colors};
use crate::easing::{exponential_in, exponential_out, unit_progress};
use crate::phrase::Phrase;
use crate::topology::GridTopology;

const MIDPOINT: f32 = 0.5;

/// Physical face: grid wiring plus the word segments painted on it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Face {
    pub topology: GridTopology,
    pub catalog: SegmentCatalog,
}

impl Face {
    pub const fn new(topology: GridTopology, catalog: SegmentCatalog) -> Self {
        Self { topology, catalog }
    }

    /// Write `color` to every pixel covered by the phrase
    ///
    /// Pixels outside of `frame` are skipped.
    pub fn paint(&self, phrase: &Phrase, color: Rgb, frame: &mut [Rgb]) {
        for segment in phrase.segments(&self.catalog) {
            for column in segment.columns() {
                let index = self.topology.map(segment.row, column);
                if let Some(pixel) = frame.get_mut(index) {
                    *pixel = color;
                }
            }
        }
    }
}

/// What a call to [`CrossFade::advance`] drew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStage {
    /// Not armed, nothing drawn
    Idle,
    /// Previous phrase drawn
    FadingOut,
    /// Exact midpoint, nothing drawn
    Blackout,
    /// Current phrase drawn
    FadingIn,
    /// Current phrase drawn at its end color, fade is over
    Finished,
}

/// Cross-fade animation channel
#[derive(Debug, Clone)]
///
/// Keeps no running flag: whether the fade is over follows from its
/// progress, at `now` and at the previous pass.
pub struct CrossFade {
    duration: Duration,
    armed_at: Option<Instant>,
    last_pass: Option<Instant>,
}

impl CrossFade {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            armed_at: None,
            last_pass: None,
        }
    }

    /// Restart the fade from `now`
    pub fn arm(&mut self, now: Instant) {
        self.armed_at = Some(now);
        self.last_pass = None;
    }

    pub const fn armed_at(&self) -> Option<Instant> {
        self.armed_at
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Fade progress at `now` (0.0-1.0), `None` if not armed
    ///
    /// A `now` before the arming instant counts as the start of the fade.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let armed_at = self.armed_at?;
        let elapsed = now
            .checked_duration_since(armed_at)
            .unwrap_or(Duration::from_millis(0));
        Some(unit_progress(elapsed, self.duration))
    }

    /// Check if the fade has run its full duration at `now`
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now).is_some_and(|progress| progress >= 1.0)
    }

    /// Check if an earlier pass already drew the final frame
    fn completed_before(&self, now: Instant) -> bool {
        match self.last_pass {
            Some(last) if last < now => self.is_complete(last),
            _ => false,
        }
    }

    /// Draw the fade frame for `now`
    ///
    /// Overwrites the pixels of whichever phrase is visible. The first pass
    /// at progress 1.0 draws the final frame; passes after it draw nothing
    /// until the fade is armed again.
    pub fn advance(
        &mut self,
        now: Instant,
        face: &Face,
        previous: &Phrase,
        current: &Phrase,
        frame: &mut [Rgb],
    ) -> FadeStage {
        let Some(progress) = self.progress(now) else {
            return FadeStage::Idle;
        };
        if progress >= 1.0 && self.completed_before(now) {
            return FadeStage::Idle;
        }
        self.last_pass = Some(now);

        if progress < MIDPOINT {
            let fraction = exponential_in(progress * 2.0);
            let color = lerp_colors(previous.start_color, previous.end_color, fraction);
            face.paint(previous, color, frame);
            return FadeStage::FadingOut;
        }
        if progress <= MIDPOINT {
            return FadeStage::Blackout;
        }

        let fraction = exponential_out((progress - MIDPOINT) * 2.0);
        let color = lerp_colors(current.start_color, current.end_color, fraction);
        face.paint(current, color, frame);

        if progress >= 1.0 {
            return FadeStage::Finished;
        }
        FadeStage::FadingIn
    }
}
