//! Word clock state object
//!
//! [`WordClock`] owns the phrase pair, the cross-fade and the frame buffer.
//! Ticks rotate the phrases, renders draw the fade into the frame.

use embassy_time::{Duration, Instant};

use crate::animator::{CrossFade, Face, FadeStage};
use crate::channel::IntentReceiver;
use crate::color::{BLACK, Rgb};
use crate::error::{Error, Result};
use crate::intent_processor::IntentProcessor;
use crate::lifecycle::{ClockColors, PhraseLifecycle, TickOutcome};
use crate::local_time::LocalTime;
use crate::phrase::Phrase;

/// Default color of lit words, a warm white
pub const DEFAULT_ON_COLOR: Rgb = Rgb {
    r: 90,
    g: 80,
    b: 60,
};

/// Timing of phrase rotation and fades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTimings {
    /// How long a phrase stays current before it is recompiled
    pub hold: Duration,
    /// Duration of the whole cross-fade (fade-out plus fade-in)
    pub fade: Duration,
    /// Interval between expiry checks
    pub tick_interval: Duration,
}

impl ClockTimings {
    pub const DEFAULT: Self = Self {
        hold: Duration::from_secs(5 * 60),
        fade: Duration::from_millis(50_000),
        tick_interval: Duration::from_secs(30),
    };
}

impl Default for ClockTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the word clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordClockConfig {
    pub colors: ClockColors,
    pub timings: ClockTimings,
    pub face: Face,
}

impl Default for WordClockConfig {
    fn default() -> Self {
        Self {
            colors: ClockColors {
                on: DEFAULT_ON_COLOR,
                off: BLACK,
            },
            timings: ClockTimings::DEFAULT,
            face: Face::default(),
        }
    }
}

/// Word clock state - phrases, fade and the frame buffer
///
/// `tick` is driven by a slow timer, `render` by every pass of the main
/// loop. Both run on the same thread, so a rotation always completes before
/// the next frame sees the new phrases.
pub struct WordClock<'a, const LEDS: usize, const INTENT_CHANNEL_SIZE: usize> {
    // External dependencies and configuration
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    face: Face,

    // Internal state
    lifecycle: PhraseLifecycle,
    fade: CrossFade,
    frame_buffer: [Rgb; LEDS],
}

impl<'a, const LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    WordClock<'a, LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a new clock
    ///
    /// Fails if a catalog segment does not fit the grid, or if the grid has
    /// more pixels than `LEDS`.
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &WordClockConfig,
    ) -> Result<Self> {
        let topology = config.face.topology;
        config
            .face
            .catalog
            .validate(topology.width(), topology.height())?;
        if topology.pixel_count() > LEDS {
            return Err(Error::FrameTooSmall {
                required: topology.pixel_count(),
                available: LEDS,
            });
        }

        Ok(Self {
            intent_processor: IntentProcessor::new(intents),
            face: config.face.clone(),
            lifecycle: PhraseLifecycle::new(config.colors, config.timings.hold),
            fade: CrossFade::new(config.timings.fade),
            frame_buffer: [config.colors.off; LEDS],
        })
    }

    /// Check the phrase expiry and rotate if needed
    ///
    /// Pending intents are applied first. `local` must be the wall clock
    /// reading at `now`.
    pub fn tick(&mut self, now: Instant, local: LocalTime) -> Result<TickOutcome> {
        self.intent_processor.process_pending(&mut self.lifecycle);

        let outcome = self.lifecycle.on_tick(now, local)?;
        if let TickOutcome::Rotated { armed_at } = outcome {
            self.fade.arm(armed_at);
        }
        Ok(outcome)
    }

    /// Advance the fade and return the frame to show
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.advance(now);
        &self.frame_buffer
    }

    /// Advance the fade, reporting what was drawn
    pub fn advance(&mut self, now: Instant) -> FadeStage {
        self.fade.advance(
            now,
            &self.face,
            self.lifecycle.previous(),
            self.lifecycle.current(),
            &mut self.frame_buffer,
        )
    }

    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    pub fn previous(&self) -> &Phrase {
        self.lifecycle.previous()
    }

    pub fn current(&self) -> &Phrase {
        self.lifecycle.current()
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    /// Instant the last fade was armed at, `None` before the first rotation
    pub fn fade_armed_at(&self) -> Option<Instant> {
        self.fade.armed_at()
    }

    /// Check if the last fade has finished at `now`
    pub fn fade_complete(&self, now: Instant) -> bool {
        self.fade.is_complete(now)
    }
}
