//! Phrase rotation
//!
//! Keeps the phrase being faded out (`previous`) and the one being faded in
//! (`current`), and swaps them once the current phrase expires.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::error::Result;
use crate::local_time::LocalTime;
use crate::phrase::{Phrase, compile};

/// Colors of lit and unlit words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockColors {
    pub on: Rgb,
    pub off: Rgb,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Current phrase is still valid
    Unchanged,
    /// Phrases were rotated and a fade should start at `armed_at`
    Rotated { armed_at: Instant },
}

/// Owner of the previous/current phrase pair
#[derive(Debug, Clone)]
pub struct PhraseLifecycle {
    previous: Phrase,
    current: Phrase,
    colors: ClockColors,
    hold: Duration,
}

impl PhraseLifecycle {
    /// Create a lifecycle with two empty phrases
    ///
    /// The current phrase starts out expired, so the first tick always
    /// rotates.
    pub const fn new(colors: ClockColors, hold: Duration) -> Self {
        Self {
            previous: Phrase::empty(colors.off, colors.off),
            current: Phrase::empty(colors.off, colors.on),
            colors,
            hold,
        }
    }

    /// Phrase being faded out
    pub const fn previous(&self) -> &Phrase {
        &self.previous
    }

    /// Phrase being faded in
    pub const fn current(&self) -> &Phrase {
        &self.current
    }

    pub const fn colors(&self) -> ClockColors {
        self.colors
    }

    /// Change the "on" color
    ///
    /// Takes effect at the next rotation.
    pub fn set_on_color(&mut self, color: Rgb) {
        self.colors.on = color;
    }

    /// Mark the current phrase as expired so the next tick rotates
    pub fn expire(&mut self) {
        self.current.expires_at = Instant::from_millis(0);
    }

    /// Rotate phrases if the current one has expired at `now`
    ///
    /// `local` must be the wall clock reading taken at `now`.
    pub fn on_tick(&mut self, now: Instant, local: LocalTime) -> Result<TickOutcome> {
        #[cfg(feature = "esp32-log")]
        println!(
            "[PhraseLifecycle.on_tick] now {:?}ms, expires {:?}ms",
            now.as_millis(),
            self.current.expires_at.as_millis()
        );

        if !self.current.is_expired(now) {
            return Ok(TickOutcome::Unchanged);
        }

        // Compile first so a failure leaves both phrases untouched
        let words = compile(local.hour(), local.minute())?;

        self.previous.clone_from(&self.current);
        self.previous.start_color = self.colors.on;
        self.previous.end_color = self.colors.off;

        self.current.set_words(words);
        self.current.start_color = self.colors.off;
        self.current.end_color = self.colors.on;
        self.current.expires_at = now + self.hold;

        #[cfg(feature = "esp32-log")]
        println!(
            "[PhraseLifecycle.on_tick] new phrase \"{}\", expires {:?}ms",
            self.current,
            self.current.expires_at.as_millis()
        );

        Ok(TickOutcome::Rotated { armed_at: now })
    }
}
