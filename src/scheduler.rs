//! Cooperative main loop step.
//!
//! One pass checks the phrase expiry (at most once per tick interval),
//! advances the fade and hands the frame to the output driver. Nothing here
//! blocks; the caller decides how long to wait between passes.

use embassy_time::{Duration, Instant};

use crate::error::Result;
use crate::lifecycle::TickOutcome;
use crate::local_time::WallClock;
use crate::word_clock::WordClock;
use crate::OutputDriver;

/// Result of one pass
#[derive(Debug, Clone, Copy)]
pub struct PassResult {
    /// Tick outcome, `None` if the tick interval had not elapsed yet
    pub tick: Option<TickOutcome>,
    /// When the next expiry check is due
    pub next_tick: Instant,
}

/// Drives a [`WordClock`] from a wall clock into an output driver
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = ClockScheduler::new(word_clock, driver, wall_clock, tick_interval);
///
/// loop {
///     scheduler.run_pass()?;
///     // Platform-specific yield
/// }
/// ```
pub struct ClockScheduler<
    'a,
    O: OutputDriver,
    C: WallClock,
    const LEDS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> {
    output: O,
    clock: C,
    word_clock: WordClock<'a, LEDS, INTENT_CHANNEL_SIZE>,
    tick_interval: Duration,
    next_tick: Option<Instant>,
}

impl<'a, O: OutputDriver, C: WallClock, const LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    ClockScheduler<'a, O, C, LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a new scheduler. The first pass always ticks.
    pub fn new(
        word_clock: WordClock<'a, LEDS, INTENT_CHANNEL_SIZE>,
        output: O,
        clock: C,
        tick_interval: Duration,
    ) -> Self {
        Self {
            output,
            clock,
            word_clock,
            tick_interval,
            next_tick: None,
        }
    }

    /// Run one pass of the main loop
    ///
    /// 1. Ticks the clock if the tick interval has elapsed
    /// 2. Advances the fade
    /// 3. Writes the frame to the output driver
    pub fn run_pass(&mut self) -> Result<PassResult> {
        let now = self.clock.now();

        let mut tick = None;
        if self.next_tick.is_none_or(|deadline| now >= deadline) {
            tick = Some(self.word_clock.tick(now, self.clock.local_time())?);
            self.next_tick = Some(now + self.tick_interval);
        }

        let frame = self.word_clock.render(now);
        self.output.write(frame);

        Ok(PassResult {
            tick,
            next_tick: self.next_tick.unwrap_or(now),
        })
    }

    pub fn word_clock(&self) -> &WordClock<'a, LEDS, INTENT_CHANNEL_SIZE> {
        &self.word_clock
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
