//! Runtime changes to the clock
//!
//! Controllers post [`ClockIntent`]s into an
//! [`IntentChannel`](crate::channel::IntentChannel); the clock drains them at
//! the start of every tick.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::IntentReceiver;
use crate::color::Rgb;
use crate::lifecycle::PhraseLifecycle;

/// Intent to change the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockIntent {
    /// Use a new color for lit words, starting with the next phrase
    SetOnColor(Rgb),
    /// Recompute and re-fade the phrase on the next tick
    Refresh,
}

/// Applies queued intents to the phrase lifecycle
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Drain all pending intents (non-blocking)
    ///
    /// Returns the number of intents applied.
    pub fn process_pending(&mut self, lifecycle: &mut PhraseLifecycle) -> usize {
        let mut applied = 0;
        while let Some(intent) = self.intents.try_receive() {
            #[cfg(feature = "esp32-log")]
            println!("[IntentProcessor.process_pending] {:?}", intent);

            match intent {
                ClockIntent::SetOnColor(color) => lifecycle.set_on_color(color),
                ClockIntent::Refresh => lifecycle.expire(),
            }
            applied += 1;
        }
        applied
    }
}
