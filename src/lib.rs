#![no_std]

pub mod animator;
pub mod catalog;
pub mod channel;
pub mod color;
pub mod easing;
pub mod error;
pub mod intent_processor;
pub mod lifecycle;
pub mod local_time;
pub mod math8;
pub mod phrase;
pub mod scheduler;
pub mod topology;
pub mod word_clock;

pub use animator::{CrossFade, Face, FadeStage};
pub use catalog::{Segment, SegmentCatalog, Word};
pub use channel::{IntentChannel, IntentReceiver, IntentSender};
pub use error::{Error, Result};
pub use intent_processor::ClockIntent;
pub use lifecycle::{ClockColors, PhraseLifecycle, TickOutcome};
pub use local_time::{LocalTime, TimezoneOffset, WallClock};
pub use phrase::{PHRASE_CAPACITY, Phrase, PhraseWords, compile};
pub use scheduler::{ClockScheduler, PassResult};
pub use topology::{GridTopology, Wiring};
pub use word_clock::{ClockTimings, WordClock, WordClockConfig};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push frames to the physical strip. The driver
/// only reads the frame; it is called once per pass after the clock has
/// finished writing.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
