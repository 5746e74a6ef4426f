//! Time phrases and the phrase compiler
//!
//! A wall clock reading is turned into a sentence such as
//! "IT IS TEN PAST SIX". Minutes are rounded to the nearest five, and from
//! minute 33 on the sentence counts towards the next hour.

use core::fmt;

use embassy_time::Instant;
use heapless::Vec;

use crate::catalog::{Segment, SegmentCatalog, Word};
use crate::color::Rgb;
use crate::error::{Error, Result};

/// Maximum number of words in a phrase.
///
/// "IT IS TWENTYFIVE FIVE TO ELEVEN" is the longest sentence and uses all
/// of them.
pub const PHRASE_CAPACITY: usize = 6;

/// Ordered words of one phrase
pub type PhraseWords = Vec<Word, PHRASE_CAPACITY>;

/// First minute at which the phrase refers to the next hour
pub const NEXT_HOUR_FROM_MINUTE: u8 = 33;

/// Words emitted for each five minute bucket, bucket 0 being "o'clock"
const MINUTE_WORDS: [&[Word]; 12] = [
    &[],
    &[Word::Five, Word::Past],
    &[Word::Ten, Word::Past],
    &[Word::Quarter, Word::Past],
    &[Word::Twenty, Word::Past],
    &[Word::TwentyFive, Word::Five, Word::Past],
    &[Word::Half, Word::Past],
    &[Word::TwentyFive, Word::Five, Word::To],
    &[Word::Twenty, Word::To],
    &[Word::Quarter, Word::To],
    &[Word::Ten, Word::To],
    &[Word::Five, Word::To],
];

const PREFIX: [Word; 2] = [Word::It, Word::Is];

const fn longest_minute_words() -> usize {
    let mut longest = 0;
    let mut i = 0;
    while i < MINUTE_WORDS.len() {
        if MINUTE_WORDS[i].len() > longest {
            longest = MINUTE_WORDS[i].len();
        }
        i += 1;
    }
    longest
}

const _: () = assert!(
    PREFIX.len() + longest_minute_words() + 1 <= PHRASE_CAPACITY,
    "longest phrase does not fit into PHRASE_CAPACITY"
);

/// Five minute bucket (0-11) for a minute (0-59)
///
/// Buckets are centered on multiples of five: minutes 58-2 fall into
/// bucket 0, 3-7 into bucket 1 and so on.
pub const fn minute_bucket(minute: u8) -> usize {
    (minute as usize + 2) / 5 % 12
}

/// Compile a wall clock reading into the words of its phrase
///
/// Fails with [`Error::OutOfRangeInput`] when `hour` is not 0-23 or
/// `minute` is not 0-59.
pub fn compile(hour: u8, minute: u8) -> Result<PhraseWords> {
    if hour > 23 || minute > 59 {
        return Err(Error::OutOfRangeInput { hour, minute });
    }

    let mut words = PhraseWords::new();
    words
        .extend_from_slice(&PREFIX)
        .map_err(|()| Error::PhraseOverflow)?;
    words
        .extend_from_slice(MINUTE_WORDS[minute_bucket(minute)])
        .map_err(|()| Error::PhraseOverflow)?;

    let hour = if minute >= NEXT_HOUR_FROM_MINUTE {
        hour + 1
    } else {
        hour
    };
    words
        .push(hour_word(hour))
        .map_err(|_| Error::PhraseOverflow)?;

    Ok(words)
}

/// Hour word on a 12-hour face, where both 0 and 12 read as TWELVE
const fn hour_word(hour: u8) -> Word {
    Word::HOURS[((hour + 11) % 12) as usize]
}

/// One displayed sentence together with its fade colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    words: PhraseWords,
    /// Color at the start of the fade
    pub start_color: Rgb,
    /// Color at the end of the fade
    pub end_color: Rgb,
    /// Instant at or after which the phrase must be recompiled
    pub expires_at: Instant,
}

impl Phrase {
    /// Create an empty phrase that is already expired
    pub const fn empty(start_color: Rgb, end_color: Rgb) -> Self {
        Self {
            words: Vec::new(),
            start_color,
            end_color,
            expires_at: Instant::from_millis(0),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Replace the words of the phrase
    pub fn set_words(&mut self, words: PhraseWords) {
        self.words = words;
    }

    /// Append a word
    ///
    /// Fails with [`Error::PhraseOverflow`] when the phrase is full.
    pub fn push(&mut self, word: Word) -> Result<()> {
        self.words.push(word).map_err(|_| Error::PhraseOverflow)
    }

    /// Check if the phrase has to be replaced at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Segments to light, in phrase order
    pub fn segments<'a>(
        &'a self,
        catalog: &'a SegmentCatalog,
    ) -> impl Iterator<Item = Segment> + 'a {
        self.words.iter().map(|word| catalog.segment(*word))
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word.as_str())?;
        }
        Ok(())
    }
}
