//! Word segments of the clock face
//!
//! Each [`Word`] is lit by one [`Segment`]: a horizontal run of lights on a
//! single row. The [`SegmentCatalog`] maps words to segments and is fixed
//! once the clock is built.

use core::ops::RangeInclusive;

use crate::error::{Error, Result};

/// A contiguous run of lights on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub row: u8,
    pub start_column: u8,
    pub end_column: u8,
}

impl Segment {
    pub const fn new(row: u8, start_column: u8, end_column: u8) -> Self {
        Self {
            row,
            start_column,
            end_column,
        }
    }

    /// Columns covered by the segment, inclusive on both ends
    pub const fn columns(&self) -> RangeInclusive<u8> {
        self.start_column..=self.end_column
    }

    /// Number of lights in the segment
    pub const fn light_count(&self) -> usize {
        (self.end_column - self.start_column) as usize + 1
    }

    /// Check the segment fits on a `width` x `height` grid
    pub const fn fits(&self, width: u8, height: u8) -> bool {
        self.start_column <= self.end_column && self.end_column < width && self.row < height
    }
}

/// Words that can be lit on the face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Word {
    It,
    Is,
    Five,
    Ten,
    Quarter,
    Twenty,
    TwentyFive,
    Half,
    To,
    Past,
    HourOne,
    HourTwo,
    HourThree,
    HourFour,
    HourFive,
    HourSix,
    HourSeven,
    HourEight,
    HourNine,
    HourTen,
    HourEleven,
    HourTwelve,
}

impl Word {
    pub const COUNT: usize = 22;

    /// Hour words in clock order, starting from one o'clock
    pub const HOURS: [Self; 12] = [
        Self::HourOne,
        Self::HourTwo,
        Self::HourThree,
        Self::HourFour,
        Self::HourFive,
        Self::HourSix,
        Self::HourSeven,
        Self::HourEight,
        Self::HourNine,
        Self::HourTen,
        Self::HourEleven,
        Self::HourTwelve,
    ];

    /// Word for a 12-hour clock value (1-12)
    ///
    /// Returns `None` outside of 1-12.
    pub const fn hour(hour12: u8) -> Option<Self> {
        if hour12 == 0 || hour12 > 12 {
            return None;
        }
        Some(Self::HOURS[(hour12 - 1) as usize])
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::Is => "IS",
            Self::Five => "FIVE",
            Self::Ten => "TEN",
            Self::Quarter => "QUARTER",
            Self::Twenty => "TWENTY",
            Self::TwentyFive => "TWENTYFIVE",
            Self::Half => "HALF",
            Self::To => "TO",
            Self::Past => "PAST",
            Self::HourOne => "ONE",
            Self::HourTwo => "TWO",
            Self::HourThree => "THREE",
            Self::HourFour => "FOUR",
            Self::HourFive => "FIVE",
            Self::HourSix => "SIX",
            Self::HourSeven => "SEVEN",
            Self::HourEight => "EIGHT",
            Self::HourNine => "NINE",
            Self::HourTen => "TEN",
            Self::HourEleven => "ELEVEN",
            Self::HourTwelve => "TWELVE",
        }
    }
}

/// Segment for every word, indexed by `Word as usize`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentCatalog {
    segments: [Segment; Word::COUNT],
}

impl SegmentCatalog {
    /// The 10x10 English face.
    ///
    /// The face has no TWENTYFIVE of its own: "FIVE" sits before "TWENTY" on
    /// the first rows, so TWENTYFIVE lights the TWENTY lights and the phrase
    /// adds a separate FIVE.
    pub const DEFAULT: Self = Self {
        segments: [
            Segment::new(0, 0, 1), // IT
            Segment::new(0, 3, 4), // IS
            Segment::new(0, 6, 9), // FIVE
            Segment::new(2, 0, 2), // TEN
            Segment::new(1, 0, 6), // QUARTER
            Segment::new(2, 3, 8), // TWENTY
            Segment::new(2, 3, 8), // TWENTYFIVE
            Segment::new(3, 0, 3), // HALF
            Segment::new(3, 4, 5), // TO
            Segment::new(3, 6, 9), // PAST
            Segment::new(5, 0, 2), // ONE
            Segment::new(9, 0, 2), // TWO
            Segment::new(5, 3, 7), // THREE
            Segment::new(4, 6, 9), // FOUR
            Segment::new(9, 4, 7), // FIVE
            Segment::new(6, 7, 9), // SIX
            Segment::new(4, 0, 4), // SEVEN
            Segment::new(8, 0, 4), // EIGHT
            Segment::new(8, 6, 9), // NINE
            Segment::new(7, 7, 9), // TEN
            Segment::new(6, 0, 5), // ELEVEN
            Segment::new(7, 0, 5), // TWELVE
        ],
    };

    /// Create a catalog from a custom face layout
    pub const fn new(segments: [Segment; Word::COUNT]) -> Self {
        Self { segments }
    }

    /// Segment lit for `word`
    pub const fn segment(&self, word: Word) -> Segment {
        self.segments[word as usize]
    }

    /// Check every segment fits on a `width` x `height` grid
    pub fn validate(&self, width: u8, height: u8) -> Result<()> {
        match self.segments.iter().find(|segment| !segment.fits(width, height)) {
            Some(segment) => Err(Error::SegmentOutOfGrid {
                row: segment.row,
                start_column: segment.start_column,
                end_column: segment.end_column,
            }),
            None => Ok(()),
        }
    }
}

impl Default for SegmentCatalog {
    fn default() -> Self {
        Self::DEFAULT
    }
}
