//! Error types shared by the crate

use derive_more::{Display, Error};

/// Errors raised by the word clock core
///
/// None of these are expected at runtime: each one points at a bug in an
/// upstream collaborator (time source, catalog data or stored config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Wall clock reading outside of 0-23 hours or 0-59 minutes
    #[display("time {hour}:{minute} is out of range")]
    OutOfRangeInput { hour: u8, minute: u8 },
    /// Phrase would exceed its fixed word capacity
    #[display("phrase capacity exceeded")]
    PhraseOverflow,
    /// Catalog segment does not fit on the grid
    #[display("segment at row {row}, columns {start_column}..={end_column} is outside of the grid")]
    SegmentOutOfGrid {
        row: u8,
        start_column: u8,
        end_column: u8,
    },
    /// Frame buffer has fewer pixels than the grid
    #[display("frame buffer holds {available} pixels, grid needs {required}")]
    FrameTooSmall { required: usize, available: usize },
    /// Timezone offset text could not be parsed
    #[display("invalid timezone offset")]
    InvalidTimezone,
    /// Unix timestamp outside of the supported calendar range
    #[display("invalid unix timestamp")]
    InvalidTimestamp,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
