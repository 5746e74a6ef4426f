//! Logical grid to physical pixel mapping
//!
//! LED grids are usually a single strip folded into rows. [`GridTopology`]
//! hides the fold so callers can address lights by `(row, column)`.

/// How the strip is threaded through the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wiring {
    /// Every row runs left to right
    RowMajor,
    /// Even rows run left to right, odd rows right to left
    RowMajorAlternating,
    /// Alternating layout rotated by 180 degrees, addressed with the face row
    /// as the layout x axis and the face column as its y axis.
    ///
    /// This is how the 10x10 word clock is wired: the strip runs along face
    /// columns, starting at the last column, and every other run is reversed.
    #[default]
    RowMajorAlternating180,
}

/// Geometry of a rectangular LED grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    width: u8,
    height: u8,
    wiring: Wiring,
}

impl GridTopology {
    /// 10x10 face with the strip entering at the top-right corner
    pub const WORD_CLOCK_10X10: Self = Self::new(10, 10, Wiring::RowMajorAlternating180);

    pub const fn new(width: u8, height: u8, wiring: Wiring) -> Self {
        assert!(width > 0 && height > 0, "grid must not be empty");
        Self {
            width,
            height,
            wiring,
        }
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.height
    }

    pub const fn wiring(&self) -> Wiring {
        self.wiring
    }

    /// Total number of pixels on the grid
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Physical pixel index for a logical coordinate
    ///
    /// Out of range coordinates are clamped to the last row/column, so the
    /// result is always a valid index.
    pub const fn map(&self, row: u8, column: u8) -> usize {
        let row = if row >= self.height { self.height - 1 } else { row };
        let column = if column >= self.width {
            self.width - 1
        } else {
            column
        };
        self.map_unchecked(row, column)
    }

    /// Physical pixel index, or `None` when the coordinate is off the grid
    pub const fn try_map(&self, row: u8, column: u8) -> Option<usize> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(self.map_unchecked(row, column))
    }

    const fn map_unchecked(&self, row: u8, column: u8) -> usize {
        match self.wiring {
            Wiring::RowMajor => row_major(self.width, row, column),
            Wiring::RowMajorAlternating => alternating(self.width, row, column),
            Wiring::RowMajorAlternating180 => alternating_180(self.height, self.width, row, column),
        }
    }
}

impl Default for GridTopology {
    fn default() -> Self {
        Self::WORD_CLOCK_10X10
    }
}

const fn row_major(width: u8, row: u8, column: u8) -> usize {
    row as usize * width as usize + column as usize
}

// Layout (x, y) on a `layout_width` x `layout_height` grid; odd y runs go
// left to right, even ones right to left, starting from the last y.
const fn alternating_180(layout_width: u8, layout_height: u8, x: u8, y: u8) -> usize {
    let start = (layout_height - 1 - y) as usize * layout_width as usize;
    if y % 2 == 1 {
        start + x as usize
    } else {
        start + (layout_width - 1 - x) as usize
    }
}

const fn alternating(width: u8, row: u8, column: u8) -> usize {
    let start = row as usize * width as usize;
    if row % 2 == 1 {
        start + (width - 1 - column) as usize
    } else {
        start + column as usize
    }
}
