use crate::AnimationError;
use tracing::trace;

/// Dimensions of a texture atlas laid out as `rows` x `columns` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    rows: u32,
    columns: u32,
}

/// A single atlas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridCell {
    pub row: u32,
    pub column: u32,
}

impl GridCell {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl From<(u32, u32)> for GridCell {
    fn from((row, column): (u32, u32)) -> Self {
        Self { row, column }
    }
}

impl From<GridCell> for (u32, u32) {
    fn from(cell: GridCell) -> Self {
        (cell.row, cell.column)
    }
}

impl GridConfig {
    pub fn new(rows: u32, columns: u32) -> Result<Self, AnimationError> {
        if rows == 0 || columns == 0 {
            return Err(AnimationError::invalid(format!(
                "grid needs at least one row and one column, got {rows}x{columns}"
            )));
        }
        if rows.checked_mul(columns).is_none() {
            return Err(AnimationError::invalid(format!(
                "grid of {rows}x{columns} frames is too large"
            )));
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn total_frames(&self) -> u32 {
        self.rows * self.columns
    }

    /// Cell shown for a linear frame index. Indices past the end wrap around.
    pub fn cell(&self, frame: u32) -> GridCell {
        let frame = frame % self.total_frames();
        GridCell {
            row: frame / self.columns,
            column: frame % self.columns,
        }
    }

    pub fn frame_of(&self, cell: GridCell) -> u32 {
        cell.row * self.columns + cell.column
    }

    /// Pulls any requested start frame into `[0, total_frames)`.
    pub fn clamp_frame(&self, frame: i64) -> u32 {
        let last = i64::from(self.total_frames() - 1);
        // `last` fits in u32, so the clamped value does too
        frame.clamp(0, last) as u32
    }

    pub fn frames_from(&self, start_frame: i64) -> FrameSequence {
        let start = self.clamp_frame(start_frame);
        FrameSequence {
            grid: *self,
            start,
            next: start,
        }
    }
}

/// Infinite walk over the atlas, row by row, wrapping back to frame `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    grid: GridConfig,
    start: u32,
    next: u32,
}

impl FrameSequence {
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn start_frame(&self) -> u32 {
        self.start
    }

    /// Linear index of the frame the next call to `next` yields.
    pub fn frame(&self) -> u32 {
        self.next
    }

    pub fn restart(&mut self) {
        self.next = self.start;
    }

    pub fn next_cell(&mut self) -> GridCell {
        let cell = self.grid.cell(self.next);
        self.next += 1;
        if self.next == self.grid.total_frames() {
            trace!(frames = self.next, "frame sequence wrapped");
            self.next = 0;
        }
        cell
    }
}

impl Iterator for FrameSequence {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        Some(self.next_cell())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
