use crate::GridCell;

/// Receives the row and column of every frame a driver shows.
pub trait FrameSink {
    fn set_row(&mut self, row: f32);
    fn set_column(&mut self, column: f32);

    fn emit(&mut self, cell: GridCell) {
        self.set_row(cell.row as f32);
        self.set_column(cell.column as f32);
    }
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn set_row(&mut self, row: f32) {
        (**self).set_row(row);
    }

    fn set_column(&mut self, column: f32) {
        (**self).set_column(column);
    }

    fn emit(&mut self, cell: GridCell) {
        (**self).emit(cell);
    }
}

/// Records every emitted cell, in order. Only `emit` records whole cells;
/// `set_row` starts a cell that a following `set_column` completes.
#[cfg(test)]
impl FrameSink for Vec<GridCell> {
    fn set_row(&mut self, row: f32) {
        self.push(GridCell::new(row as u32, 0));
    }

    fn set_column(&mut self, column: f32) {
        if let Some(cell) = self.last_mut() {
            cell.column = column as u32;
        }
    }

    fn emit(&mut self, cell: GridCell) {
        self.push(cell);
    }
}

/// The current row/column pair as the atlas material reads it.
///
/// With the `bevy` feature this is a component; a shader binding can copy the
/// two values into its current-row and current-column properties.
#[cfg_attr(feature = "bevy", derive(bevy_ecs::prelude::Component))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtlasFrame {
    pub row: f32,
    pub column: f32,
}

impl AtlasFrame {
    pub fn cell(&self) -> GridCell {
        GridCell::new(self.row as u32, self.column as u32)
    }
}

impl FrameSink for AtlasFrame {
    fn set_row(&mut self, row: f32) {
        self.row = row;
    }

    fn set_column(&mut self, column: f32) {
        self.column = column;
    }
}
