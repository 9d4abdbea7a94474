use std::fmt;

use super::LayoutPlan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridMode {
    /// Constant column count.
    Fixed,
    /// Columns follow the width; a short last row stays in the grid.
    Adaptive,
    /// Columns follow the width; leftovers move to their own centered row.
    #[default]
    Wrapped,
}

impl GridMode {
    pub fn next(self) -> Self {
        match self {
            GridMode::Fixed => GridMode::Adaptive,
            GridMode::Adaptive => GridMode::Wrapped,
            GridMode::Wrapped => GridMode::Fixed,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Some(GridMode::Fixed),
            "adaptive" => Some(GridMode::Adaptive),
            "wrapped" => Some(GridMode::Wrapped),
            _ => None,
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GridMode::Fixed => "fixed",
            GridMode::Adaptive => "adaptive",
            GridMode::Wrapped => "wrapped",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row {
    pub start: usize,
    pub len: usize,
    pub centered: bool,
}

impl Row {
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Rows of buttons in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangement {
    pub columns: usize,
    pub rows: Vec<Row>,
}

pub fn arrange(mode: GridMode, plan: LayoutPlan, item_count: usize) -> Arrangement {
    let columns = plan.items_per_row.max(1);
    let primary = match mode {
        GridMode::Wrapped => plan.primary_count(item_count),
        GridMode::Fixed | GridMode::Adaptive => item_count,
    };

    let mut rows = Vec::new();
    let mut start = 0;
    while start < primary {
        let len = columns.min(primary - start);
        rows.push(Row {
            start,
            len,
            centered: false,
        });
        start += len;
    }
    if start < item_count {
        rows.push(Row {
            start,
            len: item_count - start,
            centered: true,
        });
    }

    Arrangement { columns, rows }
}

impl Arrangement {
    /// Row and column of `index`, if it is laid out.
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.indices().contains(&index))
            .map(|(r, row)| (r, index - row.start))
    }

    /// Item at `column` of `row`, clamped to the row's last item.
    pub fn index_at(&self, row: usize, column: usize) -> Option<usize> {
        let row = self.rows.get(row)?;
        if row.len == 0 {
            return None;
        }
        Some(row.start + column.min(row.len - 1))
    }
}
