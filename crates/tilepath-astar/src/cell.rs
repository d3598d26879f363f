use tilepath_core::Point;

/// One tile of the A* grid: static position and blocked flag, plus the
/// search-scoped cost accumulators and backpointer.
///
/// Backpointers are cell indices, so a cell never holds a reference into
/// the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub(crate) index: usize,
    pub(crate) pos: Point,
    pub(crate) blocked: bool,
    pub(crate) g_cost: i32,
    pub(crate) h_cost: i32,
    pub(crate) f_cost: i32,
    pub(crate) parent: Option<usize>,
}

impl GridCell {
    pub(crate) fn new(index: usize, pos: Point, blocked: bool) -> Self {
        Self {
            index,
            pos,
            blocked,
            g_cost: 0,
            h_cost: 0,
            f_cost: 0,
            parent: None,
        }
    }

    /// Clear the search-scoped fields.
    pub(crate) fn reset(&mut self) {
        self.g_cost = 0;
        self.h_cost = 0;
        self.f_cost = 0;
        self.parent = None;
    }

    /// Flat row-major index of this cell.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Column.
    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    /// Row.
    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Manhattan distance from the last search's start.
    #[inline]
    pub fn g_cost(&self) -> i32 {
        self.g_cost
    }

    /// Manhattan distance to the last search's goal.
    #[inline]
    pub fn h_cost(&self) -> i32 {
        self.h_cost
    }

    /// `g_cost + h_cost`; the open-list priority.
    #[inline]
    pub fn f_cost(&self) -> i32 {
        self.f_cost
    }

    /// Index of the cell this one was discovered from.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}
