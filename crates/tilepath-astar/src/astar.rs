use std::time::Duration;

use tilepath_core::{GridError, GridTile, Neighbors, Point, Stopwatch, TileGrid};

use crate::cell::GridCell;
use crate::distance::manhattan;

/// Open/closed-list A* over a fixed tile layout.
///
/// Costs are assigned once per search, before expansion: every cell gets
/// `g_cost` = Manhattan distance from the start, `h_cost` = Manhattan
/// distance to the goal, and `f_cost = g_cost + h_cost`. Costs are not
/// re-relaxed while the search runs; a cell's backpointer is set the first
/// time it is discovered. The open list is scanned linearly for the lowest
/// `f_cost`, first-found on ties.
///
/// On a grid without obstacles this yields paths of exactly Manhattan
/// length. Around obstacles the returned path always exists when one does,
/// but it is not guaranteed to be the shortest.
#[derive(Debug, Clone)]
pub struct GridAstar {
    cols: usize,
    rows: usize,
    cells: Vec<GridCell>,
    open: Vec<usize>,
    in_open: Vec<bool>,
    closed: Vec<bool>,
    closed_list: Vec<usize>,
    start: Option<usize>,
    end: Option<usize>,
    goal_reached: bool,
    path: Vec<GridCell>,
    duration: Duration,
}

impl GridAstar {
    /// Build one cell per tile of `grid`, in row-major order.
    pub fn new<T: GridTile>(grid: &TileGrid<T>) -> Self {
        let cells: Vec<GridCell> = grid
            .tiles()
            .iter()
            .enumerate()
            .map(|(i, tile)| GridCell::new(i, grid.point(i), tile.is_blocked()))
            .collect();
        let len = cells.len();
        Self {
            cols: grid.cols(),
            rows: grid.rows(),
            cells,
            open: Vec::new(),
            in_open: vec![false; len],
            closed: vec![false; len],
            closed_list: Vec::new(),
            start: None,
            end: None,
            goal_reached: false,
            path: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Find a path from cell `start` to cell `end`.
    ///
    /// The path includes both endpoints; it is `[start]` when the two are
    /// equal. An empty path means `end` was not reached: it is blocked, out
    /// of the grid, or walled off. Only the start cell may be blocked.
    pub fn find_path(&mut self, start: usize, end: usize, diagonal: bool) -> Vec<GridCell> {
        let sw = Stopwatch::start("find_path");
        self.begin(start, end);
        let found = self.search(start, end, diagonal);
        self.duration = sw.stop();

        log::debug!(
            "find_path {start} -> {end} (diagonal={diagonal}): found={found}, closed={}, path={}",
            self.closed_list.len(),
            self.path.len()
        );
        self.path.clone()
    }

    /// [`find_path`](Self::find_path) between grid coordinates. Coordinates
    /// outside the grid yield an empty path.
    pub fn find_path_between(&mut self, from: Point, to: Point, diagonal: bool) -> Vec<GridCell> {
        match (self.index_of(from), self.index_of(to)) {
            (Some(start), Some(end)) => self.find_path(start, end, diagonal),
            _ => {
                self.begin(usize::MAX, usize::MAX);
                Vec::new()
            }
        }
    }

    /// Reset bookkeeping and per-cell costs for a new search. The endpoints
    /// are recorded only when both lie in the grid.
    fn begin(&mut self, start: usize, end: usize) {
        for cell in &mut self.cells {
            cell.reset();
        }
        self.open.clear();
        self.in_open.fill(false);
        self.closed.fill(false);
        self.closed_list.clear();
        self.path.clear();
        self.goal_reached = false;
        let in_grid = start < self.cells.len() && end < self.cells.len();
        self.start = in_grid.then_some(start);
        self.end = in_grid.then_some(end);
    }

    fn search(&mut self, start: usize, end: usize, diagonal: bool) -> bool {
        let len = self.cells.len();
        if start >= len || end >= len {
            return false;
        }
        self.set_cost(start, end);

        let mut nb = Neighbors::new();
        self.open.push(start);
        self.in_open[start] = true;

        while !self.open.is_empty() {
            let mut best = 0;
            for (i, &c) in self.open.iter().enumerate() {
                if self.cells[c].f_cost < self.cells[self.open[best]].f_cost {
                    best = i;
                }
            }
            let current = self.open.remove(best);
            self.in_open[current] = false;
            self.closed[current] = true;
            self.closed_list.push(current);

            if current == end {
                self.path = self.trace_back(end);
                self.goal_reached = true;
                return true;
            }

            log::trace!(
                "expand {} f={}",
                self.cells[current].pos,
                self.cells[current].f_cost
            );
            for &n in nb.of(self.cols, len, current, diagonal) {
                if self.closed[n] || self.in_open[n] || self.cells[n].blocked {
                    continue;
                }
                self.cells[n].parent = Some(current);
                self.open.push(n);
                self.in_open[n] = true;
            }
        }
        false
    }

    /// Assign the static costs for a search and clear every backpointer.
    fn set_cost(&mut self, start: usize, end: usize) {
        let (sp, ep) = (self.cells[start].pos, self.cells[end].pos);
        for cell in &mut self.cells {
            cell.g_cost = manhattan(cell.pos, sp);
            cell.h_cost = manhattan(cell.pos, ep);
            cell.f_cost = cell.g_cost + cell.h_cost;
            cell.parent = None;
        }
    }

    fn trace_back(&self, end: usize) -> Vec<GridCell> {
        let mut path = Vec::new();
        let mut ci = Some(end);
        while let Some(i) = ci {
            path.push(self.cells[i]);
            ci = self.cells[i].parent;
        }
        path.reverse();
        path
    }

    /// Zero every cell's search state and forget the last search.
    pub fn reset_grid(&mut self) {
        self.begin(usize::MAX, usize::MAX);
    }

    // -----------------------------------------------------------------------
    // Grid introspection
    // -----------------------------------------------------------------------

    /// In-grid neighbors of cell `index`, blocked ones included.
    pub fn neighbors(&self, index: usize, diagonal: bool) -> Result<Vec<&GridCell>, GridError> {
        self.cell_by_index(index)?;
        let mut nb = Neighbors::new();
        Ok(nb
            .of(self.cols, self.cells.len(), index, diagonal)
            .iter()
            .map(|&n| &self.cells[n])
            .collect())
    }

    pub fn cell_by_index(&self, index: usize) -> Result<&GridCell, GridError> {
        self.cells.get(index).ok_or(GridError::IndexOutOfBounds {
            index,
            len: self.cells.len(),
        })
    }

    /// The cell at column `x`, row `y`.
    pub fn cell_by_coord(&self, x: i32, y: i32) -> Result<&GridCell, GridError> {
        let point = Point::new(x, y);
        let index = self.index_of(point).ok_or(GridError::PointOutOfBounds {
            point,
            cols: self.cols,
            rows: self.rows,
        })?;
        Ok(&self.cells[index])
    }

    fn index_of(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        (x < self.cols && y < self.rows).then(|| y * self.cols + x)
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Start cell of the last search, if it was in the grid.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Goal cell of the last search, if it was in the grid.
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Whether the last search reached its goal.
    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    /// Cells still waiting in the open list after the last search.
    pub fn open_list(&self) -> &[usize] {
        &self.open
    }

    /// Cells finalized by the last search, in expansion order.
    pub fn closed_list(&self) -> &[usize] {
        &self.closed_list
    }

    /// Path found by the last search.
    pub fn path(&self) -> &[GridCell] {
        &self.path
    }

    /// Wall-clock duration of the last search.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn astar(map: &str) -> GridAstar {
        GridAstar::new(&TileGrid::from_ascii(map).unwrap())
    }

    fn points(path: &[GridCell]) -> Vec<Point> {
        path.iter().map(GridCell::pos).collect()
    }

    const OPEN3: &str = "...\n...\n...";

    #[test]
    fn open_grid_cardinal() {
        let mut a = astar(OPEN3);
        let path = a.find_path(0, 8, false);
        assert_eq!(
            points(&path),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert!(a.goal_reached());
        assert_eq!(a.path().len(), 5);
    }

    #[test]
    fn open_grid_diagonal() {
        let mut a = astar(OPEN3);
        let path = a.find_path(0, 8, true);
        assert_eq!(
            points(&path),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn start_is_end() {
        let mut a = astar(OPEN3);
        let path = a.find_path(4, 4, false);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].index(), 4);
        assert!(a.goal_reached());
    }

    #[test]
    fn detours_around_walls() {
        let mut a = astar(".#.\n.#.\n...");
        let path: Vec<usize> = a.find_path(0, 2, false).iter().map(|c| c.index()).collect();
        assert_eq!(path, vec![0, 3, 6, 7, 8, 5, 2]);
    }

    #[test]
    fn center_blocked() {
        let mut a = astar("...\n.#.\n...");
        let path = a.find_path(0, 8, false);
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|c| !c.is_blocked()));
    }

    #[test]
    fn no_path() {
        let mut a = astar("...\n###\n...");
        assert!(a.find_path(0, 8, true).is_empty());
        assert!(!a.goal_reached());
        assert_eq!(a.closed_list(), &[0, 1, 2]);
        assert!(a.open_list().is_empty());
    }

    #[test]
    fn blocked_goal() {
        let mut a = astar("..#");
        assert!(a.find_path(0, 2, false).is_empty());
    }

    #[test]
    fn out_of_grid_endpoints() {
        let mut a = astar(OPEN3);
        assert!(a.find_path(0, 9, false).is_empty());
        assert_eq!((a.start(), a.end()), (None, None));
        assert!(!a.goal_reached());

        assert!(a.find_path(9, 0, false).is_empty());
        assert_eq!((a.start(), a.end()), (None, None));
        assert!(!a.goal_reached());

        assert!(
            a.find_path_between(Point::new(0, 0), Point::new(3, 0), false)
                .is_empty()
        );
        assert_eq!((a.start(), a.end()), (None, None));
    }

    #[test]
    fn rejected_search_clears_previous_costs() {
        let mut a = astar(OPEN3);
        a.find_path(0, 8, false);
        assert!(a.cells().iter().any(|c| c.f_cost() != 0));

        a.find_path(0, 9, false);
        assert!(a.cells().iter().all(|c| c.g_cost() == 0
            && c.h_cost() == 0
            && c.f_cost() == 0
            && c.parent().is_none()));
        assert!(a.path().is_empty());
        assert!(a.closed_list().is_empty());
    }

    #[test]
    fn path_between_points() {
        let mut a = astar(OPEN3);
        let path = a.find_path_between(Point::new(2, 0), Point::new(0, 2), false);
        assert_eq!(path.len(), 5);
        assert_eq!(path[0].pos(), Point::new(2, 0));
        assert_eq!(path[4].pos(), Point::new(0, 2));
    }

    #[test]
    fn costs_are_manhattan_from_endpoints() {
        let mut a = astar(OPEN3);
        a.find_path(0, 5, false);
        let c = a.cell_by_coord(1, 2).unwrap();
        assert_eq!(c.g_cost(), 3);
        assert_eq!(c.h_cost(), 2);
        assert_eq!(c.f_cost(), 5);
        assert_eq!(a.start(), Some(0));
        assert_eq!(a.end(), Some(5));
    }

    #[test]
    fn neighbors_include_blocked_cells() {
        let a = astar("...\n.#.\n...");
        let idx: Vec<usize> = a.neighbors(1, false).unwrap().iter().map(|c| c.index()).collect();
        assert_eq!(idx, vec![0, 2, 4]);
        assert!(a.neighbors(1, false).unwrap()[2].is_blocked());
    }

    #[test]
    fn last_row_has_no_down_neighbor() {
        let a = astar(OPEN3);
        let idx: Vec<usize> = a.neighbors(7, false).unwrap().iter().map(|c| c.index()).collect();
        assert_eq!(idx, vec![6, 8, 4]);
    }

    #[test]
    fn introspection_bounds() {
        let a = astar("....\n....");
        assert_eq!((a.cols(), a.rows()), (4, 2));
        assert_eq!(a.cell_by_index(5).unwrap().pos(), Point::new(1, 1));
        assert_eq!(a.cell_by_coord(3, 1).unwrap().index(), 7);
        assert_eq!(
            a.cell_by_index(8).unwrap_err(),
            GridError::IndexOutOfBounds { index: 8, len: 8 }
        );
        assert_eq!(
            a.cell_by_coord(4, 0).unwrap_err(),
            GridError::PointOutOfBounds {
                point: Point::new(4, 0),
                cols: 4,
                rows: 2
            }
        );
        assert!(a.cell_by_coord(0, -1).is_err());
        assert!(a.neighbors(8, true).is_err());
    }

    #[test]
    fn reset_clears_search_state() {
        let mut a = astar(OPEN3);
        a.find_path(0, 8, false);
        a.reset_grid();

        assert!(a.cells().iter().all(|c| c.g_cost() == 0
            && c.h_cost() == 0
            && c.f_cost() == 0
            && c.parent().is_none()));
        assert_eq!(a.start(), None);
        assert!(!a.goal_reached());
        assert!(a.closed_list().is_empty());
        assert!(a.path().is_empty());
    }

    #[test]
    fn repeated_searches_are_identical() {
        let mut a = astar("....\n.##.\n....");
        let first = a.find_path(0, 11, true);
        a.find_path(11, 0, false);
        let again = a.find_path(0, 11, true);
        a.reset_grid();
        let after_reset = a.find_path(0, 11, true);
        assert_eq!(first, again);
        assert_eq!(first, after_reset);
    }
}
