/// Cached neighbor computation over flat, row-major tile indices.
///
/// Neighbors are produced in a fixed order: left, right, up, down, and
/// with diagonals enabled, up-left, up-right, down-left, down-right. Search
/// tie-breaking depends on this order. Left and right candidates are
/// suppressed at column boundaries so that no neighbor wraps across rows.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the neighbors of `index` in a grid of `len` cells laid out in
    /// rows of `cols`, including diagonals when `diagonal` is set. An `index`
    /// outside the grid has no neighbors.
    pub fn of(&mut self, cols: usize, len: usize, index: usize, diagonal: bool) -> &[usize] {
        self.buf.clear();
        if cols == 0 || index >= len {
            return &self.buf;
        }

        let has_left = index % cols != 0;
        let has_right = index % cols != cols - 1;
        let has_up = index >= cols;
        let has_down = index + cols < len;

        if has_left {
            self.buf.push(index - 1);
        }
        if has_right && index + 1 < len {
            self.buf.push(index + 1);
        }
        if has_up {
            self.buf.push(index - cols);
        }
        if has_down {
            self.buf.push(index + cols);
        }

        if diagonal {
            if has_up && has_left {
                self.buf.push(index - cols - 1);
            }
            if has_up && has_right {
                self.buf.push(index - cols + 1);
            }
            if has_down && has_left {
                self.buf.push(index + cols - 1);
            }
            if has_down && has_right && index + cols + 1 < len {
                self.buf.push(index + cols + 1);
            }
        }

        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x3 grid:
    // 0 1 2
    // 3 4 5
    // 6 7 8

    #[test]
    fn center_cardinal_order() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(3, 9, 4, false), &[3, 5, 1, 7]);
    }

    #[test]
    fn center_diagonal_order() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(3, 9, 4, true), &[3, 5, 1, 7, 0, 2, 6, 8]);
    }

    #[test]
    fn corners_do_not_wrap() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(3, 9, 0, true), &[1, 3, 4]);
        assert_eq!(nb.of(3, 9, 2, true), &[1, 5, 4]);
        assert_eq!(nb.of(3, 9, 6, true), &[7, 3, 4]);
        assert_eq!(nb.of(3, 9, 8, true), &[7, 5, 4]);
    }

    #[test]
    fn row_edges_do_not_wrap() {
        let mut nb = Neighbors::new();
        // index 3 is column 0: index 2 is on the previous row
        assert!(!nb.of(3, 9, 3, false).contains(&2));
        // index 5 is the last column: index 6 is on the next row
        assert!(!nb.of(3, 9, 5, false).contains(&6));
    }

    #[test]
    fn single_column() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(1, 3, 1, true), &[0, 2]);
    }

    #[test]
    fn out_of_grid_is_empty() {
        let mut nb = Neighbors::new();
        assert!(nb.of(3, 9, 9, true).is_empty());
        assert!(nb.of(0, 0, 0, true).is_empty());
    }
}
