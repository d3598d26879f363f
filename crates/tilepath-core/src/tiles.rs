//! Tiles and the validated row-major [`TileGrid`] container.

use crate::error::GridError;
use crate::geom::Point;

/// Anything that can report whether its grid cell is impassable.
pub trait GridTile {
    /// Whether the tile blocks movement.
    fn is_blocked(&self) -> bool;
}

impl GridTile for bool {
    #[inline]
    fn is_blocked(&self) -> bool {
        *self
    }
}

/// A plain tile record as supplied by a host application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked: bool,
}

impl Tile {
    /// A passable tile.
    pub const fn open() -> Self {
        Self {
            name: None,
            blocked: false,
        }
    }

    /// An impassable tile.
    pub const fn wall() -> Self {
        Self {
            name: None,
            blocked: true,
        }
    }

    /// A tile carrying a host-side name.
    pub fn named(name: impl Into<String>, blocked: bool) -> Self {
        Self {
            name: Some(name.into()),
            blocked,
        }
    }
}

impl GridTile for Tile {
    #[inline]
    fn is_blocked(&self) -> bool {
        self.blocked
    }
}

/// A rectangular grid of tiles stored in row-major order.
///
/// The tile count always equals `cols * rows`; [`TileGrid::new`] rejects
/// anything else so that neighbor computations never see a ragged last row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileGrid<T = Tile> {
    cols: usize,
    rows: usize,
    tiles: Vec<T>,
}

impl<T> TileGrid<T> {
    /// Build a grid from `tiles` laid out in rows of `cols`.
    pub fn new(cols: usize, rows: usize, tiles: Vec<T>) -> Result<Self, GridError> {
        let expected = cols
            .checked_mul(rows)
            .filter(|_| i32::try_from(cols).is_ok() && i32::try_from(rows).is_ok())
            .ok_or(GridError::Overflow { cols, rows })?;
        if tiles.len() != expected {
            return Err(GridError::SizeMismatch {
                cols,
                rows,
                len: tiles.len(),
                expected,
            });
        }
        Ok(Self { cols, rows, tiles })
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tiles (`cols * rows`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    /// The tile at flat index `i`.
    pub fn tile(&self, i: usize) -> Option<&T> {
        self.tiles.get(i)
    }

    /// Coordinates of flat index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        if self.cols == 0 {
            return Point::ZERO;
        }
        Point::new((i % self.cols) as i32, (i / self.cols) as i32)
    }

    /// Flat index of `p`, or `None` if it lies outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y * self.cols + x)
    }
}

impl<T: GridTile> TileGrid<T> {
    /// Whether the tile at `i` is blocked. Indices outside the grid count as
    /// blocked.
    pub fn is_blocked(&self, i: usize) -> bool {
        self.tiles.get(i).is_none_or(|t| t.is_blocked())
    }

    /// Number of passable tiles.
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_blocked()).count()
    }
}

impl TileGrid<Tile> {
    /// Parse an ASCII map where `#` is a blocked tile and `.` an open one.
    ///
    /// Every line must have the same width. Leading and trailing blank lines
    /// are ignored.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => &[][..],
        };

        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut tiles = Vec::with_capacity(cols * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    width,
                    expected: cols,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::wall(),
                    '.' => Tile::open(),
                    _ => {
                        return Err(GridError::InvalidTile {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                tiles.push(tile);
            }
        }
        Self::new(cols, lines.len(), tiles)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for TileGrid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw<U> {
            cols: usize,
            rows: usize,
            tiles: Vec<U>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        TileGrid::new(raw.cols, raw.rows, raw.tiles).map_err(serde::de::Error::custom)
    }
}
