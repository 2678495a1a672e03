//! Rectangular character grids and the points/directions used to walk them

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

use anyhow::{anyhow, bail};

/// A signed `(row, col)` position; may lie outside any grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours, clockwise from up
    pub fn neighbors(self) -> [Point; 4] {
        Direction::ALL.map(|d| self + d.delta())
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.row * rhs, self.col * rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from up
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(-1, 0),
            Direction::Right => Point::new(0, 1),
            Direction::Down => Point::new(1, 0),
            Direction::Left => Point::new(0, -1),
        }
    }

    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    /// Index into [`Direction::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse one of `^>v<`
    pub fn from_arrow(c: u8) -> Option<Direction> {
        match c {
            b'^' => Some(Direction::Up),
            b'>' => Some(Direction::Right),
            b'v' => Some(Direction::Down),
            b'<' => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A dense row-major grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl Grid<u8> {
    /// Parse a block of equally long lines into a byte grid.
    ///
    /// Trailing blank lines are ignored; ragged rows are rejected.
    pub fn parse(input: &str) -> anyhow::Result<Grid<u8>> {
        let mut width = None;
        let mut cells = Vec::with_capacity(input.len());
        let mut height = 0;

        for (row, line) in input.trim_end().lines().enumerate() {
            let line = line.trim_end_matches('\r');
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    bail!("(line {}) expected {} columns, found {}", row + 1, w, line.len())
                }
                Some(_) => {}
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        let width = width.filter(|&w| w > 0).ok_or_else(|| anyhow!("empty grid"))?;
        Ok(Grid {
            width,
            height,
            cells,
        })
    }
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// A grid of the same shape with every cell set to `fill`
    pub fn same_shape<U: Clone>(&self, fill: U) -> Grid<U> {
        Grid::new(self.width, self.height, fill)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.height && (p.col as usize) < self.width
    }

    fn offset(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row as usize * self.width + p.col as usize)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        let i = self.offset(p)?;
        Some(&self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        let i = self.offset(p)?;
        Some(&mut self.cells[i])
    }

    /// Every point in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let width = self.width as i64;
        let height = self.height as i64;
        (0..height).flat_map(move |row| (0..width).map(move |col| Point::new(row, col)))
    }

    /// Every `(point, cell)` pair in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.points().zip(self.cells.iter())
    }

    /// First point whose cell satisfies `pred`
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.iter().find(|(_, c)| pred(c)).map(|(p, _)| p)
    }

    /// The neighbours of `p` that lie inside the grid
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors().into_iter().filter(move |&n| self.contains(n))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width)
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        match self.offset(p) {
            Some(i) => &self.cells[i],
            None => panic!("point {p} outside {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        match self.offset(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("point {p} outside {}x{} grid", self.width, self.height),
        }
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
