use crate::error::BoardError;
use crate::types::{Cell, Color, Position};

pub const MIN_SIZE: usize = 4;
pub const MAX_SIZE: usize = 16;
/// (d_row, d_col) offsets shared by legality, flipping and stability scans.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Square Reversi board stored as one row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the standard opening: white on the top-left and bottom-right
    /// centre squares, black on the other two.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(size)?;
        let mid = size / 2;
        board.set(mid - 1, mid - 1, Cell::White);
        board.set(mid - 1, mid, Cell::Black);
        board.set(mid, mid - 1, Cell::Black);
        board.set(mid, mid, Cell::White);
        Ok(board)
    }

    pub fn empty(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Builds a board from nested rows using 0=empty, 1=black, 2=white.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(BoardError::NotSquare {
                    rows: size,
                    cols: row.len(),
                    row: row_idx,
                });
            }
            for (col_idx, &value) in row.iter().enumerate() {
                cells.push(decode_cell(row_idx * size + col_idx, value)?);
            }
        }

        Ok(Self { size, cells })
    }

    /// Builds a board from a flat row-major buffer; the side length is inferred.
    pub fn from_cells(values: &[u8]) -> Result<Self, BoardError> {
        let size = values.len().isqrt();
        if size * size != values.len() {
            return Err(BoardError::NotPerfectSquare(values.len()));
        }
        check_size(size)?;

        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &value)| decode_cell(index, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Returns every legal placement for `color` in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col).is_empty() && self.brackets_any(row, col, color) {
                    moves.push(Position::new(col as u8, row as u8));
                }
            }
        }
        moves
    }

    pub fn is_legal(&self, pos: Position, color: Color) -> bool {
        let (row, col) = (pos.row as usize, pos.col as usize);
        self.contains(pos) && self.get(row, col).is_empty() && self.brackets_any(row, col, color)
    }

    /// Number of discs `color` would flip by playing at `pos`. Read-only.
    pub fn count_flipped(&self, pos: Position, color: Color) -> usize {
        self.collect_flips(pos, color).len()
    }

    /// Places one disc on this (owned) board and flips captured discs.
    /// Returns the flip count. Returns 0 and leaves the board unchanged when
    /// the placement captures nothing.
    pub fn place(&mut self, pos: Position, color: Color) -> usize {
        if !self.contains(pos) || !self.get(pos.row as usize, pos.col as usize).is_empty() {
            return 0;
        }

        let flips = self.collect_flips(pos, color);
        if flips.is_empty() {
            return 0;
        }

        let disc = Cell::from(color);
        self.set(pos.row as usize, pos.col as usize, disc);
        for &idx in &flips {
            self.cells[idx] = disc;
        }

        flips.len()
    }

    /// Returns a copy of this board with `color` played at `pos`.
    pub fn apply_move(&self, pos: Position, color: Color) -> Board {
        let mut next = self.clone();
        next.place(pos, color);
        next
    }

    pub fn count(&self, color: Color) -> usize {
        let disc = Cell::from(color);
        self.cells.iter().filter(|&&cell| cell == disc).count()
    }

    /// Returns `(black_count, white_count)`.
    pub fn disc_counts(&self) -> (usize, usize) {
        (self.count(Color::Black), self.count(Color::White))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Converts the board to a flat buffer where 0=empty, 1=black, 2=white.
    pub fn to_cells(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| cell as u8).collect()
    }

    /// Corner squares as (column, row): top-left, top-right, bottom-left,
    /// bottom-right.
    pub fn corners(&self) -> [Position; 4] {
        let last = (self.size - 1) as u8;
        [
            Position::new(0, 0),
            Position::new(last, 0),
            Position::new(0, last),
            Position::new(last, last),
        ]
    }

    pub fn is_corner(&self, pos: Position) -> bool {
        self.corners().contains(&pos)
    }

    pub(crate) fn in_bounds(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    fn contains(&self, pos: Position) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    fn brackets_any(&self, row: usize, col: usize, color: Color) -> bool {
        let me = Cell::from(color);
        let opp = Cell::from(color.opponent());

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            let mut has_opponent = false;

            while self.in_bounds(r, c) {
                let cell = self.get(r as usize, c as usize);
                if cell == opp {
                    has_opponent = true;
                } else {
                    return cell == me && has_opponent;
                }
                r += dr;
                c += dc;
            }
            false
        })
    }

    /// Indices of opponent discs bracketed by a placement at `pos`, each
    /// direction scanned independently on the unmodified board.
    fn collect_flips(&self, pos: Position, color: Color) -> Vec<usize> {
        let me = Cell::from(color);
        let opp = Cell::from(color.opponent());
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = pos.row as i32 + dr;
            let mut c = pos.col as i32 + dc;
            let mut line = Vec::new();

            while self.in_bounds(r, c) && self.get(r as usize, c as usize) == opp {
                line.push(r as usize * self.size + c as usize);
                r += dr;
                c += dc;
            }

            if self.in_bounds(r, c) && self.get(r as usize, c as usize) == me {
                flips.extend(line);
            }
        }

        flips
    }

    /// Parses a text diagram: one string per row, `B`/`W`/`.` per cell.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: &[&str]) -> Self {
        let rows: Vec<Vec<u8>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| match ch {
                        'B' => 1,
                        'W' => 2,
                        _ => 0,
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows).expect("diagram must describe a valid board")
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size % 2 != 0 || !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(BoardError::UnsupportedSize(size));
    }
    Ok(())
}

fn decode_cell(index: usize, value: u8) -> Result<Cell, BoardError> {
    Cell::try_from(value).map_err(|value| BoardError::InvalidCell { index, value })
}
