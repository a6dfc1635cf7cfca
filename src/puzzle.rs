use crate::{Move, State};
use rand::{seq::SliceRandom, Rng};
use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

/// N×N sliding tile puzzle. `0` is the blank; solved when the tiles read `1..n²-1` in
/// row-major order with the blank last.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Puzzle {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Puzzle {
    /// Returns the solved puzzle of the given side length.
    pub fn new(size: usize) -> Self {
        let count = size * size;
        let mut tiles: Vec<u32> = (1..count as u32).collect();
        tiles.push(0);
        Self {
            size,
            tiles,
            blank: count - 1,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// Slides a tile into the blank. Returns `false`, leaving the board untouched, if
    /// the blank would leave the board.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        let (dx, dy) = movement.as_offset();
        let (x, y) = (self.blank / self.size, self.blank % self.size);

        let new_x = x as isize + dx;
        let new_y = y as isize + dy;

        if new_x >= 0 && new_x < self.size as isize && new_y >= 0 && new_y < self.size as isize {
            let target = new_x as usize * self.size + new_y as usize;
            self.tiles.swap(self.blank, target);
            self.blank = target;
            true
        } else {
            false
        }
    }

    pub fn try_move(&self, dir: Move) -> Option<Self> {
        let mut new_puzzle = self.clone();
        if new_puzzle.apply_move(dir) {
            Some(new_puzzle)
        } else {
            None
        }
    }

    /// Applies `len` random legal moves, never undoing the previous one, and returns the
    /// moves made. The result is solvable in at most `len` moves.
    pub fn scramble<R: Rng + ?Sized>(&mut self, len: usize, rng: &mut R) -> Vec<Move> {
        let mut history: Vec<Move> = Vec::with_capacity(len);
        for _ in 0..len {
            let last = history.last().copied();
            let candidates: Vec<Move> = Move::ALL
                .into_iter()
                .filter(|mv| Some(mv.opposite()) != last)
                .filter(|&mv| self.try_move(mv).is_some())
                .collect();
            match candidates.choose(rng) {
                Some(&mv) => {
                    self.apply_move(mv);
                    history.push(mv);
                }
                None => break,
            }
        }
        log::trace!("scrambled with {:?}", history);
        history
    }

    pub fn is_solvable(&self) -> bool {
        let inversions = Self::count_inversions(&self.tiles);
        let empty_row = self.blank / self.size;

        if self.size % 2 == 1 {
            // odd width: the blank's row never changes inversion parity
            inversions % 2 == 0
        } else {
            (inversions + empty_row) % 2 == 1
        }
    }

    fn count_inversions(tiles: &[u32]) -> usize {
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    pub fn is_solved(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .zip(1..)
                .all(|(&tile, expected)| tile == expected)
    }
}

impl State for Puzzle {
    fn apply(&self, mv: Move) -> Option<Self> {
        self.try_move(mv)
    }

    fn is_goal(&self) -> bool {
        self.is_solved()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:width$} ", val, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Parsing

#[derive(Debug, Error)]
pub enum ParsePuzzleError {
    #[error("invalid tile number")]
    Tile(#[from] ParseIntError),
    #[error("board must have at least 2 rows")]
    TooSmall,
    #[error("row {row} has {len} tiles, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("board must contain each of 0..{0} exactly once")]
    NotPermutation(usize),
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    /// Rows are separated by `/` or newlines, tiles by whitespace, e.g. `"1 2/3 0"`.
    fn from_str(s: &str) -> Result<Self, ParsePuzzleError> {
        let rows = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = rows.len();
        if size < 2 {
            return Err(ParsePuzzleError::TooSmall);
        }
        if let Some((row, tiles)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(ParsePuzzleError::NotSquare {
                row,
                len: tiles.len(),
                size,
            });
        }

        let tiles: Vec<u32> = rows.into_iter().flatten().collect();
        let mut sorted = tiles.clone();
        sorted.sort_unstable();
        if !sorted.iter().copied().eq(0..tiles.len() as u32) {
            return Err(ParsePuzzleError::NotPermutation(tiles.len()));
        }

        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(ParsePuzzleError::NotPermutation(tiles.len()))?;
        Ok(Self { size, tiles, blank })
    }
}

//////////////////////////////////////////////////////////////////////////////////////////
