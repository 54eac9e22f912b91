//! Compass directions and square neighbors on the 8x8 grid.
//!
//! This is the only place that knows where the board ends. Everything else
//! reaches an edge by asking for a neighbor and getting `None` back.

use crate::square::Square;

/// One of the eight compass directions, seen from White's side.
///
/// North is towards rank 8, East is towards the h-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Queen and king directions.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(file, rank)` step for one move in this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// The eight knight jumps, each spelled as three single steps: two along
/// one axis, then one across it.
pub const KNIGHT_JUMPS: [[Direction; 3]; 8] = {
    use Direction::*;
    [
        [North, North, West],
        [North, North, East],
        [South, South, West],
        [South, South, East],
        [West, West, North],
        [West, West, South],
        [East, East, North],
        [East, East, South],
    ]
};

impl Square {
    /// The adjacent square in `direction`, or `None` past the edge.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Option<Square> {
        let (df, dr) = direction.delta();
        let file = self.file().offset(df)?;
        let rank = self.rank().offset(dr)?;
        Some(Square::new(file, rank))
    }

    /// Follow a chain of single steps, failing if any step leaves the board.
    pub fn walk(self, steps: &[Direction]) -> Option<Square> {
        steps
            .iter()
            .try_fold(self, |sq, &direction| sq.neighbor(direction))
    }

    /// Squares along `direction`, nearest first, up to the edge.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Square> {
        std::iter::successors(self.neighbor(direction), move |sq| sq.neighbor(direction))
    }
}
