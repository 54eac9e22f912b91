//! Castling rights: two independent flags per side.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;

/// Which way to castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// One side's castling permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideRights {
    pub const NONE: SideRights = SideRights {
        kingside: false,
        queenside: false,
    };
    pub const BOTH: SideRights = SideRights {
        kingside: true,
        queenside: true,
    };

    #[inline]
    pub const fn get(self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.kingside,
            CastleSide::QueenSide => self.queenside,
        }
    }
}

/// Castling rights for both colors.
///
/// The flags say whether castling is still permitted, not whether it is
/// possible right now: occupancy and attacks are checked at move generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    white: SideRights,
    black: SideRights,
}

impl CastleRights {
    pub const NONE: CastleRights = CastleRights {
        white: SideRights::NONE,
        black: SideRights::NONE,
    };
    pub const ALL: CastleRights = CastleRights {
        white: SideRights::BOTH,
        black: SideRights::BOTH,
    };

    pub const fn new(white: SideRights, black: SideRights) -> CastleRights {
        CastleRights { white, black }
    }

    /// The flags for one color.
    #[inline]
    pub const fn of(self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.of(color).get(side)
    }

    pub fn is_empty(self) -> bool {
        self == CastleRights::NONE
    }

    fn side_mut(&mut self, color: Color) -> &mut SideRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Grant one right.
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        let rights = self.side_mut(color);
        match side {
            CastleSide::KingSide => rights.kingside = true,
            CastleSide::QueenSide => rights.queenside = true,
        }
    }

    /// Withdraw one right.
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        let rights = self.side_mut(color);
        match side {
            CastleSide::KingSide => rights.kingside = false,
            CastleSide::QueenSide => rights.queenside = false,
        }
    }

    /// Withdraw both rights of one color.
    pub fn revoke_all(&mut self, color: Color) {
        *self.side_mut(color) = SideRights::NONE;
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`, ...).
    pub fn from_fen(field: &str) -> Result<CastleRights, FenError> {
        let mut rights = CastleRights::NONE;
        if field == "-" {
            return Ok(rights);
        }
        for c in field.chars() {
            match c {
                'K' => rights.grant(Color::White, CastleSide::KingSide),
                'Q' => rights.grant(Color::White, CastleSide::QueenSide),
                'k' => rights.grant(Color::Black, CastleSide::KingSide),
                'q' => rights.grant(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            }
        }
        Ok(rights)
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let flags = [
            (self.white.kingside, 'K'),
            (self.white.queenside, 'Q'),
            (self.black.kingside, 'k'),
            (self.black.queenside, 'q'),
        ];
        for (set, letter) in flags {
            if set {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
