//! Multiplier table for single-zero roulette.
//!
//! The betting grid is row-major with three numbers per row (1-2-3, 4-5-6, ...,
//! 34-35-36). Zero sits above the first row. Adjacency for inside bets is pure
//! offset arithmetic: `+1` is the neighbour in the same row, `+3` the number
//! directly below.

use crate::consts::*;
use crate::error::RouletteError;
use steel::*;

/// Every wager shape the table accepts.
/// Outside bets use tags 0-4, inside bets 100-106.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum WagerKind {
    // Outside bets
    Color = 0,
    Parity = 1,
    Range = 2,
    Column = 3,
    Dozen = 4,

    // Inside bets
    Straight = 100,
    HorizontalSplit = 101,
    VerticalSplit = 102,
    Street = 103,
    Corner = 104,
    Line = 105,
    Basket = 106,
}

impl WagerKind {
    pub const ALL: [Self; 12] = [
        Self::Color,
        Self::Parity,
        Self::Range,
        Self::Column,
        Self::Dozen,
        Self::Straight,
        Self::HorizontalSplit,
        Self::VerticalSplit,
        Self::Street,
        Self::Corner,
        Self::Line,
        Self::Basket,
    ];

    /// Parse a raw kind tag.
    pub fn from_tag(tag: u8) -> Result<Self, RouletteError> {
        Self::try_from(tag).map_err(|_| RouletteError::InvalidWagerShape)
    }

    /// The fixed multiple paid on a win, stake included.
    pub fn multiple(self) -> u64 {
        match self {
            Self::Color | Self::Parity | Self::Range => EVEN_MONEY_MULTIPLE,
            Self::Column | Self::Dozen => COLUMN_DOZEN_MULTIPLE,
            Self::Straight => STRAIGHT_MULTIPLE,
            Self::HorizontalSplit | Self::VerticalSplit => SPLIT_MULTIPLE,
            Self::Street => STREET_MULTIPLE,
            Self::Corner => CORNER_MULTIPLE,
            Self::Line => LINE_MULTIPLE,
            Self::Basket => BASKET_MULTIPLE,
        }
    }

    /// Whether this is a broad, zero-excluding outside bet.
    pub fn is_outside(self) -> bool {
        (self as u8) < 100
    }

    /// Check that `parameter` names a shape lying entirely on the grid.
    pub fn validate_parameter(self, parameter: u8) -> Result<(), RouletteError> {
        let n = parameter;
        let valid = match self {
            Self::Color | Self::Parity | Self::Range => n <= 1,
            Self::Column | Self::Dozen => n <= 2,
            Self::Straight => n <= MAX_NUMBER,
            // n and n + 1 must share a row.
            Self::HorizontalSplit => n >= 1 && n < MAX_NUMBER && column_of(n) != 0,
            Self::VerticalSplit => n >= 1 && n <= MAX_NUMBER - ROW_WIDTH,
            Self::Street => is_row_start(n) && n <= MAX_NUMBER - 2,
            Self::Corner => n >= 1 && column_of(n) != 0 && n <= MAX_NUMBER - ROW_WIDTH - 1,
            Self::Line => is_row_start(n) && n <= MAX_NUMBER - 2 * ROW_WIDTH + 1,
            Self::Basket => n == 0,
        };
        if valid {
            Ok(())
        } else {
            Err(RouletteError::InvalidWagerShape)
        }
    }

    /// Whether a wager of this kind on `parameter` covers `number`.
    /// The parameter must already be validated.
    pub fn covers(self, number: u8, parameter: u8) -> bool {
        match self {
            Self::Color => wins_color(number, parameter),
            Self::Parity => wins_parity(number, parameter),
            Self::Range => wins_range(number, parameter),
            Self::Column => wins_column(number, parameter),
            Self::Dozen => wins_dozen(number, parameter),
            Self::Straight => number == parameter,
            Self::HorizontalSplit => offset_hit(number, parameter, &[0, 1]),
            Self::VerticalSplit => offset_hit(number, parameter, &[0, ROW_WIDTH]),
            Self::Street => offset_hit(number, parameter, &[0, 1, 2]),
            Self::Corner => offset_hit(number, parameter, &[0, 1, ROW_WIDTH, ROW_WIDTH + 1]),
            Self::Line => offset_hit(number, parameter, &[0, 1, 2, 3, 4, 5]),
            Self::Basket => number <= ROW_WIDTH,
        }
    }

    /// Resolve a wager against a drawn number: 0 on a loss, the fixed multiple on a win.
    pub fn resolve(self, number: u8, parameter: u8) -> Result<u64, RouletteError> {
        if number > MAX_NUMBER {
            return Err(RouletteError::InvalidDraw);
        }
        self.validate_parameter(parameter)?;
        if self.covers(number, parameter) {
            Ok(self.multiple())
        } else {
            Ok(0)
        }
    }
}

/// Payout multiple for a raw `(number, kind, parameter)` triple.
pub fn compute_multiple(number: u8, kind: u8, parameter: u8) -> Result<u64, RouletteError> {
    WagerKind::from_tag(kind)?.resolve(number, parameter)
}

/// Whether a non-zero number is red.
pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

/// Grid column by `number mod 3`: 1 for the 1-4-7 column, 2 for 2-5-8, 0 for 3-6-9.
pub fn column_of(number: u8) -> u8 {
    number % ROW_WIDTH
}

fn is_row_start(number: u8) -> bool {
    number >= 1 && column_of(number) == 1
}

// 0 = black, 1 = red
fn wins_color(number: u8, parameter: u8) -> bool {
    number != 0 && is_red(number) == (parameter == 1)
}

// 0 = even, 1 = odd
fn wins_parity(number: u8, parameter: u8) -> bool {
    number != 0 && number % 2 == parameter
}

// 0 = 1-18, 1 = 19-36
fn wins_range(number: u8, parameter: u8) -> bool {
    number != 0 && (number - 1) / 18 == parameter
}

fn wins_column(number: u8, parameter: u8) -> bool {
    number != 0 && column_of(number) == parameter
}

// 0 = 1-12, 1 = 13-24, 2 = 25-36
fn wins_dozen(number: u8, parameter: u8) -> bool {
    number != 0 && (number - 1) / 12 == parameter
}

fn offset_hit(number: u8, base: u8, offsets: &[u8]) -> bool {
    offsets.iter().any(|offset| base + offset == number)
}
