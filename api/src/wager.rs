//! Wager batches: funding validation and payout aggregation.

use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::MAX_NUMBER;
use crate::error::RouletteError;
use crate::multiplier::WagerKind;

/// A single wager as it appears in instruction data and in a draw request.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Wager {
    /// The wager kind tag (see `WagerKind`).
    pub kind: u8,

    /// The kind-specific parameter (color, column, base number, ...).
    pub parameter: u8,

    /// The stake in lamports.
    pub amount: [u8; 8],
}

impl Wager {
    pub fn new(kind: WagerKind, parameter: u8, amount: u64) -> Self {
        Self {
            kind: kind.into(),
            parameter,
            amount: amount.to_le_bytes(),
        }
    }

    pub fn amount(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }

    pub fn kind(&self) -> Result<WagerKind, RouletteError> {
        WagerKind::from_tag(self.kind)
    }

    /// Reject unknown kinds and off-grid parameters.
    pub fn validate(&self) -> Result<(), RouletteError> {
        self.kind()?.validate_parameter(self.parameter)
    }

    /// The multiple this wager earns on `number`.
    pub fn multiple(&self, number: u8) -> Result<u64, RouletteError> {
        self.kind()?.resolve(number, self.parameter)
    }

    /// Lamports owed for this wager on `number`, stake included.
    pub fn payout(&self, number: u8) -> Result<u64, RouletteError> {
        self.amount()
            .checked_mul(self.multiple(number)?)
            .ok_or(RouletteError::ArithmeticOverflow)
    }
}

/// Sum of all stakes in the batch.
pub fn batch_total(batch: &[Wager]) -> Result<u64, RouletteError> {
    batch.iter().try_fold(0u64, |total, wager| {
        total
            .checked_add(wager.amount())
            .ok_or(RouletteError::ArithmeticOverflow)
    })
}

/// Accept the batch only if every wager is well formed and the stakes sum to
/// exactly `supplied`.
pub fn validate_batch(batch: &[Wager], supplied: u64) -> Result<(), RouletteError> {
    for wager in batch {
        wager.validate()?;
    }
    let total = batch_total(batch).map_err(|_| RouletteError::AmountMismatch)?;
    if total != supplied {
        return Err(RouletteError::AmountMismatch);
    }
    Ok(())
}

/// Total lamports owed for the batch on `drawn`.
pub fn compute_payout(batch: &[Wager], drawn: u8) -> Result<u64, RouletteError> {
    if drawn > MAX_NUMBER {
        return Err(RouletteError::InvalidDraw);
    }
    batch.iter().try_fold(0u64, |total, wager| {
        total
            .checked_add(wager.payout(drawn)?)
            .ok_or(RouletteError::ArithmeticOverflow)
    })
}

/// The largest payout the batch can earn over every possible draw.
pub fn max_payout(batch: &[Wager]) -> Result<u64, RouletteError> {
    (0..=MAX_NUMBER).try_fold(0u64, |max, drawn| {
        Ok(max.max(compute_payout(batch, drawn)?))
    })
}
