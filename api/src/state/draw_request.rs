use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use steel::*;

use crate::consts::MAX_WAGERS;
use crate::error::RouletteError;
use crate::state::draw_request_pda;
use crate::wager::Wager;

use super::RouletteAccount;

/// Lifecycle of a draw request. Settled and Refunded are terminal.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum DrawRequestState {
    /// Allocated but not yet opened.
    Empty = 0,
    /// Stake escrowed, waiting for the randomness source.
    Pending = 1,
    /// Resolved by a draw and paid out.
    Settled = 2,
    /// Abandoned by the randomness source and refunded.
    Refunded = 3,
}

/// DrawRequest holds one escrowed wager batch until its draw arrives.
///
/// PDA: ["draw_request", request_id.to_le_bytes()]
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct DrawRequest {
    /// The caller supplied request id.
    pub id: u64,

    /// The wallet that placed the batch and receives the payout.
    pub owner: Pubkey,

    /// Lamports escrowed for the batch (sum of stakes).
    pub escrow: u64,

    /// House lamports reserved to cover the batch's worst case beyond its stake.
    pub reserve: u64,

    /// Lamports paid out on settlement.
    pub payout: u64,

    /// The slot the request was opened at.
    pub requested_slot: u64,

    /// The slot the request was settled or refunded at.
    pub resolved_slot: u64,

    /// The request state (see `DrawRequestState`).
    pub state: u8,

    /// The number drawn, valid once settled.
    pub drawn_number: u8,

    /// Number of populated entries in `wagers`.
    pub wager_count: u8,

    /// Padding for alignment.
    pub _padding: [u8; 5],

    /// The wager batch.
    #[serde(with = "BigArray")]
    pub wagers: [Wager; MAX_WAGERS],
}

impl DrawRequest {
    pub fn pda(&self) -> (Pubkey, u8) {
        draw_request_pda(self.id)
    }

    pub fn state(&self) -> DrawRequestState {
        DrawRequestState::try_from(self.state).unwrap_or(DrawRequestState::Empty)
    }

    pub fn is_pending(&self) -> bool {
        self.state() == DrawRequestState::Pending
    }

    /// The stored batch.
    pub fn wagers(&self) -> &[Wager] {
        let count = (self.wager_count as usize).min(MAX_WAGERS);
        &self.wagers[..count]
    }

    /// The first slot at which an abandoned request may be refunded.
    pub fn refundable_at(&self, timeout_slots: u64) -> u64 {
        self.requested_slot.saturating_add(timeout_slots)
    }

    /// Record a freshly accepted batch. Fails if the record was ever used.
    pub(crate) fn open(
        &mut self,
        id: u64,
        owner: Pubkey,
        batch: &[Wager],
        escrow: u64,
        reserve: u64,
        slot: u64,
    ) -> Result<(), RouletteError> {
        if self.state() != DrawRequestState::Empty {
            return Err(RouletteError::DuplicateRequest);
        }
        if batch.len() > MAX_WAGERS {
            return Err(RouletteError::TooManyWagers);
        }
        self.id = id;
        self.owner = owner;
        self.escrow = escrow;
        self.reserve = reserve;
        self.payout = 0;
        self.requested_slot = slot;
        self.resolved_slot = 0;
        self.drawn_number = 0;
        self.wager_count = batch.len() as u8;
        self.wagers = [Wager::default(); MAX_WAGERS];
        self.wagers[..batch.len()].copy_from_slice(batch);
        self.state = DrawRequestState::Pending.into();
        Ok(())
    }

    pub(crate) fn mark_settled(&mut self, drawn_number: u8, payout: u64, slot: u64) {
        self.state = DrawRequestState::Settled.into();
        self.drawn_number = drawn_number;
        self.payout = payout;
        self.resolved_slot = slot;
    }

    pub(crate) fn mark_refunded(&mut self, slot: u64) {
        self.state = DrawRequestState::Refunded.into();
        self.resolved_slot = slot;
    }
}

account!(RouletteAccount, DrawRequest);
