use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::MAX_WAGERS;
use crate::error::RouletteError;
use crate::state::table_pda;
use crate::wager::{compute_payout, max_payout, validate_batch, Wager};

use super::{DrawRequest, DrawRequestState, RouletteAccount};

/// Table is a singleton account that holds every lamport the game owns.
///
/// Funds are split three ways: `bankroll` is free house money, `escrowed` is
/// the stake of every pending request and `reserved` is house money set aside
/// to cover the worst case of every pending request. Their sum never exceeds
/// the lamports the table account holds above its rent-exempt minimum.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Table {
    /// The authority allowed to rotate the oracle.
    pub admin: Pubkey,

    /// The designated randomness source. Only this key may resolve draws.
    pub oracle: Pubkey,

    /// Free house lamports available to back new requests.
    pub bankroll: u64,

    /// Lamports escrowed by pending requests.
    pub escrowed: u64,

    /// House lamports reserved against pending requests.
    pub reserved: u64,

    /// Slots a request must stay pending before it can be refunded.
    pub refund_timeout_slots: u64,

    /// Requests currently pending.
    pub pending_requests: u64,

    /// Requests settled by a draw.
    pub settled_requests: u64,

    /// Requests refunded after the timeout.
    pub refunded_requests: u64,

    /// Total lamports wagered.
    pub total_wagered: u64,

    /// Total lamports paid out on settlement.
    pub total_paid: u64,
}

/// The outcome of a successful settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub request_id: u64,
    pub drawn_number: u8,
    pub payout: u64,
}

impl Table {
    pub fn pda() -> (Pubkey, u8) {
        table_pda()
    }

    /// Every lamport the table owes to someone.
    pub fn liabilities(&self) -> Result<u64, RouletteError> {
        self.bankroll
            .checked_add(self.escrowed)
            .and_then(|x| x.checked_add(self.reserved))
            .ok_or(RouletteError::ArithmeticOverflow)
    }

    /// Fails if the table's books exceed the lamports it actually holds.
    pub fn assert_solvent(&self, held: u64) -> Result<(), RouletteError> {
        if self.liabilities()? > held {
            return Err(RouletteError::InvariantViolation);
        }
        Ok(())
    }

    /// Add lamports to the bankroll.
    pub fn fund(&mut self, amount: u64) -> Result<u64, RouletteError> {
        if amount == 0 {
            return Err(RouletteError::InvalidAmount);
        }
        self.bankroll = self
            .bankroll
            .checked_add(amount)
            .ok_or(RouletteError::ArithmeticOverflow)?;
        Ok(self.bankroll)
    }

    /// Accept a wager batch into an unused request record.
    ///
    /// The batch must be well formed and exactly funded by `payment`. The
    /// house reserves whatever the batch could win beyond its own stake.
    /// Returns the reserved amount. Nothing is mutated on failure.
    pub fn open_request(
        &mut self,
        request: &mut DrawRequest,
        request_id: u64,
        owner: Pubkey,
        batch: &[Wager],
        payment: u64,
        slot: u64,
    ) -> Result<u64, RouletteError> {
        if request.state() != DrawRequestState::Empty {
            return Err(RouletteError::DuplicateRequest);
        }
        if batch.is_empty() {
            return Err(RouletteError::EmptyBatch);
        }
        if batch.len() > MAX_WAGERS {
            return Err(RouletteError::TooManyWagers);
        }
        validate_batch(batch, payment)?;

        let reserve = max_payout(batch)?.saturating_sub(payment);
        if reserve > self.bankroll {
            return Err(RouletteError::InsufficientFunds);
        }

        let bankroll = self.bankroll - reserve;
        let reserved = checked_add(self.reserved, reserve)?;
        let escrowed = checked_add(self.escrowed, payment)?;
        let pending_requests = checked_add(self.pending_requests, 1)?;
        let total_wagered = checked_add(self.total_wagered, payment)?;

        request.open(request_id, owner, batch, payment, reserve, slot)?;
        self.bankroll = bankroll;
        self.reserved = reserved;
        self.escrowed = escrowed;
        self.pending_requests = pending_requests;
        self.total_wagered = total_wagered;
        Ok(reserve)
    }

    /// Rotate the randomness source. Only the table admin may do this.
    pub fn set_oracle(&mut self, caller: &Pubkey, oracle: Pubkey) -> Result<(), RouletteError> {
        if *caller != self.admin {
            return Err(RouletteError::Unauthorized);
        }
        self.oracle = oracle;
        Ok(())
    }

    /// Settle a pending request against a drawn number delivered by `caller`.
    ///
    /// Only the designated oracle may settle. The request is marked settled
    /// here; the caller transfers `Settlement::payout` to the owner
    /// afterwards. On any error the table and the request are left untouched
    /// and the request stays pending.
    pub fn settle_request(
        &mut self,
        caller: &Pubkey,
        request: &mut DrawRequest,
        drawn_number: u8,
        slot: u64,
    ) -> Result<Settlement, RouletteError> {
        if *caller != self.oracle {
            return Err(RouletteError::Unauthorized);
        }
        match request.state() {
            DrawRequestState::Pending => {}
            DrawRequestState::Empty => return Err(RouletteError::UnknownRequest),
            DrawRequestState::Settled | DrawRequestState::Refunded => {
                return Err(RouletteError::AlreadySettled)
            }
        }
        let payout = compute_payout(request.wagers(), drawn_number)?;

        // The request's stake and reserve fund the payout first.
        let pool = checked_add(request.escrow, request.reserve)?;
        let bankroll = if payout <= pool {
            checked_add(self.bankroll, pool - payout)?
        } else {
            self.bankroll
                .checked_sub(payout - pool)
                .ok_or(RouletteError::InsufficientFunds)?
        };
        let escrowed = checked_sub(self.escrowed, request.escrow)?;
        let reserved = checked_sub(self.reserved, request.reserve)?;
        let pending_requests = checked_sub(self.pending_requests, 1)?;
        let settled_requests = checked_add(self.settled_requests, 1)?;
        let total_paid = checked_add(self.total_paid, payout)?;

        request.mark_settled(drawn_number, payout, slot);
        self.bankroll = bankroll;
        self.escrowed = escrowed;
        self.reserved = reserved;
        self.pending_requests = pending_requests;
        self.settled_requests = settled_requests;
        self.total_paid = total_paid;

        Ok(Settlement {
            request_id: request.id,
            drawn_number,
            payout,
        })
    }

    /// Return the stake of a request the randomness source never answered.
    /// Returns the refunded amount.
    pub fn refund_request(&mut self, request: &mut DrawRequest, slot: u64) -> Result<u64, RouletteError> {
        match request.state() {
            DrawRequestState::Pending => {}
            DrawRequestState::Empty => return Err(RouletteError::UnknownRequest),
            DrawRequestState::Settled | DrawRequestState::Refunded => {
                return Err(RouletteError::AlreadySettled)
            }
        }
        if slot < request.refundable_at(self.refund_timeout_slots) {
            return Err(RouletteError::RefundTooEarly);
        }

        let bankroll = checked_add(self.bankroll, request.reserve)?;
        let escrowed = checked_sub(self.escrowed, request.escrow)?;
        let reserved = checked_sub(self.reserved, request.reserve)?;
        let pending_requests = checked_sub(self.pending_requests, 1)?;
        let refunded_requests = checked_add(self.refunded_requests, 1)?;

        request.mark_refunded(slot);
        self.bankroll = bankroll;
        self.escrowed = escrowed;
        self.reserved = reserved;
        self.pending_requests = pending_requests;
        self.refunded_requests = refunded_requests;
        Ok(request.escrow)
    }
}

fn checked_add(a: u64, b: u64) -> Result<u64, RouletteError> {
    a.checked_add(b).ok_or(RouletteError::ArithmeticOverflow)
}

// Books running below a request's own share mean the ledger is corrupt.
fn checked_sub(a: u64, b: u64) -> Result<u64, RouletteError> {
    a.checked_sub(b).ok_or(RouletteError::InvariantViolation)
}

account!(RouletteAccount, Table);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE_SOL;
    use crate::multiplier::WagerKind;

    const TIMEOUT: u64 = 100;
    const ADMIN: Pubkey = Pubkey::new_from_array([1; 32]);
    const ORACLE: Pubkey = Pubkey::new_from_array([2; 32]);

    /// A table with `bankroll` lamports of house money, and the lamports it holds.
    fn funded_table(bankroll: u64) -> (Table, u64) {
        let mut table = Table::zeroed();
        table.admin = ADMIN;
        table.oracle = ORACLE;
        table.refund_timeout_slots = TIMEOUT;
        table.fund(bankroll).unwrap();
        (table, bankroll)
    }

    fn even_and_street() -> Vec<Wager> {
        vec![
            Wager::new(WagerKind::Parity, 0, ONE_SOL),
            Wager::new(WagerKind::Street, 1, ONE_SOL),
        ]
    }

    fn submit(table: &mut Table, held: &mut u64, id: u64, batch: &[Wager], payment: u64) -> DrawRequest {
        let mut request = DrawRequest::zeroed();
        table
            .open_request(&mut request, id, Pubkey::new_unique(), batch, payment, 10)
            .unwrap();
        *held += payment;
        table.assert_solvent(*held).unwrap();
        request
    }

    #[test]
    fn test_submit_escrows_and_reserves() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let request = submit(&mut table, &mut held, 1, &even_and_street(), 2 * ONE_SOL);

        assert!(request.is_pending());
        assert_eq!(request.escrow, 2 * ONE_SOL);
        // Worst case (draw 2) pays 14 against a stake of 2.
        assert_eq!(request.reserve, 12 * ONE_SOL);
        assert_eq!(table.escrowed, 2 * ONE_SOL);
        assert_eq!(table.reserved, 12 * ONE_SOL);
        assert_eq!(table.bankroll, 88 * ONE_SOL);
        assert_eq!(table.pending_requests, 1);
        assert_eq!(table.liabilities().unwrap(), held);
    }

    #[test]
    fn test_amount_mismatch_creates_no_escrow() {
        let (mut table, _) = funded_table(100 * ONE_SOL);
        let before = table;
        let mut request = DrawRequest::zeroed();

        let err = table
            .open_request(&mut request, 1, Pubkey::new_unique(), &even_and_street(), 5 * ONE_SOL, 10)
            .unwrap_err();
        assert_eq!(err, RouletteError::AmountMismatch);
        assert_eq!(table, before);
        assert_eq!(request.state(), DrawRequestState::Empty);
    }

    #[test]
    fn test_empty_and_oversized_batches() {
        let (mut table, _) = funded_table(100 * ONE_SOL);
        let mut request = DrawRequest::zeroed();
        assert_eq!(
            table.open_request(&mut request, 1, Pubkey::new_unique(), &[], 0, 10),
            Err(RouletteError::EmptyBatch)
        );

        let batch = vec![Wager::new(WagerKind::Color, 0, 1); MAX_WAGERS + 1];
        assert_eq!(
            table.open_request(&mut request, 1, Pubkey::new_unique(), &batch, batch.len() as u64, 10),
            Err(RouletteError::TooManyWagers)
        );
    }

    #[test]
    fn test_duplicate_request_rejected() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 7, &even_and_street(), 2 * ONE_SOL);
        let before = table;

        let err = table
            .open_request(&mut request, 7, Pubkey::new_unique(), &even_and_street(), 2 * ONE_SOL, 11)
            .unwrap_err();
        assert_eq!(err, RouletteError::DuplicateRequest);
        assert_eq!(table, before);
    }

    #[test]
    fn test_insufficient_bankroll_for_reserve() {
        let (mut table, _) = funded_table(ONE_SOL);
        let before = table;
        let mut request = DrawRequest::zeroed();
        let batch = [Wager::new(WagerKind::Straight, 17, ONE_SOL)];

        let err = table
            .open_request(&mut request, 1, Pubkey::new_unique(), &batch, ONE_SOL, 10)
            .unwrap_err();
        assert_eq!(err, RouletteError::InsufficientFunds);
        assert_eq!(table, before);
    }

    #[test]
    fn test_settle_pays_and_releases() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 100, &even_and_street(), 2 * ONE_SOL);

        let settlement = table.settle_request(&ORACLE, &mut request, 2, 20).unwrap();
        assert_eq!(
            settlement,
            Settlement { request_id: 100, drawn_number: 2, payout: 14 * ONE_SOL }
        );
        held -= settlement.payout;

        assert_eq!(request.state(), DrawRequestState::Settled);
        assert_eq!(request.payout, 14 * ONE_SOL);
        assert_eq!(request.drawn_number, 2);
        assert_eq!(table.escrowed, 0);
        assert_eq!(table.reserved, 0);
        assert_eq!(table.bankroll, 88 * ONE_SOL);
        assert_eq!(table.total_paid, 14 * ONE_SOL);
        assert_eq!(table.liabilities().unwrap(), held);
    }

    #[test]
    fn test_losing_draw_grows_bankroll() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 1, &even_and_street(), 2 * ONE_SOL);

        let settlement = table.settle_request(&ORACLE, &mut request, 5, 20).unwrap();
        assert_eq!(settlement.payout, 0);
        assert_eq!(table.bankroll, 102 * ONE_SOL);
        assert_eq!(table.liabilities().unwrap(), held);
    }

    #[test]
    fn test_second_resolve_is_already_settled() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 100, &even_and_street(), 2 * ONE_SOL);

        table.settle_request(&ORACLE, &mut request, 2, 20).unwrap();
        let (table_after, request_after) = (table, request);

        let err = table.settle_request(&ORACLE, &mut request, 2, 21).unwrap_err();
        assert_eq!(err, RouletteError::AlreadySettled);
        assert_eq!(table, table_after);
        assert_eq!(request, request_after);
    }

    #[test]
    fn test_invalid_draw_leaves_request_pending() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 1, &even_and_street(), 2 * ONE_SOL);
        let before = (table, request);

        let err = table.settle_request(&ORACLE, &mut request, 37, 20).unwrap_err();
        assert_eq!(err, RouletteError::InvalidDraw);
        assert_eq!((table, request), before);
        assert!(request.is_pending());
    }

    #[test]
    fn test_requests_settle_in_any_order() {
        let (mut table, mut held) = funded_table(1_000 * ONE_SOL);
        let mut a = submit(&mut table, &mut held, 1, &even_and_street(), 2 * ONE_SOL);
        let mut b = submit(&mut table, &mut held, 2, &[Wager::new(WagerKind::Straight, 0, ONE_SOL)], ONE_SOL);
        assert_eq!(table.pending_requests, 2);

        let paid_b = table.settle_request(&ORACLE, &mut b, 0, 20).unwrap().payout;
        assert_eq!(paid_b, 36 * ONE_SOL);
        held -= paid_b;
        assert!(a.is_pending());
        table.assert_solvent(held).unwrap();

        let paid_a = table.settle_request(&ORACLE, &mut a, 6, 21).unwrap().payout;
        assert_eq!(paid_a, 2 * ONE_SOL);
        held -= paid_a;

        assert_eq!(table.settled_requests, 2);
        assert_eq!(table.pending_requests, 0);
        assert_eq!(table.escrowed, 0);
        assert_eq!(table.reserved, 0);
        assert_eq!(table.liabilities().unwrap(), held);
    }

    #[test]
    fn test_payout_beyond_pool_needs_bankroll() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 1, &[Wager::new(WagerKind::Straight, 9, ONE_SOL)], ONE_SOL);
        // Simulate an under-reserved request and an empty bankroll.
        request.reserve = 0;
        table.reserved = 0;
        table.bankroll = 0;
        let before = (table, request);

        let err = table.settle_request(&ORACLE, &mut request, 9, 20).unwrap_err();
        assert_eq!(err, RouletteError::InsufficientFunds);
        assert_eq!((table, request), before);
        assert!(request.is_pending());
    }

    #[test]
    fn test_refund_after_timeout() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 1, &even_and_street(), 2 * ONE_SOL);

        assert_eq!(table.refund_request(&mut request, 10 + TIMEOUT - 1), Err(RouletteError::RefundTooEarly));
        assert!(request.is_pending());

        let refund = table.refund_request(&mut request, 10 + TIMEOUT).unwrap();
        assert_eq!(refund, 2 * ONE_SOL);
        held -= refund;
        assert_eq!(request.state(), DrawRequestState::Refunded);
        assert_eq!(table.bankroll, 100 * ONE_SOL);
        assert_eq!(table.refunded_requests, 1);
        assert_eq!(table.liabilities().unwrap(), held);
    }

    #[test]
    fn test_refund_and_settle_are_exclusive() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);

        let mut refunded = submit(&mut table, &mut held, 1, &even_and_street(), 2 * ONE_SOL);
        table.refund_request(&mut refunded, 10 + TIMEOUT).unwrap();
        assert_eq!(table.settle_request(&ORACLE, &mut refunded, 2, 500), Err(RouletteError::AlreadySettled));

        let mut settled = submit(&mut table, &mut held, 2, &even_and_street(), 2 * ONE_SOL);
        table.settle_request(&ORACLE, &mut settled, 2, 20).unwrap();
        assert_eq!(table.refund_request(&mut settled, 10 + TIMEOUT), Err(RouletteError::AlreadySettled));
    }

    #[test]
    fn test_fund_rejects_zero() {
        let (mut table, _) = funded_table(ONE_SOL);
        assert_eq!(table.fund(0), Err(RouletteError::InvalidAmount));
        assert_eq!(table.fund(ONE_SOL), Ok(2 * ONE_SOL));
    }

    #[test]
    fn test_assert_solvent() {
        let (table, held) = funded_table(ONE_SOL);
        assert!(table.assert_solvent(held).is_ok());
        assert_eq!(table.assert_solvent(held - 1), Err(RouletteError::InvariantViolation));
    }

    #[test]
    fn test_only_oracle_can_settle() {
        let (mut table, mut held) = funded_table(100 * ONE_SOL);
        let mut request = submit(&mut table, &mut held, 1, &even_and_street(), 2 * ONE_SOL);
        let (table_before, request_before) = (table, request);

        for forged in [Pubkey::new_unique(), ADMIN, request.owner] {
            assert_eq!(
                table.settle_request(&forged, &mut request, 2, 20),
                Err(RouletteError::Unauthorized)
            );
        }
        assert_eq!(table, table_before);
        assert_eq!(request, request_before);
        assert!(request.is_pending());

        assert!(table.settle_request(&ORACLE, &mut request, 2, 20).is_ok());
    }

    #[test]
    fn test_unopened_request_is_unknown() {
        let (mut table, _) = funded_table(100 * ONE_SOL);
        let mut request = DrawRequest::zeroed();

        assert_eq!(
            table.settle_request(&ORACLE, &mut request, 2, 20),
            Err(RouletteError::UnknownRequest)
        );
        assert_eq!(
            table.refund_request(&mut request, 10 + TIMEOUT),
            Err(RouletteError::UnknownRequest)
        );
        assert_eq!(request.state(), DrawRequestState::Empty);
    }

    #[test]
    fn test_set_oracle_requires_admin() {
        let (mut table, _) = funded_table(ONE_SOL);
        let rotated = Pubkey::new_unique();

        assert_eq!(table.set_oracle(&ORACLE, rotated), Err(RouletteError::Unauthorized));
        assert_eq!(table.set_oracle(&Pubkey::new_unique(), rotated), Err(RouletteError::Unauthorized));
        assert_eq!(table.oracle, ORACLE);

        table.set_oracle(&ADMIN, rotated).unwrap();
        assert_eq!(table.oracle, rotated);

        // The previous oracle can no longer settle.
        let mut held = ONE_SOL;
        let mut request = submit(&mut table, &mut held, 1, &[Wager::new(WagerKind::Color, 1, 1)], 1);
        assert_eq!(
            table.settle_request(&ORACLE, &mut request, 1, 20),
            Err(RouletteError::Unauthorized)
        );
        assert!(table.settle_request(&rotated, &mut request, 1, 20).is_ok());
    }
}
