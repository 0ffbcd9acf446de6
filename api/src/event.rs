use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum RouletteEvent {
    WagersSubmitted = 0,
    DrawSettled = 1,
    RequestRefunded = 2,
    BalanceChanged = 3,
}

/// Emitted when a batch is accepted and its stake escrowed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct WagersSubmittedEvent {
    /// The event discriminator.
    pub disc: u64,

    /// The caller supplied request id.
    pub request_id: u64,

    /// The owner of the request.
    pub owner: Pubkey,

    /// Lamports escrowed for the batch.
    pub stake: u64,

    /// House lamports reserved against the batch's worst case.
    pub reserve: u64,

    /// Number of wagers in the batch.
    pub wager_count: u64,
}

/// The settlement record of a draw request.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawSettledEvent {
    /// The event discriminator.
    pub disc: u64,

    /// The settled request id.
    pub request_id: u64,

    /// The number drawn by the randomness source.
    pub drawn_number: u64,

    /// Lamports paid to the request owner.
    pub payout: u64,
}

/// Emitted when an abandoned request returns its stake.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RequestRefundedEvent {
    /// The event discriminator.
    pub disc: u64,

    /// The refunded request id.
    pub request_id: u64,

    /// Lamports returned to the request owner.
    pub refund: u64,
}

/// Emitted when the house bankroll is topped up.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BalanceChangedEvent {
    /// The event discriminator.
    pub disc: u64,

    /// The bankroll after the change.
    pub bankroll: u64,
}

event!(WagersSubmittedEvent);
event!(DrawSettledEvent);
event!(RequestRefundedEvent);
event!(BalanceChangedEvent);
