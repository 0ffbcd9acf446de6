use steel::*;

/// Roulette program error codes
/// Range 1000-1999: Ledger errors
/// Range 2000-2999: Validation errors
/// Range 3000-3999: System errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum RouletteError {
    // Ledger Errors (1000-1999)
    #[error("Draw request has already been settled")]
    AlreadySettled = 1001,

    #[error("No draw request matches the request id")]
    UnknownRequest = 1002,

    #[error("Request id is already in use")]
    DuplicateRequest = 1003,

    #[error("Table balance insufficient for payout")]
    InsufficientFunds = 1004,

    #[error("Draw request cannot be refunded yet")]
    RefundTooEarly = 1005,

    // Validation Errors (2000-2999)
    #[error("Wager amounts do not add up to the payment")]
    AmountMismatch = 2001,

    #[error("Unknown wager kind or parameter out of range")]
    InvalidWagerShape = 2002,

    #[error("Drawn number outside 0-36")]
    InvalidDraw = 2003,

    #[error("Batch contains no wagers")]
    EmptyBatch = 2004,

    #[error("Batch contains too many wagers")]
    TooManyWagers = 2005,

    #[error("Signer is not authorized for this instruction")]
    Unauthorized = 2006,

    #[error("Invalid amount")]
    InvalidAmount = 2007,

    // System Errors (3000-3999)
    #[error("Arithmetic operation overflowed")]
    ArithmeticOverflow = 3001,

    #[error("Table balances exceed held lamports")]
    InvariantViolation = 3002,
}

error!(RouletteError);
