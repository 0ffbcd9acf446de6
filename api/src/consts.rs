use const_crypto::ed25519;
use solana_program::{pubkey, pubkey::Pubkey};

/// The authority allowed to initialize the program.
pub const ADMIN_ADDRESS: Pubkey = pubkey!("fPggVjM776TGL4qWCTQjEJhmTM82gpgZVaMMsb8Z8N1");

/// One SOL, denominated in lamports.
pub const ONE_SOL: u64 = solana_program::native_token::LAMPORTS_PER_SOL;

/// The number of slots in one minute.
pub const ONE_MINUTE_SLOTS: u64 = 150;

/// The number of slots in one hour.
pub const ONE_HOUR_SLOTS: u64 = 60 * ONE_MINUTE_SLOTS;

/// The number of slots in one day.
pub const ONE_DAY_SLOTS: u64 = 24 * ONE_HOUR_SLOTS;

/// How long a draw request may stay pending before anyone can refund it,
/// used when the table is initialized without an explicit timeout.
pub const DEFAULT_REFUND_TIMEOUT_SLOTS: u64 = ONE_DAY_SLOTS;

/// The seed of the table account PDA.
pub const TABLE: &[u8] = b"table";

/// The seed of the draw request account PDA.
pub const DRAW_REQUEST: &[u8] = b"draw_request";

/// Program id for const pda derivations
const PROGRAM_ID: [u8; 32] = unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

/// The address of the table account.
pub const TABLE_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[TABLE], &PROGRAM_ID).0);

/// The bump of the table account.
pub const TABLE_BUMP: u8 = ed25519::derive_program_address(&[TABLE], &PROGRAM_ID).1;

// ============================================================================
// WHEEL LAYOUT
// ============================================================================

/// The highest number on a single-zero wheel.
pub const MAX_NUMBER: u8 = 36;

/// Numbers per row of the betting grid.
pub const ROW_WIDTH: u8 = 3;

/// Red numbers on a single-zero wheel. Every other non-zero number is black.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

// ============================================================================
// PAYOUT MULTIPLES (stake included)
// ============================================================================

/// Red/black, even/odd, low/high (1:1).
pub const EVEN_MONEY_MULTIPLE: u64 = 2;

/// Column and dozen (2:1).
pub const COLUMN_DOZEN_MULTIPLE: u64 = 3;

/// Straight up (35:1).
pub const STRAIGHT_MULTIPLE: u64 = 36;

/// Horizontal or vertical split (17:1).
pub const SPLIT_MULTIPLE: u64 = 18;

/// Street (11:1).
pub const STREET_MULTIPLE: u64 = 12;

/// Corner (8:1).
pub const CORNER_MULTIPLE: u64 = 9;

/// Line (5:1).
pub const LINE_MULTIPLE: u64 = 6;

/// Basket on 0, 1, 2, 3 (6:1).
pub const BASKET_MULTIPLE: u64 = 7;

/// The largest multiple any single wager can pay.
pub const MAX_MULTIPLE: u64 = STRAIGHT_MULTIPLE;

// ============================================================================
// BATCH LIMITS
// ============================================================================

/// Maximum wagers in one draw request.
/// Must be a multiple of 4 or `DrawRequest` gains trailing padding.
pub const MAX_WAGERS: usize = 64;
