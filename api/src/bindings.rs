//! TypeScript bindings for frontend and oracle clients.
//!
//! Enable with the `ts-bindings` feature flag.

#[cfg(feature = "ts-bindings")]
mod ts_types {
    use ts_rs::TS;

    /// TypeScript export for WagerKind
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/")]
    #[allow(dead_code)]
    pub enum WagerKindTS {
        // Outside wagers
        Color = 0,
        Parity = 1,
        Range = 2,
        Column = 3,
        Dozen = 4,

        // Inside wagers
        Straight = 100,
        HorizontalSplit = 101,
        VerticalSplit = 102,
        Street = 103,
        Corner = 104,
        Line = 105,
        Basket = 106,
    }

    /// TypeScript export for a single wager
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/")]
    #[allow(dead_code)]
    pub struct WagerTS {
        pub kind: u8,
        /// Color: 0 black, 1 red. Parity: 0 even, 1 odd. Range: 0 low, 1 high.
        /// Column: number mod 3, so 0 is the 3-6-9 column. Dozen: 0, 1, 2.
        /// Inside bets: the base table number.
        pub parameter: u8,
        /// Stake in lamports
        pub amount: u64,
    }

    /// TypeScript export for Table state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/")]
    #[allow(dead_code)]
    pub struct TableTS {
        pub admin: String, // Pubkey as string
        pub oracle: String,
        pub bankroll: u64,
        pub escrowed: u64,
        pub reserved: u64,
        pub refund_timeout_slots: u64,
        pub pending_requests: u64,
        pub settled_requests: u64,
        pub refunded_requests: u64,
        pub total_wagered: u64,
        pub total_paid: u64,
    }

    /// TypeScript export for DrawRequest state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/")]
    #[allow(dead_code)]
    pub struct DrawRequestTS {
        pub id: u64,
        pub owner: String,
        pub escrow: u64,
        pub reserve: u64,
        pub payout: u64,
        pub requested_slot: u64,
        pub resolved_slot: u64,
        /// 0 = empty, 1 = pending, 2 = settled, 3 = refunded
        pub state: u8,
        pub drawn_number: u8,
        pub wagers: Vec<WagerTS>,
    }

    /// Payout multiples, stake included
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/src/generated/")]
    #[allow(dead_code)]
    pub struct RouletteMultiples {
        pub even_money: u64,
        pub column_dozen: u64,
        pub straight: u64,
        pub split: u64,
        pub street: u64,
        pub corner: u64,
        pub line: u64,
        pub basket: u64,
    }
}
