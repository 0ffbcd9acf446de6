use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum RouletteInstruction {
    // Admin
    Initialize = 0,
    Fund = 1,
    SetOracle = 2,

    // Player
    SubmitWagers = 3,
    RefundRequest = 5,

    // Oracle
    ResolveDraw = 4,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    pub oracle: Pubkey,
    pub initial_funding: [u8; 8],
    pub refund_timeout_slots: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Fund {
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetOracle {
    pub oracle: Pubkey,
}

/// Header of a wager submission. The wagers follow as a packed `Wager` array.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SubmitWagers {
    pub request_id: [u8; 8],
    pub payment: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ResolveDraw {
    pub request_id: [u8; 8],
    pub drawn_number: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RefundRequest {
    pub request_id: [u8; 8],
}

instruction!(RouletteInstruction, Initialize);
instruction!(RouletteInstruction, Fund);
instruction!(RouletteInstruction, SetOracle);
instruction!(RouletteInstruction, SubmitWagers);
instruction!(RouletteInstruction, ResolveDraw);
instruction!(RouletteInstruction, RefundRequest);
