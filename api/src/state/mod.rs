mod draw_request;
mod table;

pub use draw_request::*;
pub use table::*;

use crate::consts::*;

use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum RouletteAccount {
    Table = 100,
    DrawRequest = 101,
}

pub fn table_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TABLE], &crate::ID)
}

pub fn draw_request_pda(request_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DRAW_REQUEST, &request_id.to_le_bytes()], &crate::ID)
}
