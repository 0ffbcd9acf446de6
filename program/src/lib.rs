mod fund_table;
mod initialize;
mod refund_request;
mod resolve_draw;
mod set_oracle;
mod submit_wagers;
mod utils;

use fund_table::*;
use initialize::*;
use refund_request::*;
use resolve_draw::*;
use set_oracle::*;
use submit_wagers::*;

use roulette_api::instruction::*;
use steel::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&roulette_api::ID, program_id, data)?;

    match ix {
        // Admin
        RouletteInstruction::Initialize => process_initialize(accounts, data)?,
        RouletteInstruction::Fund => process_fund_table(accounts, data)?,
        RouletteInstruction::SetOracle => process_set_oracle(accounts, data)?,

        // Player
        RouletteInstruction::SubmitWagers => process_submit_wagers(accounts, data)?,
        RouletteInstruction::RefundRequest => process_refund_request(accounts, data)?,

        // Oracle
        RouletteInstruction::ResolveDraw => process_resolve_draw(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
