use roulette_api::prelude::*;
use solana_program::clock::Clock;
use solana_program::log::sol_log;
use solana_program::sysvar::Sysvar;
use steel::*;

use crate::utils::{assert_table_solvent, load_draw_request};

/// Returns the stake of a request the oracle never answered.
/// Permissionless once the refund timeout has passed; the stake always goes
/// to the request owner.
pub fn process_refund_request(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = RefundRequest::try_from_bytes(data)?;
    let request_id = u64::from_le_bytes(args.request_id);

    sol_log(&format!("RefundRequest: request_id={}", request_id).as_str());

    // Load accounts.
    let [signer_info, table_info, draw_request_info, owner_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    let table = table_info
        .is_writable()?
        .has_seeds(&[TABLE], &roulette_api::ID)?
        .as_account_mut::<Table>(&roulette_api::ID)?;
    let request = load_draw_request(draw_request_info, request_id)?;
    owner_info.is_writable()?.has_address(&request.owner)?;

    // Mark refunded before any lamports move.
    let clock = Clock::get()?;
    let refund = table.refund_request(request, clock.slot)?;

    table_info.send(refund, owner_info);
    assert_table_solvent(table, table_info)?;

    RequestRefundedEvent {
        disc: RouletteEvent::RequestRefunded as u64,
        request_id,
        refund,
    }
    .log();

    sol_log(&format!("Refunded {} lamports to {}", refund, owner_info.key).as_str());

    Ok(())
}
