use roulette_api::prelude::*;
use solana_program::clock::Clock;
use solana_program::log::sol_log;
use solana_program::sysvar::Sysvar;
use steel::*;

use crate::utils::{assert_table_solvent, load_draw_request};

/// Settles a pending request with the number delivered by the oracle and
/// pays the owner.
pub fn process_resolve_draw(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = ResolveDraw::try_from_bytes(data)?;
    let request_id = u64::from_le_bytes(args.request_id);
    let drawn_number = args.drawn_number;

    sol_log(&format!("ResolveDraw: request_id={} drawn={}", request_id, drawn_number).as_str());

    // Load accounts.
    let [oracle_info, table_info, draw_request_info, owner_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    oracle_info.is_signer()?;
    let table = table_info
        .is_writable()?
        .has_seeds(&[TABLE], &roulette_api::ID)?
        .as_account_mut::<Table>(&roulette_api::ID)?;

    let request = load_draw_request(draw_request_info, request_id)?;
    owner_info.is_writable()?.has_address(&request.owner)?;

    // Only the designated oracle may settle. Mark settled before any lamports move.
    let clock = Clock::get()?;
    let settlement = table.settle_request(oracle_info.key, request, drawn_number, clock.slot)?;

    // Pay out.
    if settlement.payout > 0 {
        table_info.send(settlement.payout, owner_info);
    }
    assert_table_solvent(table, table_info)?;

    DrawSettledEvent {
        disc: RouletteEvent::DrawSettled as u64,
        request_id: settlement.request_id,
        drawn_number: settlement.drawn_number as u64,
        payout: settlement.payout,
    }
    .log();

    #[cfg(feature = "debug")]
    sol_log(
        &format!(
            "Ledger: bankroll={} escrowed={} reserved={} pending={}",
            table.bankroll, table.escrowed, table.reserved, table.pending_requests
        )
        .as_str(),
    );

    sol_log(&format!("Paid {} lamports to {}", settlement.payout, owner_info.key).as_str());

    Ok(())
}
