use roulette_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::assert_table_solvent;

/// Tops up the house bankroll. Anyone may fund the table.
pub fn process_fund_table(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = Fund::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    sol_log(&format!("Fund: amount={}", amount).as_str());

    // Load accounts.
    let [signer_info, table_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    table_info
        .is_writable()?
        .has_seeds(&[TABLE], &roulette_api::ID)?;
    system_program.is_program(&system_program::ID)?;
    let table = table_info.as_account_mut::<Table>(&roulette_api::ID)?;

    // Move lamports, then book them.
    let bankroll = table.fund(amount)?;
    table_info.collect(amount, signer_info)?;
    assert_table_solvent(table, table_info)?;

    BalanceChangedEvent {
        disc: RouletteEvent::BalanceChanged as u64,
        bankroll,
    }
    .log();

    sol_log(&format!("Bankroll is now {} lamports", bankroll).as_str());

    Ok(())
}
