use roulette_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::assert_table_solvent;

/// Creates the table and seeds its bankroll. Only the deploy admin may call.
pub fn process_initialize(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = Initialize::try_from_bytes(data)?;
    let initial_funding = u64::from_le_bytes(args.initial_funding);
    let refund_timeout_slots = match u64::from_le_bytes(args.refund_timeout_slots) {
        0 => DEFAULT_REFUND_TIMEOUT_SLOTS,
        slots => slots,
    };

    // Load accounts.
    let [signer_info, table_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?.has_address(&ADMIN_ADDRESS)?;
    table_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[TABLE], &roulette_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    sol_log("Initializing roulette table...");

    // Create table.
    create_program_account::<Table>(
        table_info,
        system_program,
        signer_info,
        &roulette_api::ID,
        &[TABLE],
    )?;
    let table = table_info.as_account_mut::<Table>(&roulette_api::ID)?;
    table.admin = *signer_info.key;
    table.oracle = args.oracle;
    table.refund_timeout_slots = refund_timeout_slots;

    // Seed bankroll.
    if initial_funding > 0 {
        table_info.collect(initial_funding, signer_info)?;
        table.fund(initial_funding)?;
    }
    assert_table_solvent(table, table_info)?;

    sol_log(
        &format!(
            "Table created at {}: oracle={} bankroll={} refund_timeout_slots={}",
            table_info.key, table.oracle, table.bankroll, table.refund_timeout_slots
        )
        .as_str(),
    );

    Ok(())
}
