use roulette_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::rent::Rent;
use solana_program::sysvar::Sysvar;
use steel::*;

/// Lamports the table holds above its rent-exempt minimum.
pub fn spendable_lamports(table_info: &AccountInfo<'_>) -> Result<u64, ProgramError> {
    let rent = Rent::get()?.minimum_balance(table_info.data_len());
    Ok(table_info.lamports().saturating_sub(rent))
}

/// Fail the instruction if the table's books no longer match its balance.
pub fn assert_table_solvent(table: &Table, table_info: &AccountInfo<'_>) -> ProgramResult {
    table.assert_solvent(spendable_lamports(table_info)?)?;
    Ok(())
}

/// Load the draw request recorded under `request_id`.
/// A missing or foreign record fails with `UnknownRequest`.
pub fn load_draw_request<'a>(
    draw_request_info: &'a AccountInfo<'_>,
    request_id: u64,
) -> Result<&'a mut DrawRequest, ProgramError> {
    draw_request_info
        .is_writable()?
        .has_seeds(&[DRAW_REQUEST, &request_id.to_le_bytes()], &roulette_api::ID)?;
    if draw_request_info.data_is_empty() || draw_request_info.owner != &roulette_api::ID {
        sol_log("No request recorded under this id");
        return Err(RouletteError::UnknownRequest.into());
    }
    draw_request_info.as_account_mut::<DrawRequest>(&roulette_api::ID)
}
