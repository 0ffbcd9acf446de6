use roulette_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Rotates the randomness source allowed to resolve draws.
pub fn process_set_oracle(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let args = SetOracle::try_from_bytes(data)?;

    // Load accounts.
    let [signer_info, table_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    let table = table_info
        .is_writable()?
        .has_seeds(&[TABLE], &roulette_api::ID)?
        .as_account_mut::<Table>(&roulette_api::ID)?;

    let previous = table.oracle;
    table.set_oracle(signer_info.key, args.oracle)?;

    sol_log(&format!("SetOracle: {} -> {}", previous, table.oracle).as_str());

    Ok(())
}
