use roulette_api::prelude::*;
use solana_program::clock::Clock;
use solana_program::log::sol_log;
use solana_program::sysvar::Sysvar;
use steel::*;

use crate::utils::assert_table_solvent;

/// Split instruction data into the submission header and its packed wagers.
fn parse_batch(data: &[u8]) -> Result<(&SubmitWagers, &[Wager]), ProgramError> {
    let header_len = std::mem::size_of::<SubmitWagers>();
    if data.len() < header_len {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (header, tail) = data.split_at(header_len);
    let args = SubmitWagers::try_from_bytes(header)?;
    let wagers = bytemuck::try_cast_slice::<u8, Wager>(tail)
        .or(Err(ProgramError::InvalidInstructionData))?;
    Ok((args, wagers))
}

/// Escrows a batch of wagers under a fresh draw request.
pub fn process_submit_wagers(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse data.
    let (args, batch) = parse_batch(data)?;
    let request_id = u64::from_le_bytes(args.request_id);
    let payment = u64::from_le_bytes(args.payment);

    sol_log(
        &format!(
            "SubmitWagers: request_id={} payment={} wagers={}",
            request_id,
            payment,
            batch.len()
        )
        .as_str(),
    );

    // Load accounts.
    let [signer_info, table_info, draw_request_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    let table = table_info
        .is_writable()?
        .has_seeds(&[TABLE], &roulette_api::ID)?
        .as_account_mut::<Table>(&roulette_api::ID)?;
    draw_request_info
        .is_writable()?
        .has_seeds(&[DRAW_REQUEST, &request_id.to_le_bytes()], &roulette_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    // Request ids are single use.
    if !draw_request_info.data_is_empty() {
        sol_log("Request id already used");
        return Err(RouletteError::DuplicateRequest.into());
    }

    // Create the request record.
    create_program_account::<DrawRequest>(
        draw_request_info,
        system_program,
        signer_info,
        &roulette_api::ID,
        &[DRAW_REQUEST, &request_id.to_le_bytes()],
    )?;
    let request = draw_request_info.as_account_mut::<DrawRequest>(&roulette_api::ID)?;

    // Validate, reserve exposure and book the stake.
    let clock = Clock::get()?;
    let reserve = table.open_request(
        request,
        request_id,
        *signer_info.key,
        batch,
        payment,
        clock.slot,
    )?;

    // Escrow the stake.
    table_info.collect(payment, signer_info)?;
    assert_table_solvent(table, table_info)?;

    WagersSubmittedEvent {
        disc: RouletteEvent::WagersSubmitted as u64,
        request_id,
        owner: *signer_info.key,
        stake: payment,
        reserve,
        wager_count: batch.len() as u64,
    }
    .log();

    #[cfg(feature = "debug")]
    for wager in batch {
        sol_log(
            &format!(
                "  wager kind={} parameter={} amount={}",
                wager.kind,
                wager.parameter,
                wager.amount()
            )
            .as_str(),
        );
    }

    sol_log(
        &format!(
            "Escrowed {} lamports, reserved {}, bankroll {}",
            payment, reserve, table.bankroll
        )
        .as_str(),
    );

    Ok(())
}
