use steel::*;

use crate::{
    consts::*,
    instruction::*,
    state::*,
    wager::Wager,
};

pub fn initialize(signer: Pubkey, oracle: Pubkey, initial_funding: u64, refund_timeout_slots: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(TABLE_ADDRESS, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Initialize {
            oracle,
            initial_funding: initial_funding.to_le_bytes(),
            refund_timeout_slots: refund_timeout_slots.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn fund(signer: Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(TABLE_ADDRESS, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Fund {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn set_oracle(signer: Pubkey, oracle: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(TABLE_ADDRESS, false),
        ],
        data: SetOracle { oracle }.to_bytes(),
    }
}

pub fn submit_wagers(signer: Pubkey, request_id: u64, wagers: &[Wager]) -> Instruction {
    let payment = wagers.iter().map(|w| w.amount()).fold(0u64, u64::saturating_add);
    let draw_request_address = draw_request_pda(request_id).0;
    let header = SubmitWagers {
        request_id: request_id.to_le_bytes(),
        payment: payment.to_le_bytes(),
    };
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(TABLE_ADDRESS, false),
            AccountMeta::new(draw_request_address, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: [header.to_bytes(), bytemuck::cast_slice(wagers).to_vec()].concat(),
    }
}

pub fn resolve_draw(oracle: Pubkey, owner: Pubkey, request_id: u64, drawn_number: u8) -> Instruction {
    let draw_request_address = draw_request_pda(request_id).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(oracle, true),
            AccountMeta::new(TABLE_ADDRESS, false),
            AccountMeta::new(draw_request_address, false),
            AccountMeta::new(owner, false),
        ],
        data: ResolveDraw {
            request_id: request_id.to_le_bytes(),
            drawn_number,
        }
        .to_bytes(),
    }
}

pub fn refund_request(signer: Pubkey, owner: Pubkey, request_id: u64) -> Instruction {
    let draw_request_address = draw_request_pda(request_id).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(TABLE_ADDRESS, false),
            AccountMeta::new(draw_request_address, false),
            AccountMeta::new(owner, false),
        ],
        data: RefundRequest {
            request_id: request_id.to_le_bytes(),
        }
        .to_bytes(),
    }
}
