use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::constants::PROGRAM_ID;

#[derive(AnchorSerialize)]
pub struct Initialize {
    pub initial_price_sol: u64,
}

impl Discriminator for Initialize {
    const DISCRIMINATOR: &'static [u8] = &[175, 175, 109, 31, 13, 152, 155, 237];
}

impl InstructionData for Initialize {}

/// Accounts for `initialize`. The program funds the vault and buyer
/// state PDAs from the founder, who signs and pays.
pub struct InitializeAccounts {
    pub vault: Pubkey,
    pub buyer_state: Pubkey,
    pub founder: Pubkey,
    pub mint: Pubkey,
    pub founder_token_account: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for InitializeAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.buyer_state, false),
            AccountMeta::new(self.founder, true),
            AccountMeta::new(self.mint, false),
            AccountMeta::new(self.founder_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub fn initialize(accounts: InitializeAccounts, initial_price_sol: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts.to_account_metas(None),
        data: Initialize { initial_price_sol }.data(),
    }
}
