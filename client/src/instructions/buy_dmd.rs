use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::constants::PROGRAM_ID;

#[derive(AnchorSerialize)]
pub struct BuyDmd {
    /// SOL paid by the buyer, in lamports.
    pub sol_contribution: u64,
}

impl Discriminator for BuyDmd {
    const DISCRIMINATOR: &'static [u8] = &[118, 112, 238, 202, 214, 39, 149, 203];
}

impl InstructionData for BuyDmd {}

/// Accounts for `buy_dmd`. Both the founder and the buyer sign: the
/// buyer pays SOL to the treasury, the founder's token account releases
/// the purchased DMD.
pub struct BuyDmdAccounts {
    pub vault: Pubkey,
    pub buyer_state: Pubkey,
    pub founder: Pubkey,
    pub treasury: Pubkey,
    pub founder_token_account: Pubkey,
    pub buyer_token_account: Pubkey,
    pub buyer: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for BuyDmdAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.buyer_state, false),
            AccountMeta::new(self.founder, true),
            AccountMeta::new(self.treasury, false),
            AccountMeta::new(self.founder_token_account, false),
            AccountMeta::new(self.buyer_token_account, false),
            AccountMeta::new(self.buyer, true),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

pub fn buy_dmd(accounts: BuyDmdAccounts, sol_contribution: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts.to_account_metas(None),
        data: BuyDmd { sol_contribution }.data(),
    }
}
