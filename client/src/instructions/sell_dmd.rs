use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::constants::PROGRAM_ID;

#[derive(AnchorSerialize)]
pub struct SellDmd {
    /// DMD to sell back, in base units of the mint.
    pub amount: u64,
}

impl Discriminator for SellDmd {
    const DISCRIMINATOR: &'static [u8] = &[129, 244, 102, 89, 109, 152, 241, 129];
}

impl InstructionData for SellDmd {}

pub struct SellDmdAccounts {
    pub vault: Pubkey,
    pub buyer_state: Pubkey,
}

impl ToAccountMetas for SellDmdAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.buyer_state, false),
        ]
    }
}

pub fn sell_dmd(accounts: SellDmdAccounts, amount: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts.to_account_metas(None),
        data: SellDmd { amount }.data(),
    }
}
