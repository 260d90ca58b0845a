use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::constants::PROGRAM_ID;

#[derive(AnchorSerialize)]
pub struct TogglePublicSale {
    pub active: bool,
}

impl Discriminator for TogglePublicSale {
    const DISCRIMINATOR: &'static [u8] = &[48, 110, 255, 143, 126, 24, 42, 91];
}

impl InstructionData for TogglePublicSale {}

pub struct TogglePublicSaleAccounts {
    pub vault: Pubkey,
    pub founder: Pubkey,
}

impl ToAccountMetas for TogglePublicSaleAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.founder, true),
        ]
    }
}

pub fn toggle_public_sale(accounts: TogglePublicSaleAccounts, active: bool) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts.to_account_metas(None),
        data: TogglePublicSale { active }.data(),
    }
}
