use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::constants::PROGRAM_ID;

#[derive(AnchorSerialize)]
pub struct ClaimReward;

impl Discriminator for ClaimReward {
    const DISCRIMINATOR: &'static [u8] = &[149, 95, 181, 242, 94, 90, 158, 162];
}

impl InstructionData for ClaimReward {}

pub struct ClaimRewardAccounts {
    pub vault: Pubkey,
    pub buyer_state: Pubkey,
}

impl ToAccountMetas for ClaimRewardAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.vault, false),
            AccountMeta::new(self.buyer_state, false),
        ]
    }
}

pub fn claim_reward(accounts: ClaimRewardAccounts) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts.to_account_metas(None),
        data: ClaimReward.data(),
    }
}
