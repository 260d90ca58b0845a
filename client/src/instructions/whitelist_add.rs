use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};

use crate::constants::PROGRAM_ID;

#[derive(AnchorSerialize)]
pub struct WhitelistAdd {
    pub status: bool,
}

impl Discriminator for WhitelistAdd {
    const DISCRIMINATOR: &'static [u8] = &[200, 159, 194, 141, 100, 114, 107, 154];
}

impl InstructionData for WhitelistAdd {}

pub struct WhitelistAddAccounts {
    pub buyer_state: Pubkey,
}

impl ToAccountMetas for WhitelistAddAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![AccountMeta::new(self.buyer_state, false)]
    }
}

pub fn whitelist_add(accounts: WhitelistAddAccounts, status: bool) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: accounts.to_account_metas(None),
        data: WhitelistAdd { status }.data(),
    }
}
