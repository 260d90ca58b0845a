use solana_sdk::pubkey::Pubkey;

use crate::constants::{BUYER_SEED, PROGRAM_ID, VAULT_SEED};

/// Addresses derived for one connected wallet. Derivation is pure; the
/// same wallet always yields the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pdas {
    pub vault: Pubkey,
    pub vault_bump: u8,
    pub buyer_state: Pubkey,
    pub buyer_state_bump: u8,
}

impl Pdas {
    pub fn for_wallet(wallet: &Pubkey) -> Self {
        let (vault, vault_bump) = vault_address();
        let (buyer_state, buyer_state_bump) = buyer_state_address(&vault, wallet);
        Self {
            vault,
            vault_bump,
            buyer_state,
            buyer_state_bump,
        }
    }
}

/// The singleton vault PDA: `["vault"]`.
pub fn vault_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], &PROGRAM_ID)
}

/// Per-wallet buyer state: `["buyer", vault, wallet]`.
pub fn buyer_state_address(vault: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BUYER_SEED, vault.as_ref(), wallet.as_ref()],
        &PROGRAM_ID,
    )
}
