use anchor_lang::prelude::*;

/// Public devnet endpoint the deployed program lives on.
pub const RPC_URL: &str = "https://api.devnet.solana.com";

pub const PROGRAM_ID: Pubkey = pubkey!("B5ye4KPWZhk9H1gT5Wgm2y5ebSAsaJLzYenQXTiomNt6");

pub const DMD_MINT: Pubkey = pubkey!("3W8wtdW8pA8eUfUMJrCnJh9Dto8rc23nfQRJamuh1AWb");

pub const TREASURY: Pubkey = pubkey!("CEUmazdgtbUCcQyLq6NCm4BuQbvCsYFzKsS5wdRvZehV");

pub const VAULT_SEED: &[u8] = b"vault";
pub const BUYER_SEED: &[u8] = b"buyer";
