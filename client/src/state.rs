use std::fmt;
use std::io::Write;

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use solana_sdk::native_token::lamports_to_sol;

/// The singleton presale vault record. Field order and widths are the
/// deployed program's account layout and must not change.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Vault {
    pub owner: Pubkey,
    pub total_supply: u64,
    pub presale_sold: u64,
    /// Price of one DMD, in lamports.
    pub initial_price_sol: u64,
    pub public_sale_active: bool,
    pub mint: Pubkey,
    pub mint_decimals: u8,
}

/// Per-wallet purchase record, one per (vault, wallet) pair.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BuyerState {
    pub total_dmd: u64,
    pub last_reward_claim: i64,
    pub last_sell: i64,
    pub holding_since: i64,
    pub last_buy_day: i64,
    pub buy_count_today: u64,
    pub whitelisted: bool,
}

impl Discriminator for Vault {
    const DISCRIMINATOR: &'static [u8] = &[211, 8, 232, 43, 2, 152, 117, 119];
}

impl Discriminator for BuyerState {
    const DISCRIMINATOR: &'static [u8] = &[196, 226, 50, 172, 9, 123, 201, 250];
}

impl AccountDeserialize for Vault {
    fn try_deserialize(buf: &mut &[u8]) -> Result<Self> {
        check_discriminator::<Self>(buf)?;
        Self::try_deserialize_unchecked(buf)
    }

    fn try_deserialize_unchecked(buf: &mut &[u8]) -> Result<Self> {
        let mut data = &buf[8..];
        AnchorDeserialize::deserialize(&mut data)
            .map_err(|_| ErrorCode::AccountDidNotDeserialize.into())
    }
}

impl AccountDeserialize for BuyerState {
    fn try_deserialize(buf: &mut &[u8]) -> Result<Self> {
        check_discriminator::<Self>(buf)?;
        Self::try_deserialize_unchecked(buf)
    }

    fn try_deserialize_unchecked(buf: &mut &[u8]) -> Result<Self> {
        let mut data = &buf[8..];
        AnchorDeserialize::deserialize(&mut data)
            .map_err(|_| ErrorCode::AccountDidNotDeserialize.into())
    }
}

impl AccountSerialize for Vault {
    fn try_serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer
            .write_all(Self::DISCRIMINATOR)
            .and_then(|()| AnchorSerialize::serialize(self, writer))
            .map_err(|_| ErrorCode::AccountDidNotSerialize.into())
    }
}

impl AccountSerialize for BuyerState {
    fn try_serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer
            .write_all(Self::DISCRIMINATOR)
            .and_then(|()| AnchorSerialize::serialize(self, writer))
            .map_err(|_| ErrorCode::AccountDidNotSerialize.into())
    }
}

fn check_discriminator<T: Discriminator>(buf: &[u8]) -> Result<()> {
    if buf.len() < T::DISCRIMINATOR.len() {
        return Err(ErrorCode::AccountDiscriminatorNotFound.into());
    }
    if &buf[..T::DISCRIMINATOR.len()] != T::DISCRIMINATOR {
        return Err(ErrorCode::AccountDiscriminatorMismatch.into());
    }
    Ok(())
}

impl fmt::Display for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "owner:              {}", self.owner)?;
        writeln!(f, "total_supply:       {}", self.total_supply)?;
        writeln!(f, "presale_sold:       {}", self.presale_sold)?;
        writeln!(
            f,
            "initial_price_sol:  {}",
            lamports_to_sol(self.initial_price_sol)
        )?;
        writeln!(f, "public_sale_active: {}", self.public_sale_active)?;
        writeln!(f, "mint:               {}", self.mint)?;
        write!(f, "mint_decimals:      {}", self.mint_decimals)
    }
}

impl fmt::Display for BuyerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total_dmd:         {}", self.total_dmd)?;
        writeln!(f, "last_reward_claim: {}", self.last_reward_claim)?;
        writeln!(f, "last_sell:         {}", self.last_sell)?;
        writeln!(f, "holding_since:     {}", self.holding_since)?;
        writeln!(f, "last_buy_day:      {}", self.last_buy_day)?;
        writeln!(f, "buy_count_today:   {}", self.buy_count_today)?;
        write!(f, "whitelisted:       {}", self.whitelisted)
    }
}
