use anchor_lang::prelude::*;

use crate::error::MarketError;

/// Highest protocol fee the administrator may configure, in percent.
pub const MAX_FEE_PERCENT: u8 = 20;

/// Singleton marketplace configuration
/// Seeds: [b"config"]
#[account]
pub struct Marketplace {
    pub admin: Pubkey,
    pub fee_percent: u8,
    pub paused: bool,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl Marketplace {
    pub const SEED_PREFIX: &'static [u8] = b"config";
    pub const TREASURY_SEED: &'static [u8] = b"treasury";

    pub const LEN: usize = 8 +   // discriminator
        32 +                      // admin
        1 +                       // fee_percent
        1 +                       // paused
        1 +                       // bump
        1;                        // treasury_bump
}

/// One listing per NFT mint. The account persists for the lifetime of the
/// marketplace; `price == 0` marks it absent, `price > 0` marks it active.
/// While active, the listing PDA is the authority over the vault ATA
/// holding the NFT in custody.
/// Seeds: [b"listing", mint]
#[account]
pub struct Listing {
    pub seller: Pubkey,
    pub mint: Pubkey,
    pub price: u64,
    pub bump: u8,
}

impl Listing {
    pub const SEED_PREFIX: &'static [u8] = b"listing";

    pub const LEN: usize = 8 +   // discriminator
        32 +                      // seller
        32 +                      // mint
        8 +                       // price
        1;                        // bump

    pub fn is_active(&self) -> bool {
        self.price > 0
    }

    /// Marks the listing absent. The NFT must leave the vault in the same
    /// instruction.
    pub fn clear(&mut self) {
        self.price = 0;
        self.seller = Pubkey::default();
    }
}

/// Withdrawable sale proceeds owed to one identity. Created on first
/// credit, zeroed by withdrawal, never closed.
/// Seeds: [b"proceeds", beneficiary]
#[account]
pub struct Proceeds {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Proceeds {
    pub const SEED_PREFIX: &'static [u8] = b"proceeds";

    pub const LEN: usize = 8 +   // discriminator
        32 +                      // beneficiary
        8 +                       // amount
        1;                        // bump
}

/// Split a sale price into (seller_amount, fee) using the fee percent in
/// force at sale time. `fee = floor(price * fee_percent / 100)` and the two
/// parts always reassemble to exactly `price`.
pub fn split_price(price: u64, fee_percent: u8) -> Result<(u64, u64)> {
    let fee = (price as u128)
        .checked_mul(fee_percent as u128)
        .ok_or(MarketError::ArithmeticOverflow)?
        .checked_div(100)
        .ok_or(MarketError::ArithmeticOverflow)? as u64;

    let seller_amount = price
        .checked_sub(fee)
        .ok_or(MarketError::ArithmeticOverflow)?;

    Ok((seller_amount, fee))
}
