use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::error::MarketError;
use crate::state::{Listing, Marketplace};

#[derive(Accounts)]
pub struct UpdateListing<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX],
        bump = config.bump,
        constraint = !config.paused @ MarketError::Paused
    )]
    pub config: Account<'info, Marketplace>,

    #[account(
        mut,
        seeds = [Listing::SEED_PREFIX, mint.key().as_ref()],
        bump = listing.bump,
        constraint = listing.is_active() @ MarketError::NotListed,
        constraint = listing.seller == seller.key() @ MarketError::NotOwner
    )]
    pub listing: Account<'info, Listing>,

    pub seller: Signer<'info>,

    pub mint: Account<'info, Mint>,
}

#[event]
pub struct ListingUpdated {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub price: u64,
}

pub fn handler(ctx: Context<UpdateListing>, new_price: u64) -> Result<()> {
    require!(new_price > 0, MarketError::InvalidPrice);

    let listing = &mut ctx.accounts.listing;
    listing.price = new_price;

    msg!(
        "Listing updated: mint={}, seller={}, price={}",
        listing.mint,
        listing.seller,
        new_price
    );

    emit!(ListingUpdated {
        mint: listing.mint,
        seller: listing.seller,
        price: new_price,
    });

    Ok(())
}
