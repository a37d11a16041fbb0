use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::error::MarketError;
use crate::state::{Listing, Marketplace};

#[derive(Accounts)]
pub struct ListItem<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX],
        bump = config.bump,
        constraint = !config.paused @ MarketError::Paused
    )]
    pub config: Account<'info, Marketplace>,

    /// Listing slot for this mint. Persists across sales; an active listing
    /// (price > 0) rejects a second list attempt.
    #[account(
        init_if_needed,
        payer = seller,
        space = Listing::LEN,
        seeds = [Listing::SEED_PREFIX, mint.key().as_ref()],
        bump,
        constraint = !listing.is_active() @ MarketError::AlreadyListed
    )]
    pub listing: Account<'info, Listing>,

    /// Escrow ATA owned by the listing PDA. Holds the NFT while listed.
    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = mint,
        associated_token::authority = listing
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub seller: Signer<'info>,

    /// Seller's token account; holding the token is ownership of record.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = seller,
        constraint = seller_ata.amount == 1 @ MarketError::NotOwner
    )]
    pub seller_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

#[event]
pub struct ItemListed {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub price: u64,
}

pub fn handler(ctx: Context<ListItem>, price: u64) -> Result<()> {
    require!(price > 0, MarketError::InvalidPrice);

    // Standard SPL NFT only (decimals = 0, supply = 1)
    require!(ctx.accounts.mint.decimals == 0, MarketError::UnsupportedMint);
    require!(ctx.accounts.mint.supply == 1, MarketError::UnsupportedMint);

    let listing = &mut ctx.accounts.listing;
    listing.seller = ctx.accounts.seller.key();
    listing.mint = ctx.accounts.mint.key();
    listing.price = price;
    listing.bump = ctx.bumps.listing;

    // Move the NFT into custody. Runs after the listing record is written;
    // the transaction unwinds both together if the transfer fails.
    let cpi_accounts = Transfer {
        from: ctx.accounts.seller_ata.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.seller.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, 1)?;

    msg!(
        "Item listed: mint={}, seller={}, price={}",
        ctx.accounts.mint.key(),
        ctx.accounts.seller.key(),
        price
    );

    emit!(ItemListed {
        mint: ctx.accounts.mint.key(),
        seller: ctx.accounts.seller.key(),
        price,
    });

    Ok(())
}
