use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer},
};

use crate::error::MarketError;
use crate::state::Listing;

/// Cancel is deliberately not gated on the pause flag: a seller can always
/// pull their asset back out of custody, paused or not.
#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(
        mut,
        seeds = [Listing::SEED_PREFIX, mint.key().as_ref()],
        bump = listing.bump,
        constraint = listing.is_active() @ MarketError::NotListed,
        constraint = listing.seller == seller.key() @ MarketError::NotOwner
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = listing
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub seller: Signer<'info>,

    /// Seller's token account to take the NFT back.
    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = mint,
        associated_token::authority = seller
    )]
    pub seller_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

#[event]
pub struct ListingCancelled {
    pub mint: Pubkey,
    pub seller: Pubkey,
}

pub fn handler(ctx: Context<CancelListing>) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let bump = ctx.accounts.listing.bump;

    // Mark the listing absent before the asset leaves custody.
    ctx.accounts.listing.clear();

    let seeds = &[Listing::SEED_PREFIX, mint_key.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.seller_ata.to_account_info(),
        authority: ctx.accounts.listing.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::transfer(cpi_ctx, 1)?;

    // Vault is empty now; close it and refund its rent to the seller.
    let cpi_close = CloseAccount {
        account: ctx.accounts.vault.to_account_info(),
        destination: ctx.accounts.seller.to_account_info(),
        authority: ctx.accounts.listing.to_account_info(),
    };
    let cpi_ctx_close = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_close,
        signer,
    );
    token::close_account(cpi_ctx_close)?;

    msg!(
        "Listing cancelled: mint={}, seller={}",
        mint_key,
        ctx.accounts.seller.key()
    );

    emit!(ListingCancelled {
        mint: mint_key,
        seller: ctx.accounts.seller.key(),
    });

    Ok(())
}
