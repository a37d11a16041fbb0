use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer},
};

use crate::error::MarketError;
use crate::state::{Listing, Marketplace};

/// Administrative override to unstick an escrowed asset. Bypasses the
/// seller check and stays operable while paused; the emitted event is the
/// audit trail.
#[derive(Accounts)]
pub struct AdminRecover<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ MarketError::NotAdministrator
    )]
    pub config: Account<'info, Marketplace>,

    #[account(
        mut,
        seeds = [Listing::SEED_PREFIX, mint.key().as_ref()],
        bump = listing.bump,
        constraint = listing.is_active() @ MarketError::NotListed
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = listing
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// Recorded seller; still gets the escrow rent back on close.
    /// CHECK: validated against the listing record
    #[account(
        mut,
        constraint = seller.key() == listing.seller @ MarketError::NotAuthorized
    )]
    pub seller: UncheckedAccount<'info>,

    /// Recovery destination chosen by the administrator.
    /// CHECK: any wallet; the admin decides where the asset goes
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = recipient
    )]
    pub recipient_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

#[event]
pub struct ListingRecovered {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub recipient: Pubkey,
}

pub fn handler(ctx: Context<AdminRecover>) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let seller_key = ctx.accounts.listing.seller;
    let bump = ctx.accounts.listing.bump;

    ctx.accounts.listing.clear();

    let seeds = &[Listing::SEED_PREFIX, mint_key.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.recipient_ata.to_account_info(),
        authority: ctx.accounts.listing.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::transfer(cpi_ctx, 1)?;

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
        "Listing force-recovered: mint={}, seller={}, recipient={}",
        mint_key,
        seller_key,
        ctx.accounts.recipient.key()
    );

    emit!(ListingRecovered {
        mint: mint_key,
        seller: seller_key,
        recipient: ctx.accounts.recipient.key(),
    });

    Ok(())
}
