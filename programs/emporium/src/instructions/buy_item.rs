use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer},
};

use crate::error::MarketError;
use crate::state::{split_price, Listing, Marketplace, Proceeds};

#[derive(Accounts)]
pub struct BuyItem<'info> {
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
    pub buyer: Signer<'info>,

    /// Buyer's token account to receive the NFT.
    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer
    )]
    pub buyer_ata: Account<'info, TokenAccount>,

    /// Recorded seller; gets the vault rent back when the escrow closes.
    /// CHECK: validated against the listing record
    #[account(
        mut,
        constraint = seller.key() == listing.seller @ MarketError::NotAuthorized
    )]
    pub seller: UncheckedAccount<'info>,

    /// Seller's proceeds ledger entry, created on first credit.
    #[account(
        init_if_needed,
        payer = buyer,
        space = Proceeds::LEN,
        seeds = [Proceeds::SEED_PREFIX, listing.seller.as_ref()],
        bump
    )]
    pub seller_proceeds: Account<'info, Proceeds>,

    /// Administrator's proceeds ledger entry; collects the protocol fee.
    #[account(
        init_if_needed,
        payer = buyer,
        space = Proceeds::LEN,
        seeds = [Proceeds::SEED_PREFIX, config.admin.as_ref()],
        bump
    )]
    pub admin_proceeds: Account<'info, Proceeds>,

    #[account(
        mut,
        seeds = [Marketplace::TREASURY_SEED],
        bump = config.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

#[event]
pub struct ItemSold {
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
    pub fee: u64,
}

pub fn handler(ctx: Context<BuyItem>, amount: u64) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let price = ctx.accounts.listing.price;
    let seller_key = ctx.accounts.listing.seller;
    let bump = ctx.accounts.listing.bump;

    require!(amount >= price, MarketError::PriceNotMet);

    // Fee percent is read at sale time, not at listing time.
    let (seller_amount, fee) = split_price(price, ctx.accounts.config.fee_percent)?;

    // Consume the listing and commit the ledger credits before any
    // transfer leaves the program.
    ctx.accounts.listing.clear();

    if seller_key == ctx.accounts.config.admin {
        // Seller is the fee recipient; both halves land in one entry.
        let entry = &mut ctx.accounts.admin_proceeds;
        entry.beneficiary = seller_key;
        entry.bump = ctx.bumps.admin_proceeds;
        entry.amount = entry
            .amount
            .checked_add(price)
            .ok_or(MarketError::ArithmeticOverflow)?;
    } else {
        let entry = &mut ctx.accounts.seller_proceeds;
        entry.beneficiary = seller_key;
        entry.bump = ctx.bumps.seller_proceeds;
        entry.amount = entry
            .amount
            .checked_add(seller_amount)
            .ok_or(MarketError::ArithmeticOverflow)?;

        let entry = &mut ctx.accounts.admin_proceeds;
        entry.beneficiary = ctx.accounts.config.admin;
        entry.bump = ctx.bumps.admin_proceeds;
        entry.amount = entry
            .amount
            .checked_add(fee)
            .ok_or(MarketError::ArithmeticOverflow)?;
    }

    // Draw exactly the asking price; any surplus the buyer offered never
    // leaves their account.
    invoke(
        &system_instruction::transfer(
            ctx.accounts.buyer.key,
            ctx.accounts.treasury.key,
            price,
        ),
        &[
            ctx.accounts.buyer.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    // Release the NFT from custody to the buyer (signed by the listing PDA).
    let seeds = &[Listing::SEED_PREFIX, mint_key.as_ref(), &[bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.buyer_ata.to_account_info(),
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
        "Item sold: mint={}, seller={}, buyer={}, price={}, fee={}",
        mint_key,
        seller_key,
        ctx.accounts.buyer.key(),
        price,
        fee
    );

    emit!(ItemSold {
        mint: mint_key,
        seller: seller_key,
        buyer: ctx.accounts.buyer.key(),
        price,
        fee,
    });

    Ok(())
}
