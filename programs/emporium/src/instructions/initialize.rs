use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};

use crate::error::MarketError;
use crate::state::{Marketplace, MAX_FEE_PERCENT};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = Marketplace::LEN,
        seeds = [Marketplace::SEED_PREFIX],
        bump
    )]
    pub config: Account<'info, Marketplace>,

    /// Lamport vault backing all proceeds balances. A plain system account
    /// so lamports can move in and out with system transfers only.
    #[account(
        mut,
        seeds = [Marketplace::TREASURY_SEED],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MarketplaceInitialized {
    pub admin: Pubkey,
    pub fee_percent: u8,
}

pub fn handler(ctx: Context<Initialize>, fee_percent: u8) -> Result<()> {
    require!(fee_percent <= MAX_FEE_PERCENT, MarketError::FeeTooHigh);

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.fee_percent = fee_percent;
    config.paused = false;
    config.bump = ctx.bumps.config;
    config.treasury_bump = ctx.bumps.treasury;

    // Seed the treasury with its rent-exempt minimum so sale deposits and
    // withdrawals never strand it below rent. The float never leaves.
    let rent_floor = Rent::get()?.minimum_balance(0);
    invoke(
        &system_instruction::transfer(
            ctx.accounts.admin.key,
            ctx.accounts.treasury.key,
            rent_floor,
        ),
        &[
            ctx.accounts.admin.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    msg!(
        "Marketplace initialized: admin={}, fee={}%",
        config.admin,
        fee_percent
    );

    emit!(MarketplaceInitialized {
        admin: ctx.accounts.admin.key(),
        fee_percent,
    });

    Ok(())
}
