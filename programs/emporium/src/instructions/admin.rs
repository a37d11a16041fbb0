use anchor_lang::prelude::*;

use crate::error::MarketError;
use crate::state::{Marketplace, MAX_FEE_PERCENT};

/// Update the protocol fee percent
#[derive(Accounts)]
pub struct SetFeePercent<'info> {
    #[account(
        mut,
        seeds = [Marketplace::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ MarketError::NotAdministrator
    )]
    pub config: Account<'info, Marketplace>,

    pub admin: Signer<'info>,
}

#[event]
pub struct FeePercentUpdated {
    pub fee_percent: u8,
}

pub fn set_fee_percent(ctx: Context<SetFeePercent>, new_fee_percent: u8) -> Result<()> {
    require!(new_fee_percent <= MAX_FEE_PERCENT, MarketError::FeeTooHigh);

    // Applies to subsequent sales only; already-listed items settle with
    // whatever fee is in force when they sell.
    ctx.accounts.config.fee_percent = new_fee_percent;

    msg!("Fee percent updated to {}%", new_fee_percent);

    emit!(FeePercentUpdated {
        fee_percent: new_fee_percent,
    });

    Ok(())
}

/// Pause or resume the marketplace
#[derive(Accounts)]
pub struct SetPauseState<'info> {
    #[account(
        mut,
        seeds = [Marketplace::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ MarketError::NotAdministrator
    )]
    pub config: Account<'info, Marketplace>,

    pub admin: Signer<'info>,
}

#[event]
pub struct PauseStateChanged {
    pub paused: bool,
}

pub fn pause(ctx: Context<SetPauseState>) -> Result<()> {
    set_paused(ctx, true)
}

pub fn unpause(ctx: Context<SetPauseState>) -> Result<()> {
    set_paused(ctx, false)
}

fn set_paused(ctx: Context<SetPauseState>, paused: bool) -> Result<()> {
    ctx.accounts.config.paused = paused;

    msg!("Marketplace pause state: {}", paused);

    emit!(PauseStateChanged { paused });

    Ok(())
}

/// Hand the administrator role to a new identity
#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(
        mut,
        seeds = [Marketplace::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ MarketError::NotAdministrator
    )]
    pub config: Account<'info, Marketplace>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let previous_admin = ctx.accounts.config.admin;

    // Takes effect immediately: future fees accrue to the new admin's
    // proceeds entry, while credits already made stay with the old one.
    ctx.accounts.config.admin = new_admin;

    msg!("Admin transferred: {} -> {}", previous_admin, new_admin);

    emit!(AdminTransferred {
        previous_admin,
        new_admin,
    });

    Ok(())
}
