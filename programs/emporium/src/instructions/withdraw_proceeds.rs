use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};

use crate::error::MarketError;
use crate::state::{Marketplace, Proceeds};

/// Withdrawal stays available while the marketplace is paused.
#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    #[account(
        seeds = [Marketplace::SEED_PREFIX],
        bump = config.bump
    )]
    pub config: Account<'info, Marketplace>,

    #[account(
        mut,
        seeds = [Proceeds::SEED_PREFIX, beneficiary.key().as_ref()],
        bump = proceeds.bump,
        constraint = proceeds.amount > 0 @ MarketError::NoProceeds
    )]
    pub proceeds: Account<'info, Proceeds>,

    #[account(
        mut,
        seeds = [Marketplace::TREASURY_SEED],
        bump = config.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ProceedsWithdrawn {
    pub beneficiary: Pubkey,
    pub amount: u64,
}

pub fn handler(ctx: Context<WithdrawProceeds>) -> Result<()> {
    let amount = ctx.accounts.proceeds.amount;

    // Zero the entry before the lamports move. The whole balance goes out;
    // there is no partial withdrawal.
    ctx.accounts.proceeds.amount = 0;

    let treasury_seeds = &[
        Marketplace::TREASURY_SEED,
        &[ctx.accounts.config.treasury_bump],
    ];
    invoke_signed(
        &system_instruction::transfer(
            ctx.accounts.treasury.key,
            ctx.accounts.beneficiary.key,
            amount,
        ),
        &[
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.beneficiary.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[&treasury_seeds[..]],
    )?;

    msg!(
        "Proceeds withdrawn: beneficiary={}, amount={}",
        ctx.accounts.beneficiary.key(),
        amount
    );

    emit!(ProceedsWithdrawn {
        beneficiary: ctx.accounts.beneficiary.key(),
        amount,
    });

    Ok(())
}
