use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod emporium {
    use super::*;

    /// Initialize marketplace configuration and treasury
    pub fn initialize(ctx: Context<Initialize>, fee_percent: u8) -> Result<()> {
        initialize::handler(ctx, fee_percent)
    }

    /// List an NFT at a fixed price, moving it into escrow
    pub fn list_item(ctx: Context<ListItem>, price: u64) -> Result<()> {
        list_item::handler(ctx, price)
    }

    /// Change the asking price of an active listing
    pub fn update_listing(ctx: Context<UpdateListing>, new_price: u64) -> Result<()> {
        update_listing::handler(ctx, new_price)
    }

    /// Cancel a listing and return the NFT to its seller
    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        cancel_listing::handler(ctx)
    }

    /// Buy a listed NFT; proceeds are credited for pull-payment withdrawal
    pub fn buy_item(ctx: Context<BuyItem>, amount: u64) -> Result<()> {
        buy_item::handler(ctx, amount)
    }

    /// Withdraw the caller's accumulated sale proceeds
    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
        withdraw_proceeds::handler(ctx)
    }

    /// Update the protocol fee percent (applies to future sales)
    pub fn set_fee_percent(ctx: Context<SetFeePercent>, new_fee_percent: u8) -> Result<()> {
        admin::set_fee_percent(ctx, new_fee_percent)
    }

    /// Disable listing, price updates and purchases
    pub fn pause(ctx: Context<SetPauseState>) -> Result<()> {
        admin::pause(ctx)
    }

    /// Re-enable the marketplace
    pub fn unpause(ctx: Context<SetPauseState>) -> Result<()> {
        admin::unpause(ctx)
    }

    /// Hand administrator rights to a new identity
    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        admin::transfer_admin(ctx, new_admin)
    }

    /// Force-release an escrowed NFT to a chosen recipient
    pub fn admin_recover(ctx: Context<AdminRecover>) -> Result<()> {
        admin_recover::handler(ctx)
    }
}
