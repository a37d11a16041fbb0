use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Listing price must be greater than zero")]
    InvalidPrice,

    #[msg("Fee percent exceeds the 20% cap")]
    FeeTooHigh,

    #[msg("Caller does not own this asset or listing")]
    NotOwner,

    #[msg("Account does not match the recorded marketplace state")]
    NotAuthorized,

    #[msg("Only the marketplace administrator can perform this action")]
    NotAdministrator,

    #[msg("Asset is already listed")]
    AlreadyListed,

    #[msg("Asset is not listed")]
    NotListed,

    #[msg("No proceeds available to withdraw")]
    NoProceeds,

    #[msg("Offered amount is below the asking price")]
    PriceNotMet,

    #[msg("Marketplace is paused")]
    Paused,

    #[msg("Unsupported mint (must be a standard SPL token NFT)")]
    UnsupportedMint,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
