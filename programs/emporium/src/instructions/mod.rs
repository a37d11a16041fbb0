pub mod admin;
pub mod admin_recover;
pub mod buy_item;
pub mod cancel_listing;
pub mod initialize;
pub mod list_item;
pub mod update_listing;
pub mod withdraw_proceeds;

pub use admin::*;
pub use admin_recover::*;
pub use buy_item::*;
pub use cancel_listing::*;
pub use initialize::*;
pub use list_item::*;
pub use update_listing::*;
pub use withdraw_proceeds::*;
