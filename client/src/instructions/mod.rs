pub mod buy_dmd;
pub mod claim_reward;
pub mod initialize;
pub mod sell_dmd;
pub mod toggle_public_sale;
pub mod whitelist_add;

pub use buy_dmd::*;
pub use claim_reward::*;
pub use initialize::*;
pub use sell_dmd::*;
pub use toggle_public_sale::*;
pub use whitelist_add::*;
