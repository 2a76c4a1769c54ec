pub mod vault;
pub mod token_vault;

pub use vault::*;
pub use token_vault::*;
