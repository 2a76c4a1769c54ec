pub mod custody;
pub mod swap;
pub mod admin;

pub use custody::*;
pub use swap::*;
pub use admin::*;
