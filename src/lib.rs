mod error;
pub use error::*;
mod store;
pub use store::*;
mod user;
pub use user::*;
