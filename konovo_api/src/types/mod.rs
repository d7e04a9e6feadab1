mod auth;
pub use self::auth::{LoginRequest, TokenResponse};

mod product;
pub use self::product::Product;
