pub mod create;
pub mod ids;
pub mod managers;
pub mod metadata;
pub mod mint;
pub mod roles;
pub mod royalties;
pub mod transfer;
pub mod types;
pub mod views;

pub use types::{Community, ManagerKind, TokenManager, TokenRecord};
