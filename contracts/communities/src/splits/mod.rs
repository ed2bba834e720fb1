pub mod controllers;
pub mod create;
pub mod deposit;
pub mod distribute;
pub mod types;
pub mod update;
pub mod views;
pub mod withdraw;

pub use distribute::proportional;
pub use types::{Asset, Split};
