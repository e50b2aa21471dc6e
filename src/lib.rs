pub mod analysis;
pub mod bot;
pub mod config;
pub mod dice;
pub mod error;
pub mod types;

pub use bot::run;
