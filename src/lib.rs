pub mod binner;
pub mod config;
pub mod error;
pub mod export;
pub mod histogram;
pub mod layout;
pub mod sampler;
pub mod stats;
