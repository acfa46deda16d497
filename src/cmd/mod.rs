pub mod export;
pub mod simulate;
