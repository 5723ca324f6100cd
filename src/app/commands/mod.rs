pub mod clean;
pub mod generate;
pub mod mirror;
pub mod provision;
