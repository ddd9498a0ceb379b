pub mod base;
pub mod fixture;
pub mod yahoo;
