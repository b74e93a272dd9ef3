pub mod common;
pub mod health;
pub mod nutrition;
pub mod prediction;
