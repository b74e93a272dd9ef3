pub mod entities;
pub mod feature_row;
pub mod risk;

pub use entities::*;
pub use feature_row::*;
pub use risk::*;
