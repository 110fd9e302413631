pub mod normalize;
pub mod payload;
pub mod rules;
pub mod types;

pub use payload::*;
pub use types::*;
