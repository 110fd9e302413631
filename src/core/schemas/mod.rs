pub mod requests;
pub mod status;
pub mod views;

pub use requests::*;
pub use status::*;
pub use views::*;
