pub mod clock;
mod errors;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::Error;

pub type CinedexResult<T> = Result<T, Error>;
