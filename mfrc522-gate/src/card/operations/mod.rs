pub mod anticollision;
pub mod request;

pub use anticollision::{acquire_identifier, anticollision};
pub use request::request;
