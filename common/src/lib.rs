pub mod config;
pub mod error;
pub mod protocol;
pub mod target;

pub use error::CiphrError;
