//! hello-zynq
//! ===========
//!
//! Example package of ZUR (ZynqOS User Repository).
//! Prints a banner, the current local time, and greets the name given
//! as the first command-line argument.

pub mod banner;
pub mod error;

mod greeter;
mod timestamp;

pub use greeter::{Greeter, Greeting};
pub use timestamp::Timestamp;
