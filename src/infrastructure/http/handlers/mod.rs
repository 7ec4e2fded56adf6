//! HTTP Handlers

mod names;
mod ping;
mod welcome;

pub use names::*;
pub use ping::*;
pub use welcome::*;
