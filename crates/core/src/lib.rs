//! Reading session logic. Keep this crate free of IO, terminal and clock concerns.

pub mod cards;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod detail;
pub mod events;
pub mod prompt;
pub mod rng;
pub mod selection;
pub mod session;
pub mod spread;
pub mod tiles;

pub use cards::*;
pub use catalog::*;
pub use config::*;
pub use deck::*;
pub use detail::*;
pub use events::*;
pub use prompt::*;
pub use rng::*;
pub use selection::*;
pub use session::*;
pub use spread::*;
pub use tiles::*;
