//! Market line module
//!
//! Quoted lines as supplied by the odds collaborator, the keyed
//! first-observed-line store, and line movement analysis.

mod movement;
mod store;
mod types;

pub use movement::{assess, LineMovement, MovementTag};
pub use store::{InMemoryLineStore, LineStore};
pub use types::{GameRecord, MarketLine, PublicBias, Quote};
