#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod common;
mod config;
mod coordinate;
mod engagement;
#[cfg(feature = "std")]
mod logging;
mod marker;
mod mask;
mod navy;
mod ocean;
mod ship;
pub mod snapshot;
#[cfg(feature = "std")]
pub mod store;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use engagement::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use marker::*;
pub use mask::{HitMask, MaskError, SegmentMask};
pub use navy::*;
pub use ocean::*;
pub use ship::*;
pub use snapshot::{NavySnapshot, ShipSnapshot};
#[cfg(feature = "std")]
pub use store::{FileStore, InMemoryStore, SnapshotKey, SnapshotStore};
