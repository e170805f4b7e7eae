//! Shared data model for the carousel tray engine.
//!
//! This crate holds the types every other layer speaks in: geometric
//! primitives, unit newtypes, the slider configuration, and the shared
//! position store that owns the authoritative current-slide index.

pub mod config;
pub mod geometry;
pub mod store;
pub mod unit;

pub use config::SliderConfig;
pub use geometry::{Orientation, Point, Size};
pub use store::{
    CarouselStore, SliderStateStore, SpinnerTelemetry, StateUpdate, StoreState, SubscriptionId,
};
pub use unit::{Pct, Px};
