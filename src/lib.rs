//! Client-side state core for the Tableside restaurant app.
//!
//! The crate holds everything the screens need that is not rendering: a
//! domain store with three independently loadable slices (dishes, comments,
//! favorites), pure reducers over closed intent enums, the reservation form
//! state machine, and the sequential side-effect pipeline that mirrors a
//! confirmed reservation into the device calendar and a local notification.
//!
//! The view layer, navigation and platform services stay outside the crate
//! and are reached through the trait contracts in [`ports`].

pub mod config;
pub mod domain;
pub mod mvi;
pub mod ports;
pub mod remote;
pub mod reservation;
pub mod store;
pub mod telemetry;
