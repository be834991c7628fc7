// SPDX-License-Identifier: MPL-2.0
//! Receipt scanner screen.
//!
//! - [`flow`] - the screen's state machine and its async operations
//! - [`component`] - Iced glue: messages, effects, sessions
//! - [`view`] - rendering per state

pub mod component;
pub mod flow;
mod view;

pub use component::{Effect, Message, ScanTimings, Services, State};
pub use flow::ScanScreenState;
