//! Screens for the Sui Send desktop client.
//!
//! Every screen is a self-contained Elm-architecture leaf: a state struct
//! with a `Message` enum for user intent, an `update` that returns an
//! `Action` describing what the caller must do, and a `view`. Screens never
//! navigate, persist, or touch the network themselves; the application shell
//! that embeds them owns all of that.

pub mod header;
pub mod screens;
pub mod types;
