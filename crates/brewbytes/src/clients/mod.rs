//! Typed clients over the floor actor.

pub mod cafe_client;

pub use cafe_client::CafeClient;
