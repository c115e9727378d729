//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions and body decoding
//! - `state.rs` — Observable state containers
//! - `client.rs` — Sub-client with HTTP methods

pub mod oil_price;
