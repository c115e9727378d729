//! HTTP client layer — `OpinetHttp`.

pub mod client;

pub use client::OpinetHttp;
