//! Network layer: service configuration, wire types, REST helpers, and the
//! streaming chat consumer.
//!
//! DESIGN
//! ======
//! Everything that touches the browser network stack is gated behind the
//! `web` feature; the framing and record-decoding pipeline in [`stream`] is
//! pure and runs (and is tested) on the host.

pub mod api;
pub mod chat_client;
pub mod config;
pub mod stream;
pub mod types;
