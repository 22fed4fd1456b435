//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `chat`, `profile`, `ui`) so
//! individual components can depend on small focused models. Each struct is
//! plain data transitioned only through named operations; components wrap
//! them in `RwSignal`s provided via context. That keeps every flow
//! deterministic and unit-testable without a rendering harness.

pub mod auth;
pub mod chat;
pub mod profile;
pub mod session;
pub mod ui;
