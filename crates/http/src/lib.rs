//! Autodash HTTP client
//!
//! Typed access to the Autodash inventory and maintenance backend: bearer
//! authentication, per-request timeouts and normalized errors, with the
//! browser-facing pieces (token storage, navigation, notifications,
//! timers) injected through the traits in [`client::session`].

#[macro_use]
extern crate tracing;

pub mod client;

pub use client::{
    ApiConfig, AppConfig, ClientError, Credentials, DashboardClient, DashboardClientBuilder,
    DateRange, ErrorKind, ReportKind, RequestOptions,
};
