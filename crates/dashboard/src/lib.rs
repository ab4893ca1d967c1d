// File: crates/dashboard/src/lib.rs
// Summary: Dashboard crate entry point; page state, role gate and refresh feed.

//! Bastion dashboard
//!
//! Host-page side of the chart renderer: per-page view state, a UX-level
//! role gate, and a cancellable, time-bounded refresh of panel series.

pub mod access;
pub mod error;
pub mod feed;
pub mod page;
pub mod panel;

pub use access::{AccessDenied, Principal, Role, ViewGate};
pub use error::FeedError;
pub use feed::{refresh_page, refresh_panel, CancelToken, MetricSource, MockSource, RefreshPolicy};
pub use page::{PageKind, PageState};
pub use panel::{PanelState, PanelStatus};
