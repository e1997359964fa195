//! # Nuber core
//!
//! Renderer-independent logic behind the Nuber web client:
//!
//! - [`auth`]: the authenticated flag and the session oracle seam that
//!   produces it once per app load
//! - [`routes`]: the two static route tables and the ordered scan that
//!   resolves a path against the active one
//! - [`phone`]: phone number validation and the login form reducer
//! - [`notify`]: the injected notification sink
//! - [`theme`]: the theme record and the global stylesheet derived from it
//! - [`config`]: environment-driven client configuration
//!
//! ```text
//! SessionOracle ──► AuthState ──► select_routes() ──► RouteTable::resolve(path)
//!                                                        │
//!                                   Render { page } ◄────┴────► Redirect { to: "/" }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod notify;
pub mod phone;
pub mod routes;
pub mod theme;

pub use auth::{AuthState, SessionOracle};
pub use config::{Config, SessionSource};
pub use error::{SessionError, ValidationError};
pub use notify::{MemorySink, NotificationSink};
pub use phone::{submit, validate, PhoneAction, PhoneForm, SubmitOutcome};
pub use routes::{select_routes, Page, Resolution, RouteTable, RouteTableKind};
pub use theme::Theme;
