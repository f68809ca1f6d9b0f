//! idevgames-frontend library root.
//!
//! The iDevGames front-end: application context, the login flow, the
//! paginated snippet lists, and the admin-only snippet forms. The
//! `idevgames` binary is a terminal shell over these modules; integration
//! tests drive them directly with stub APIs.

pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod list;
pub mod pages;
pub mod render;
pub mod session;

pub use crate::context::AppContext;
pub use crate::error::FrontendError;
