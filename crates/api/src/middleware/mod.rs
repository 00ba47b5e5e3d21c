//! Request middleware.
//!
//! - [`gate::route_gate`] -- Redirects `/` and `/login` based on whether the
//!   session cookie is present.

pub mod gate;
