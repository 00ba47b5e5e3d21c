//! Domain types and pure logic for the Pazarin dashboard.
//!
//! Nothing in this crate performs I/O. The relay server, the CMS client and
//! the dashboard controllers all build on these types.

pub mod entity;
pub mod error;
pub mod form;
pub mod format;
pub mod gate;
pub mod image;
pub mod modal;
pub mod product;
pub mod query;
pub mod relay;
pub mod session;
pub mod shop;
pub mod snackbar;
pub mod theme;
pub mod types;
pub mod upload;
pub mod user;
