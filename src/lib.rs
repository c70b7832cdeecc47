//! Advert Board - job advert board backend
//!
//! Public listing of job adverts plus authenticated, owner-only management
//! of them. Users and identity tokens are issued elsewhere; this crate
//! verifies tokens and stores adverts.

#![allow(missing_docs)]

pub mod adverts;
pub mod api;
pub mod app;
pub mod auth;
pub mod boot;
pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod environment;
pub mod ids;
pub mod policy;
pub mod router;
pub mod setup_tracing;

#[cfg(any(test, feature = "test-utils"))]
pub mod tests;
