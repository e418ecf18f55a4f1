//! Server application core modules.
//!
//! This module contains all server-side functionality for the Tokenboard
//! application: HTTP routing, master catalog lookups, allocation bookkeeping
//! (token-cap enforcement and planning-to-real synchronization), report
//! generation, and database access.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
