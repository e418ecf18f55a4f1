//! Tests for HTTP controller endpoints.
//!
//! Controllers are invoked directly with their extractors against an
//! in-memory database, verifying status codes and response bodies for the
//! allocation, catalog, settings, and report routes.

mod allocation;
mod catalog;
mod report;
mod settings;
