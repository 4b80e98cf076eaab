//! Remote invoicing API access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote service owns all data (users, clients, projects, delivery
//! notes) behind a bearer-token REST contract. This module is the single
//! place that builds, authorizes and normalizes those calls: resource
//! modules (`auth`, `clients`, `projects`, `delivery_notes`) describe one
//! endpoint each and hand a [`Descriptor`] to [`ApiClient`], which returns a
//! typed result every caller must branch on.

pub mod auth;
pub mod clients;
pub mod delivery_notes;
pub mod error;
pub mod http;
pub mod models;
pub mod projects;

pub use error::ApiError;
pub use http::{ApiClient, Descriptor};
