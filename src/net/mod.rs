//! Networking modules for the identity service endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every HTTP exchange with the gateway: the two identity
//! lookups, sign-out, and local-login submission.

pub mod api;
