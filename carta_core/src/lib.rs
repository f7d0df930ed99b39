//! Core domain types shared between the Carta API server and its
//! (potential) API clients: strongly-typed ids, the tax resolution rule,
//! and all API request and response models.

pub mod api_models;
pub mod ids;
pub mod tax;
