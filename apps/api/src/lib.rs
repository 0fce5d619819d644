//! Restaurants API Library
//!
//! This library provides the restaurant resource: domain types, the
//! repository port with its PostgreSQL and in-memory adapters, and the
//! HTTP layer built on axum.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
