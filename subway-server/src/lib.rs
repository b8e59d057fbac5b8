//! Subway network server.
//!
//! Manages stations, lines and the track sections that join them, and
//! answers shortest-path queries across the whole network.

pub mod config;
pub mod domain;
pub mod path;
pub mod store;
pub mod web;
