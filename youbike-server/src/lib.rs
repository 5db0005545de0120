//! YouBike station availability server.
//!
//! Fetches live station availability for Taipei's YouBike 2.0 network and
//! serves it, searchable by district or station name.

pub mod config;
pub mod stations;
pub mod web;
