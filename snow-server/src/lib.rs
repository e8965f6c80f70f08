//! SNOTEL snow depth server.
//!
//! A web application that answers: "how much snow is on the ground at
//! my stations right now?"

pub mod awdb;
pub mod config;
pub mod domain;
pub mod snow;
pub mod stations;
pub mod web;
