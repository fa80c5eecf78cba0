//! SkillSwap candidate feed.
//!
//! Turns the SkillSwap backend's users, profiles and swipes into a per-viewer
//! feed of candidates and records like/pass decisions against it.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod feed;
pub mod geo;
pub mod models;
pub mod services;
