//! Shared fixtures for end-to-end tests
//!
//! Each test binary uses a different subset of these helpers.

#![allow(dead_code)]

pub mod config;
pub mod mock_provider;
