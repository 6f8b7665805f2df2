//! Frontend module for the CyberGym client.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
