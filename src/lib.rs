//! Blogapp - blog administration backend.
//!
//! Users register the blogs they write for, keep articles against them, and
//! ask a Gemini model for first drafts. Administrators moderate accounts and
//! content across the site.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
