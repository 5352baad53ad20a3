//! Kinship: the client core of a family engagement platform.
//!
//! Four features share one shape: a [`backend::Backend`] holds each
//! collection, a [`service`] wraps it with fail-closed operations and a
//! published snapshot, and a [`list::ListController`] pages through it for
//! display. The [`cli`] module stands in for the app's pages.

pub mod backend;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod list;
pub mod model;
pub mod publish;
pub mod scoring;
pub mod service;
pub mod session;
