#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

//! # ThemeZone
//!
//! A terminal storefront whose whole presentation follows one of three
//! theme modes: minimalist light with a top header, a dark dashboard with a
//! sidebar, and a colorful grid. The active mode is owned by a
//! [`theme_state::ThemeAuthority`]; this crate renders it.
//!
//! The library is shared by the binary and the integration tests.
//!
//! ## Public Modules
//!
//! - [`app`] - Application model, routing and shell rendering
//! - [`program`] - Terminal event loop
//! - [`pages`] - Home, About and Contact pages
//! - [`components`] - Header, sidebar, theme selector, product cards
//! - [`headless`] - Frame rendering without a terminal
//! - [`config`] / [`cli`] / [`logging`] - Runtime setup

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod content;
pub mod headless;
pub mod logging;
pub mod marker;
pub mod messages;
pub mod pages;
pub mod program;
pub mod text;
pub mod theme;
