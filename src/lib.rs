// SPDX-License-Identifier: MPL-2.0
//! `terramap` is a regional map data explorer built with the Iced GUI
//! framework.
//!
//! It loads the list of selectable regions from a directory service, lets the
//! user pick one, and presents a map view with a side data panel and a
//! bounded year timeline. It demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod directory;
pub mod error;
pub mod i18n;
pub mod ui;
