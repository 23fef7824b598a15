// SPDX-License-Identifier: MPL-2.0
//! UI components and shared visual vocabulary.

pub mod components;
pub mod design_tokens;
pub mod home;
pub mod map_view;
pub mod navbar;
pub mod picker;
pub mod styles;
pub mod theming;
