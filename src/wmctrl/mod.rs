//! `wmctrl`-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait on any EWMH-compliant
//! X11 window manager, by shelling out to `wmctrl`.
//!
//! Nothing outside this module should reference `wmctrl` directly.

pub mod wm;
