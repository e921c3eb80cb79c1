// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a toast notification system for Iced applications.
//!
//! It provides a bounded toast queue with per-toast expiry timers, a
//! dispatch facade for showing toasts without a reference to the queue,
//! and widgets rendering the stack at one of six screen anchors.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod toast;
pub mod ui;
