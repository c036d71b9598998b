//! UI module - contains UI rendering components
//!
//! This module organizes reusable UI rendering code for the application.

pub mod components;
