//! UI module - contains UI rendering components

pub mod components;
pub mod grayscale;
