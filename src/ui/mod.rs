//! UI module - reusable components

pub mod components;
