//! Common types and utilities for rpcdoc.
//!
//! This crate provides foundational pieces shared by every rpcdoc crate:
//! - Parser and resolver limits
//! - Helpers for qualified JVM type names (`com.example.Foo`, `java/util/List`)

// Centralized limits and thresholds
pub mod limits;

// Qualified type name helpers
pub mod names;
pub use names::{erased_element_name, raw_class_name, simple_name};
