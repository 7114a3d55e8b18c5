//! Builder utilities for verb handler types
//!
//! This module contains convenience constructors for [`OaiRequest`],
//! including parsing of raw query strings.
//!
//! [`OaiRequest`]: crate::verb_handler::OaiRequest

pub mod request;
