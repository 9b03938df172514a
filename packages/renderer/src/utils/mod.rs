//! Utility functions for the renderer
//!
//! This module provides markdown rendering and code block formatting helpers.

mod markdown;

pub use markdown::{
    encode_languages, has_fenced_code, inject_code_formatting, inject_substitutions,
    render_markdown,
};
