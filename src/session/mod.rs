//! Conversion session management
//!
//! This module provides the `ConversionSession` abstraction that owns the
//! mutable state the core pipeline deliberately does not:
//! - The currently held parsed transcript (one per upload)
//! - The current format options (presets and field-by-field updates)
//! - The rendered document, recomputed on every option change

mod session;

pub use session::ConversionSession;
