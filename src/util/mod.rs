//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM theme
//! attributes, keyboard chords) and string formatting from page and component
//! logic so the pure parts stay testable natively.

pub mod escape;
pub mod format;
pub mod keyboard;
pub mod storage;
pub mod theme;
