//! Text munging for the catalog pages: plain-text previews, library detection
//! and Markdown rendering of stored overviews.

pub mod libraries;
pub mod markdown;
pub mod preview;
