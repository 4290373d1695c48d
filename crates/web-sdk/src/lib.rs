//! Server-side rendering of Google Analytics `_gaq` tracking snippets for
//! HTML pages.
//!
//! # Modules
//!
//! - [`events`]: The tracking calls the `_gaq` queue understands
//! - [`queue`]: Ordered event queue and its line renderer
//! - [`helpers`]: View helpers producing `<script>` tags
//! - [`markup`]: Pre-escaped output and script-safe literals

pub mod events;
pub mod helpers;
pub mod markup;
pub mod queue;

pub use events::{CustomVarScope, Item, TrackingEvent, Transaction};
pub use helpers::{InitOptions, ViewHelpers};
pub use markup::SafeHtml;
pub use queue::EventQueue;
