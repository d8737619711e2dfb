// Resume composition engine.
// Turns structured resume content plus layout preferences into a styled
// document tree for the live preview, and into HTML markup for export.
// Pure and deterministic: no I/O below the handlers.

pub mod columns;
pub mod document;
pub mod gate;
pub mod handlers;
pub mod header;
pub mod markup;
pub mod profile;
pub mod registry;
pub mod sample;
pub mod sections;
pub mod tokens;
pub mod tree;
pub mod variants;

pub use registry::StyleRegistry;
