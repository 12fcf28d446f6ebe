// ABOUTME: Library module for the reveal-deck compiler.
// ABOUTME: Parses delimiter-separated markdown and emits reveal.js HTML decks.

// Reexport modules
pub mod config;
pub mod document;
pub mod errors;
pub mod frontmatter;
pub mod html;
pub mod input;
pub mod slides;
pub mod utils;
pub mod watch;

// Reexport common types and functions
pub use config::Config;
pub use document::{Deck, compile_file, load_deck};
pub use errors::{DeckError, Result};
pub use html::{render_deck, write_html_to_file};
pub use input::{InputSource, Job};
pub use slides::Slide;
pub use watch::{Mode, PassReport, WatchConfig, run, run_pass};
