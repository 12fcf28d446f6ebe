// ABOUTME: Document compilation for the reveal-deck compiler
// ABOUTME: Loads a source file and runs front matter, splitting and assembly

use crate::errors::{DeckError, Result};
use crate::frontmatter;
use crate::html;
use crate::slides::{self, Slide};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// A parsed slide document, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub title: Option<String>,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Parse the raw text of a slide document
    pub fn parse(text: &str) -> Result<Self> {
        let front_matter = frontmatter::extract(text)?;
        Ok(Self {
            title: front_matter.title,
            slides: slides::split(front_matter.body),
        })
    }

    /// Total number of sections across all slides
    pub fn section_count(&self) -> usize {
        self.slides.iter().map(|s| s.sections.len()).sum()
    }

    pub fn to_html(&self) -> String {
        html::render_deck(self.title.as_deref(), &self.slides)
    }
}

/// Read and parse a slide document, warning when it carries no title
pub fn load_deck(markdown_path: &Path) -> Result<Deck> {
    let text = fs::read_to_string(markdown_path).map_err(DeckError::FileReadError)?;
    let deck = Deck::parse(&text)?;

    if deck.title.is_none() {
        warn!("No title found in {:?}", markdown_path);
    }

    Ok(deck)
}

/// Compile a slide document into an HTML file.
///
/// The whole document is parsed and rendered before anything is written, so
/// a malformed source never leaves a partial output behind.
pub fn compile_file(markdown_path: &Path, output_path: &Path) -> Result<Deck> {
    info!("Compiling {:?} -> {:?}", markdown_path, output_path);

    let deck = load_deck(markdown_path)?;
    html::write_html_to_file(&deck.to_html(), output_path)?;

    info!(
        "Generated {:?}: {} slides, {} sections",
        output_path,
        deck.slides.len(),
        deck.section_count()
    );
    Ok(deck)
}
