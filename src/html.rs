// ABOUTME: HTML assembly module for the reveal-deck compiler
// ABOUTME: Wraps slide sections in reveal.js markup and writes the result

use crate::errors::{DeckError, Result};
use crate::slides::Slide;
use crate::utils;
use log::info;
use std::fs;
use std::path::Path;

/// Document head up to the point where the `<title>` tag goes
const HEAD_OPEN: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />

    "#;

/// Remainder of the document head: reveal.js stylesheets, scripts and layout CSS
const HEAD_CLOSE: &str = r#"
    <link rel="shortcut icon" href="/phys52015/favicon.svg" />
    <link rel="stylesheet"
          href="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/reset.min.css"
          integrity="sha512-Mjxkx+r7O/OLQeKeIBCQ2yspG1P5muhAtv/J+p2/aPnSenciZWm5Wlnt+NOUNA4SHbnBIE/R2ic0ZBiCXdQNUg=="
          crossorigin="anonymous" referrerpolicy="no-referrer" />
    <link rel="stylesheet"
          href="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/reveal.min.css"
          integrity="sha512-WFGU7IgfYR0dq5aORzbD+NApAXdExNZFb7LaoO8olYImBW/iZxAwjKEuT+oYcFR6gOd+DAFssq/icMn8YVbQxQ=="
          crossorigin="anonymous" referrerpolicy="no-referrer" />
    <link rel="stylesheet"
          href="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/theme/solarized.min.css"
          integrity="sha512-sUF1FAUpi9yPXCDOPsRwzh71zrCVkcT4SfwxBlQeHwMbH1aTGcSdI00GRLaH6iXRSBTazGH/u6sGQTc1tGqofg=="
          crossorigin="anonymous" referrerpolicy="no-referrer" />
    <link rel="stylesheet"
          href="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/plugin/highlight/zenburn.min.css"
          integrity="sha512-JPxjD2t82edI35nXydY/erE9jVPpqxEJ++6nYEoZEpX2TRsmp2FpZuQqZa+wBCen5U16QZOkMadGXHCfp+tUdg=="
          crossorigin="anonymous" referrerpolicy="no-referrer" />
    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/reveal.min.js"
            integrity="sha512-K7P1+dtPriNNHlE4aJr+JKx1X6R0wvy24QBqL2CxaHc4XdkQjrH2t2FCrgoxZGMh6s1TgigNLEdrWa6NJra6Zg=="
            crossorigin="anonymous"
            referrerpolicy="no-referrer"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/plugin/markdown/markdown.min.js"
            integrity="sha512-VMIcHSU7cVYRxUYr9l/t/iRO98QUfuTw8inT0mFklWb6HhKwLkjA0F24O42RL39RKGenNEK/TlEWB2NEy8w4Ng=="
            crossorigin="anonymous"
            referrerpolicy="no-referrer"></script>

    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/plugin/highlight/highlight.min.js"
            integrity="sha512-NVdqCvsrfhXUYzGTEGGBFf5jxheVVcglfdvO8r+WdG0BKMrRYvaiCGIC0S+wf4hkE3Xq43gTd1k3Mwl/UNgdvw=="
            crossorigin="anonymous"
            referrerpolicy="no-referrer"></script>

    <script src="https://cdnjs.cloudflare.com/ajax/libs/reveal.js/4.1.2/plugin/math/math.min.js"
            integrity="sha512-3HmB6PODGpVVNHOzPd/iva9nhAtO8o5lNh8ukjgcswV+iQTRZFqdMWJW25dvcSploiX4I4M6uuUKIV9BaogQhw=="
            crossorigin="anonymous" referrerpolicy="no-referrer"></script>
<style type="text/css">
  .container {
      display: flex;
  }
  .col {
      flex: 1;
  }
  .reveal p {
      text-align: left;
  }
  .reveal .center {
      margin-left: auto;
      margin-right: auto;
      display: inline-block;
  }
  .reveal ul {
      display: block;
  }
  .reveal ol {
      display: block;
  }
  .reveal img {
      margin-left: auto;
      margin-right: auto;
      display: block;
  }
</style>
</head>"#;

/// reveal.js initialisation, appended after the slides
const FOOTER: &str = r#"<script>
  function extend() {
    var target = {};
    for (var i = 0; i < arguments.length; i++) {
      var source = arguments[i];
      for (var key in source) {
        if (source.hasOwnProperty(key)) {
          target[key] = source[key];
        }
      }
    }
    return target;
  }

  // default options to init reveal.js
  var defaultOptions = {
    controls: true,
    progress: true,
    history: true,
    slideNumber: true,
    center: true,
    transition: 'none', // none/fade/slide/convex/concave/zoom
    plugins: [
      RevealMarkdown,
      RevealHighlight,
      RevealMath,
    ],
    markdown: {smartypants: true}
  };

  // options from URL query string
  var queryOptions = Reveal().getQueryHash() || {};

  var options = extend(defaultOptions, {}, queryOptions);
</script>


<script>
  Reveal.initialize(options);
</script>"#;

const SECTION_OPEN: &str = "<section data-markdown><textarea data-template>";
const SECTION_CLOSE: &str = "</textarea></section>";

/// Render the document head, with a `<title>` tag only when a title is known
fn header(title: Option<&str>) -> String {
    let title_tag = title
        .map(|t| format!("<title>{}</title>", t))
        .unwrap_or_default();
    format!("{}{}{}", HEAD_OPEN, title_tag, HEAD_CLOSE)
}

/// Assemble a complete reveal.js document from parsed slides.
///
/// Each slide becomes an outer `<section>` and each of its sections a nested
/// markdown `<section>` whose raw text is left for reveal.js to render.
pub fn render_deck(title: Option<&str>, slides: &[Slide]) -> String {
    let mut lines = vec![
        header(title),
        "<body>".to_string(),
        r#"<div class="reveal">"#.to_string(),
        r#"<div class="slides">"#.to_string(),
    ];

    for slide in slides {
        lines.push("<section>".to_string());
        for section in &slide.sections {
            lines.push(SECTION_OPEN.to_string());
            lines.push(format!("\n{}\n", section));
            lines.push(SECTION_CLOSE.to_string());
        }
        lines.push("</section>".to_string());
    }

    lines.push("</div>".to_string());
    lines.push("</div>".to_string());
    lines.push(FOOTER.to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    lines.join("\n")
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    utils::ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, html_content).map_err(DeckError::FileReadError)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(sections: &[&str]) -> Slide {
        Slide {
            sections: sections.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_title_tag_present() {
        let html = render_deck(Some("Demo"), &[slide(&["Hello"])]);
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains("<title>Demo</title>"));
    }

    #[test]
    fn test_title_tag_omitted() {
        let html = render_deck(None, &[slide(&["Hello"])]);
        assert!(!html.contains("<title>"));
    }

    #[test]
    fn test_document_shape() {
        let html = render_deck(None, &[slide(&["A"]), slide(&["B", "C"])]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</body>\n</html>"));
        assert!(html.contains("<body>\n<div class=\"reveal\">\n<div class=\"slides\">\n<section>\n"));
        assert_eq!(html.matches("<section>").count(), 2);
        assert_eq!(html.matches(SECTION_OPEN).count(), 3);
        assert!(html.contains(
            "<section>\n<section data-markdown><textarea data-template>\n\nB\n\n</textarea></section>\n\
             <section data-markdown><textarea data-template>\n\nC\n\n</textarea></section>\n</section>"
        ));
    }

    #[test]
    fn test_section_text_is_not_escaped() {
        let html = render_deck(None, &[slide(&["<b>bold</b> & `code`"])]);
        assert!(html.contains("\n<b>bold</b> & `code`\n"));
    }

    #[test]
    fn test_reveal_boilerplate() {
        let html = render_deck(None, &[slide(&["x"])]);
        assert!(html.contains("reveal.js/4.1.2/reveal.min.js"));
        assert!(html.contains("plugin/markdown/markdown.min.js"));
        assert!(html.contains("Reveal.initialize(options);"));
    }

    #[test]
    fn test_write_html_to_file_creates_parent() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let output = dir.path().join("out").join("deck.html");
        write_html_to_file("<html></html>", &output).expect("Failed to write HTML");
        assert_eq!(
            std::fs::read_to_string(&output).expect("Failed to read HTML"),
            "<html></html>"
        );
    }
}
