// ABOUTME: Slide and section splitting for slide documents
// ABOUTME: Breaks a body on exact `------` and `--->` delimiter lines

use crate::utils::line_content;

/// Line separating two slides
pub const SLIDE_DELIMITER: &str = "------";

/// Line separating two sections of the same slide
pub const SECTION_DELIMITER: &str = "--->";

/// A top-level slide made of one or more vertically stacked sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Trimmed raw markdown of each section, in document order
    pub sections: Vec<String>,
}

/// Split a document body into slides and sections.
///
/// Always yields at least one slide and every slide holds at least one
/// section. Only lines that are exactly a delimiter split the text.
pub fn split(body: &str) -> Vec<Slide> {
    split_on_line(body, SLIDE_DELIMITER)
        .into_iter()
        .map(|slide| Slide {
            sections: split_on_line(slide, SECTION_DELIMITER)
                .into_iter()
                .map(|section| section.trim().to_string())
                .collect(),
        })
        .collect()
}

fn split_on_line<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line_content(line) == delimiter {
            fragments.push(&text[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    fragments.push(&text[start..]);

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(slides: &[Slide]) -> Vec<Vec<&str>> {
        slides
            .iter()
            .map(|s| s.sections.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_slides_and_sections() {
        let slides = split("A\n------\nB\n--->\nC");
        assert_eq!(sections(&slides), vec![vec!["A"], vec!["B", "C"]]);
    }

    #[test]
    fn test_no_delimiters_is_one_slide() {
        let slides = split("# Only\n\nsome text\n");
        assert_eq!(sections(&slides), vec![vec!["# Only\n\nsome text"]]);
    }

    #[test]
    fn test_empty_body() {
        let slides = split("");
        assert_eq!(sections(&slides), vec![vec![""]]);
    }

    #[test]
    fn test_slide_count_follows_delimiter_count() {
        for k in 0..5 {
            let body = vec!["text"; k + 1].join("\n------\n");
            assert_eq!(split(&body).len(), k + 1);
        }
    }

    #[test]
    fn test_section_count_and_order() {
        let slides = split("one\n--->\ntwo\n--->\nthree\n------\nfour");
        assert_eq!(
            sections(&slides),
            vec![vec!["one", "two", "three"], vec!["four"]]
        );
    }

    #[test]
    fn test_sections_are_trimmed() {
        let slides = split("\n\n  # Title  \n\n--->\n\t- item\n\n");
        assert_eq!(sections(&slides), vec![vec!["# Title", "- item"]]);
    }

    #[test]
    fn test_near_miss_delimiters_do_not_split() {
        let body = "A\n------ \nB\n ------\nC\n-------\nD\n---> \nE\n  --->\nF";
        let slides = split(body);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].sections.len(), 1);
    }

    #[test]
    fn test_delimiter_inside_a_line_does_not_split() {
        let slides = split("arrows ---> here\ndashes ------ there");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].sections.len(), 1);
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        let slides = split("------\nA\n------");
        assert_eq!(sections(&slides), vec![vec![""], vec!["A"], vec![""]]);
    }

    #[test]
    fn test_crlf_delimiters() {
        let slides = split("A\r\n------\r\nB\r\n--->\r\nC");
        assert_eq!(sections(&slides), vec![vec!["A"], vec!["B", "C"]]);
    }
}
