use log::trace;

use crate::error::FetchError;
use crate::fetcher::Parser;

const START_MARKERS: [&str; 2] = [
    "*** START OF THE PROJECT GUTENBERG EBOOK",
    "*** START OF THIS PROJECT GUTENBERG EBOOK",
];

const END_MARKERS: [&str; 2] = [
    "*** END OF THE PROJECT GUTENBERG EBOOK",
    "*** END OF THIS PROJECT GUTENBERG EBOOK",
];

/// Plain-text rendition of one book. The archive wraps the text in license
/// boilerplate delimited by START/END marker lines; `parse` strips it when
/// the markers are present.
pub struct BookText {
    id: u32,
    content_url: String,
    request_data: Option<String>,
}

impl BookText {
    pub fn new(id: u32, content_url: String) -> BookText {
        BookText {
            id,
            content_url,
            request_data: None,
        }
    }

    /// Body between the START marker line and the END marker. Unmarked text
    /// passes through whole.
    pub fn strip_boilerplate(raw: &str) -> &str {
        let mut body = raw;

        for marker in &START_MARKERS {
            if let Some(idx) = body.find(marker) {
                let after = &body[idx + marker.len()..];

                // the marker line ends with the book title and "***"
                body = match after.find('\n') {
                    Some(nl) => &after[nl + 1..],
                    None => after,
                };

                break;
            }
        }

        for marker in &END_MARKERS {
            if let Some(idx) = body.find(marker) {
                body = &body[..idx];
                break;
            }
        }

        body.trim()
    }
}

impl Parser for BookText {
    type RequestData = String;
    type ParseData = String;

    fn request_data(&self) -> Result<&Self::RequestData, FetchError> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(FetchError::ParseFailure(String::from(
                "book text was not requested yet",
            ))),
        }
    }

    fn url(&self) -> String {
        self.content_url.clone()
    }

    fn request(mut self) -> Result<Box<Self>, FetchError> {
        trace!("BookText::request()");

        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(FetchError::Unreachable)?;

        let response = client
            .get(self.url().as_str())
            .send()
            .map_err(FetchError::Unreachable)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(self.id));
        }

        let response = response.error_for_status().map_err(FetchError::Unreachable)?;

        let text = response
            .text()
            .map_err(|err| FetchError::ParseFailure(err.to_string()))?;

        self.request_data = Some(text);
        Ok(Box::new(self))
    }

    fn parse(&self) -> Result<Self::ParseData, FetchError> {
        trace!("BookText::parse()");

        let body = Self::strip_boilerplate(self.request_data()?);

        if body.is_empty() {
            return Err(FetchError::ParseFailure(format!(
                "empty text body for identifier {}",
                self.id
            )));
        }

        Ok(String::from(body))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FetchError;

    use super::{BookText, Parser};

    #[test]
    fn strip_boilerplate_cuts_header_and_footer() {
        let raw = "\
The Project Gutenberg eBook of Pride and Prejudice
License terms and produced-by credits go here.

*** START OF THE PROJECT GUTENBERG EBOOK PRIDE AND PREJUDICE ***

It is a truth universally acknowledged, that a single man in
possession of a good fortune, must be in want of a wife.

*** END OF THE PROJECT GUTENBERG EBOOK PRIDE AND PREJUDICE ***

More license text.";

        let body = BookText::strip_boilerplate(raw);

        assert!(body.starts_with("It is a truth universally acknowledged"));
        assert!(body.ends_with("must be in want of a wife."));
        assert!(!body.contains("License terms"));
        assert!(!body.contains("More license text"));
    }

    #[test]
    fn strip_boilerplate_handles_this_marker_variant() {
        let raw = "\
header
*** START OF THIS PROJECT GUTENBERG EBOOK FRANKENSTEIN ***
You will rejoice to hear that no disaster has accompanied
*** END OF THIS PROJECT GUTENBERG EBOOK FRANKENSTEIN ***
footer";

        let body = BookText::strip_boilerplate(raw);

        assert_eq!(
            "You will rejoice to hear that no disaster has accompanied",
            body
        );
    }

    #[test]
    fn unmarked_text_passes_through_whole() {
        let raw = "  Two households, both alike in dignity  ";

        assert_eq!(
            "Two households, both alike in dignity",
            BookText::strip_boilerplate(raw)
        );
    }

    #[test]
    fn empty_body_is_a_parse_failure() {
        let raw = "\
*** START OF THE PROJECT GUTENBERG EBOOK NOTHING ***
*** END OF THE PROJECT GUTENBERG EBOOK NOTHING ***";

        let text = BookText {
            id: 9000,
            content_url: String::from("https://www.gutenberg.org/ebooks/9000.txt.utf-8"),
            request_data: Some(String::from(raw)),
        };

        match text.parse() {
            Err(FetchError::ParseFailure(_)) => {}
            other => panic!("expected ParseFailure, got {:?}", other),
        }
    }
}
