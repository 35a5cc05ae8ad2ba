use log::trace;
use scraper::{Html, Selector};

use crate::error::FetchError;
use crate::fetcher::Parser;

/// What the archive's metadata page yields for one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub author: Option<String>,
    /// href of the "Plain Text UTF-8" link, usually relative to the archive
    /// base.
    pub text_path: String,
}

/// ```html
/// <!-- Response of https://www.gutenberg.org/ebooks/1342 -->
/// <html>
/// <head>
/// <title>Pride and Prejudice by Jane Austen | Project Gutenberg</title>
/// </head>
/// <body>
/// <table class="files">
/// <tr><td><a href="/ebooks/1342.txt.utf-8" class="link">Plain Text UTF-8</a></td></tr>
/// <tr><td><a href="/ebooks/1342.epub3.images" class="link">EPUB3</a></td></tr>
/// </table>
/// </body>
/// </html>
/// ```
pub struct MetadataPage {
    id: u32,
    archive_base: String,
    request_data: Option<String>,
}

impl MetadataPage {
    pub fn new(id: u32, archive_base: &str) -> MetadataPage {
        MetadataPage {
            id,
            archive_base: String::from(archive_base),
            request_data: None,
        }
    }

    /// href of the plain-text rendition, found by anchor text.
    pub fn parse_text_path(&self, document: &Html) -> Result<String, FetchError> {
        let anchor_selector = Selector::parse("a").unwrap();

        document
            .select(&anchor_selector)
            .find(|element| {
                element
                    .text()
                    .collect::<String>()
                    .contains("Plain Text UTF-8")
            })
            .and_then(|element| element.value().attr("href"))
            .map(String::from)
            .ok_or_else(|| {
                FetchError::ParseFailure(format!(
                    "no Plain Text UTF-8 link on the metadata page of identifier {}",
                    self.id
                ))
            })
    }

    /// The page `<title>` reads like "Pride and Prejudice by Jane Austen |
    /// Project Gutenberg". Both halves are optional in the result; an
    /// unrecognizable title block just yields `None`s.
    pub fn parse_title_author(&self, document: &Html) -> (Option<String>, Option<String>) {
        let title_selector = Selector::parse("title").unwrap();

        let raw = match document.select(&title_selector).next() {
            Some(element) => element.text().collect::<String>(),
            None => return (None, None),
        };

        let raw = raw.split('|').next().unwrap_or("").trim();

        if raw.is_empty() {
            return (None, None);
        }

        match raw.rfind(" by ") {
            Some(idx) => {
                let title = raw[..idx].trim();
                let author = raw[idx + " by ".len()..].trim();

                (
                    Some(String::from(title)),
                    if author.is_empty() {
                        None
                    } else {
                        Some(String::from(author))
                    },
                )
            }
            None => (Some(String::from(raw)), None),
        }
    }
}

impl Parser for MetadataPage {
    type RequestData = String;
    type ParseData = PageMeta;

    fn request_data(&self) -> Result<&Self::RequestData, FetchError> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(FetchError::ParseFailure(String::from(
                "metadata page was not requested yet",
            ))),
        }
    }

    fn url(&self) -> String {
        format!("{}/ebooks/{}", self.archive_base, self.id)
    }

    fn request(mut self) -> Result<Box<Self>, FetchError> {
        trace!("MetadataPage::request()");

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

        let html = response
            .text()
            .map_err(|err| FetchError::ParseFailure(err.to_string()))?;

        self.request_data = Some(html);
        Ok(Box::new(self))
    }

    fn parse(&self) -> Result<Self::ParseData, FetchError> {
        trace!("MetadataPage::parse()");

        let document = Html::parse_document(self.request_data()?);

        let text_path = self.parse_text_path(&document)?;
        let (title, author) = self.parse_title_author(&document);

        Ok(PageMeta {
            title,
            author,
            text_path,
        })
    }
}
