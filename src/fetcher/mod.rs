use std::convert::TryFrom;

use log::{debug, trace};

use crate::cache::BookCache;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::Book;

mod book_text;
mod metadata_page;

pub use book_text::BookText;
pub use metadata_page::{MetadataPage, PageMeta};

/// Two-phase acquisition of one remote resource: `request` pulls the raw
/// response into the parser, `parse` turns it into usable data.
pub trait Parser {
    type RequestData;
    type ParseData;

    fn request_data(&self) -> Result<&Self::RequestData, FetchError>;

    fn url(&self) -> String;

    fn request(self) -> Result<Box<Self>, FetchError>;

    fn parse(&self) -> Result<Self::ParseData, FetchError>;
}

/// Validates free-form user input before it reaches [`fetch`].
pub fn parse_identifier(raw: &str) -> Result<i64, FetchError> {
    let trimmed = raw.trim();

    trimmed
        .parse::<i64>()
        .map_err(|_| FetchError::InvalidIdentifier(String::from(trimmed)))
}

/// Fetches a book by identifier, serving from the cache when possible.
///
/// On a cache miss this is a two-step network acquisition: the archive's
/// metadata page yields the title, author and plain-text link, then the
/// content URL yields the text itself. The fetched book is cached before it
/// is returned. Single attempt, no retries; a failed fetch leaves no cache
/// entry behind.
pub fn fetch(config: &Config, cache: &BookCache, id: i64) -> Result<Book, FetchError> {
    trace!("fetcher::fetch({})", id);

    if id <= 0 {
        return Err(FetchError::InvalidIdentifier(id.to_string()));
    }

    // the archive's ID space fits in u32; anything larger would alias
    let id = u32::try_from(id).map_err(|_| FetchError::InvalidIdentifier(id.to_string()))?;

    if let Some(book) = cache.get(id)? {
        debug!("cache hit for identifier {}", id);
        return Ok(book);
    }

    let page = MetadataPage::new(id, &config.archive_base).request()?;
    let meta = page.parse()?;

    let content_url = if meta.text_path.starts_with("http") {
        meta.text_path.clone()
    } else {
        format!("{}{}", config.archive_base, meta.text_path)
    };

    let text = BookText::new(id, content_url).request()?.parse()?;

    let book = Book {
        id,
        title: meta.title,
        author: meta.author,
        text,
        fetched_at: time::OffsetDateTime::now_utc().unix_timestamp(),
    };

    cache.put(&book)?;

    Ok(book)
}
