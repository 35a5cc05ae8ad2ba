use log::trace;

use crate::cache::BookCache;
use crate::error::CacheError;

/// Pure read-through over the cache: every cached identifier paired with its
/// title, in the cache's listing order. No independent state.
pub fn list_cached_books(cache: &BookCache) -> Result<Vec<(u32, Option<String>)>, CacheError> {
    trace!("catalog::list_cached_books()");

    let mut books = vec![];

    for id in cache.list()? {
        let title = cache.get(id)?.and_then(|book| book.title);
        books.push((id, title));
    }

    Ok(books)
}
