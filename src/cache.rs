use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::CacheError;
use crate::models::Book;

/// On-disk book cache: one `{id}.json` record per book under a fixed
/// directory. The cache is the single source of truth for previously
/// accessed books.
pub struct BookCache {
    dir: PathBuf,
}

impl BookCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<BookCache, CacheError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        Ok(BookCache { dir })
    }

    fn entry_path(&self, id: u32) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    pub fn get(&self, id: u32) -> Result<Option<Book>, CacheError> {
        trace!("BookCache::get({})", id);
        let path = self.entry_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let record = fs::read_to_string(&path)?;
        let book = serde_json::from_str::<Book>(&record)?;

        Ok(Some(book))
    }

    /// Idempotent write. Re-putting an identical record is a no-op; a record
    /// with differing text for an already-cached identifier is a conflict,
    /// never a silent overwrite.
    pub fn put(&self, book: &Book) -> Result<(), CacheError> {
        trace!("BookCache::put({})", book.id);

        if let Some(existing) = self.get(book.id)? {
            if existing.text == book.text {
                debug!("cache entry {} already present", book.id);
                return Ok(());
            }

            return Err(CacheError::Conflict(book.id));
        }

        let record = serde_json::to_string_pretty(book)?;
        fs::write(self.entry_path(book.id), &record)?;

        Ok(())
    }

    /// Cached identifiers in ascending numeric order. Files that do not look
    /// like `{id}.json` records are ignored.
    pub fn list(&self) -> Result<Vec<u32>, CacheError> {
        trace!("BookCache::list()");
        let mut ids = vec![];

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();

            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse::<u32>().ok());

            let is_record = path.extension().and_then(|ext| ext.to_str()) == Some("json");

            if let (Some(id), true) = (id, is_record) {
                ids.push(id);
            }
        }

        ids.sort();

        Ok(ids)
    }
}
