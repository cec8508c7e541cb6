//! Flat-file persistence for the book catalog.
//!
//! One record per line, fields comma-joined in fixed order. Appends and
//! scans serialize on an internal mutex, so every append lands as a whole
//! line and every scan observes a consistent snapshot of the file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::models::Book;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors produced by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record field embeds the line separator or field separator and
    /// would corrupt the catalog if written.
    #[error("field '{field}' contains a comma or newline")]
    InvalidField { field: &'static str },
}

struct StoreInner {
    path: PathBuf,
}

/// Handle to the flat-file record store.
///
/// Cloning is cheap; clones share the same file lock.
#[derive(Clone)]
pub struct BookStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl BookStore {
    /// Open a store over the given catalog path.
    ///
    /// Creates the parent directory if needed, but never the file itself:
    /// the catalog comes into existence on the first append, and reads
    /// against an absent file report an I/O error rather than an empty
    /// catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            inner: Arc::new(Mutex::new(StoreInner { path })),
        })
    }

    /// Append one record as a single catalog line.
    ///
    /// Fields containing a comma or newline are rejected before anything
    /// is written; a persisted record always has exactly four fields on
    /// one line.
    pub fn append(&self, book: &Book) -> Result<()> {
        validate_fields(book)?;
        let line = format!("{}\n", book.to_line());

        let inner = self.inner.lock().expect("store lock poisoned");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&inner.path)?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }

    /// Read every record in file order.
    ///
    /// A missing or unreadable file is an error, not an empty catalog.
    /// Lines that do not split into exactly four fields are skipped with
    /// a warning.
    pub fn read_all(&self) -> Result<Vec<Book>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let data = std::fs::read_to_string(&inner.path)?;
        drop(inner);

        let mut books = Vec::new();
        for (number, line) in data.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match Book::parse_line(line) {
                Some(book) => books.push(book),
                None => tracing::warn!("Skipping malformed catalog line {}", number + 1),
            }
        }

        Ok(books)
    }

    /// First record (file order) whose ISBN and author both equal the
    /// inputs. Matching is case-sensitive with no trimming; duplicates
    /// after the first match are ignored.
    pub fn find_by_isbn_author(&self, isbn: &str, author: &str) -> Result<Option<Book>> {
        let books = self.read_all()?;
        Ok(books
            .into_iter()
            .find(|book| book.isbn == isbn && book.author == author))
    }

    /// Every record whose author field equals the input, in file order.
    pub fn find_by_author(&self, author: &str) -> Result<Vec<Book>> {
        let books = self.read_all()?;
        Ok(books
            .into_iter()
            .filter(|book| book.author == author)
            .collect())
    }
}

fn validate_fields(book: &Book) -> Result<()> {
    let fields = [
        ("bookName", &book.name),
        ("isbn", &book.isbn),
        ("author", &book.author),
        ("yearPublished", &book.year_published),
    ];

    for (field, value) in fields {
        if value.contains(',') || value.contains('\n') || value.contains('\r') {
            return Err(StoreError::InvalidField { field });
        }
    }

    Ok(())
}
