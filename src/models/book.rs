use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// All fields are opaque strings; `year_published` is not validated as
/// numeric, and ISBN is not unique. Any number of records may share the
/// same ISBN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub isbn: String,
    pub author: String,
    pub year_published: String,
}

impl Book {
    /// Serialize as one catalog line: fields comma-joined in fixed order.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.name, self.isbn, self.author, self.year_published
        )
    }

    /// Parse one catalog line. Returns `None` unless the line splits into
    /// exactly four comma-separated fields.
    pub fn parse_line(line: &str) -> Option<Book> {
        let fields: Vec<&str> = line.split(',').collect();
        let [name, isbn, author, year_published] = fields.as_slice() else {
            return None;
        };

        Some(Book {
            name: (*name).to_string(),
            isbn: (*isbn).to_string(),
            author: (*author).to_string(),
            year_published: (*year_published).to_string(),
        })
    }
}

/// Input for adding a book.
///
/// Fields are optional at the type level so that a missing field surfaces
/// as a validation failure in the response body instead of a request
/// deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookInput {
    pub book_name: Option<String>,
    pub isbn: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<String>,
}

impl AddBookInput {
    /// Validate presence of all four fields and produce the record.
    ///
    /// Returns the wire name of the first missing or empty field.
    pub fn into_book(self) -> Result<Book, &'static str> {
        let name = require(self.book_name, "bookName")?;
        let isbn = require(self.isbn, "isbn")?;
        let author = require(self.author, "author")?;
        let year_published = require(self.year_published, "yearPublished")?;

        Ok(Book {
            name,
            isbn,
            author,
            year_published,
        })
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String, &'static str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(field),
    }
}
