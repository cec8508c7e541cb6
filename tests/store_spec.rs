use libris::models::Book;
use libris::store::{BookStore, StoreError};
use speculate2::speculate;
use tempfile::TempDir;

fn book(name: &str, isbn: &str, author: &str, year: &str) -> Book {
    Book {
        name: name.to_string(),
        isbn: isbn.to_string(),
        author: author.to_string(),
        year_published: year.to_string(),
    }
}

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("books.txt");
        let store = BookStore::open(&path).expect("Failed to open store");
    }

    describe "open" {
        it "does not create the catalog file" {
            assert!(!path.exists());
        }

        it "creates missing parent directories" {
            let nested = dir.path().join("data/catalog/books.txt");
            BookStore::open(&nested).expect("Failed to open store");
            assert!(nested.parent().unwrap().exists());
        }
    }

    describe "append" {
        it "writes one comma-joined line per record" {
            store.append(&book("Dune", "001", "Herbert", "1965")).expect("Failed to append");
            store.append(&book("Emma", "002", "Austen", "1815")).expect("Failed to append");

            let data = std::fs::read_to_string(&path).expect("Failed to read catalog");
            assert_eq!(data, "Dune,001,Herbert,1965\nEmma,002,Austen,1815\n");
        }

        it "creates the catalog file on first write" {
            store.append(&book("Dune", "001", "Herbert", "1965")).expect("Failed to append");
            assert!(path.exists());
        }

        it "rejects fields containing the separator without writing" {
            let err = store.append(&book("Dune, Messiah", "001", "Herbert", "1969")).unwrap_err();
            assert!(matches!(err, StoreError::InvalidField { field: "bookName" }));
            assert!(!path.exists());
        }

        it "rejects fields containing newlines" {
            let err = store.append(&book("Dune", "001", "Her\nbert", "1965")).unwrap_err();
            assert!(matches!(err, StoreError::InvalidField { field: "author" }));
        }
    }

    describe "read_all" {
        it "errors when the catalog file is absent" {
            let err = store.read_all().unwrap_err();
            assert!(matches!(err, StoreError::Io(_)));
        }

        it "returns an empty list for an empty file" {
            std::fs::write(&path, "").expect("Failed to write catalog");
            let books = store.read_all().expect("Failed to read");
            assert!(books.is_empty());
        }

        it "returns records in file order" {
            store.append(&book("Dune", "001", "Herbert", "1965")).expect("Failed to append");
            store.append(&book("Emma", "002", "Austen", "1815")).expect("Failed to append");

            let books = store.read_all().expect("Failed to read");
            assert_eq!(books.len(), 2);
            assert_eq!(books[0].name, "Dune");
            assert_eq!(books[1].name, "Emma");
        }

        it "ignores blank lines" {
            std::fs::write(&path, "Dune,001,Herbert,1965\n\n\nEmma,002,Austen,1815\n")
                .expect("Failed to write catalog");

            let books = store.read_all().expect("Failed to read");
            assert_eq!(books.len(), 2);
        }

        it "skips lines with the wrong field count" {
            std::fs::write(&path, "not a record\nDune,001,Herbert,1965\n")
                .expect("Failed to write catalog");

            let books = store.read_all().expect("Failed to read");
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].name, "Dune");
        }
    }

    describe "find_by_isbn_author" {
        it "returns None when nothing matches both fields" {
            store.append(&book("Dune", "001", "Herbert", "1965")).expect("Failed to append");
            store.append(&book("Emma", "002", "Austen", "1815")).expect("Failed to append");

            let found = store.find_by_isbn_author("001", "Austen").expect("Failed to scan");
            assert!(found.is_none());
        }

        it "returns the first match in file order" {
            store.append(&book("First Edition", "001", "Herbert", "1965")).expect("Failed to append");
            store.append(&book("Second Edition", "001", "Herbert", "1984")).expect("Failed to append");

            let found = store
                .find_by_isbn_author("001", "Herbert")
                .expect("Failed to scan")
                .expect("No match");
            assert_eq!(found.name, "First Edition");
        }

        it "matches case-sensitively without trimming" {
            store.append(&book("Dune", "001", "Herbert", "1965")).expect("Failed to append");

            assert!(store.find_by_isbn_author("001", "herbert").expect("Failed to scan").is_none());
            assert!(store.find_by_isbn_author("001", " Herbert").expect("Failed to scan").is_none());
        }
    }

    describe "find_by_author" {
        it "returns matching records in insertion order" {
            store.append(&book("Dune", "001", "Herbert", "1965")).expect("Failed to append");
            store.append(&book("Emma", "002", "Austen", "1815")).expect("Failed to append");
            store.append(&book("Dune Messiah", "003", "Herbert", "1969")).expect("Failed to append");

            let books = store.find_by_author("Herbert").expect("Failed to scan");
            assert_eq!(books.len(), 2);
            assert_eq!(books[0].name, "Dune");
            assert_eq!(books[1].name, "Dune Messiah");
        }

        it "returns an empty list when the author is unknown" {
            store.append(&book("Dune", "001", "Herbert", "1965")).expect("Failed to append");

            let books = store.find_by_author("Austen").expect("Failed to scan");
            assert!(books.is_empty());
        }
    }
}
