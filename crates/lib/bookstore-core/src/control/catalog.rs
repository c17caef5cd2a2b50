use bookstore_store::models::{Author, AuthorEntry, BookEntry};
use tracing::debug;

use super::{BookstoreControlPlane, ControlError, Lookup, NotFound, matches_fragment, require_arg};

impl BookstoreControlPlane {
    /// Finds the first book whose title contains `title`, ignoring case.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `title` is blank.
    pub fn find_book_by_title(&self, title: &str) -> Result<Lookup<BookEntry>, ControlError> {
        let title = require_arg("title", title)?;
        let fragment = title.to_lowercase();
        let found = self
            .data
            .books
            .find(|book| matches_fragment(&book.title, &fragment))
            .map(|(book_id, book)| BookEntry::new(book_id, book.clone()));
        debug!(title, found = found.is_some(), "find_book_by_title");

        Ok(found.map_or_else(
            || {
                Lookup::NotFound(NotFound::BookTitle {
                    title: title.to_string(),
                })
            },
            Lookup::Found,
        ))
    }

    /// Finds the first author whose name contains `name`, ignoring case.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `name` is blank.
    pub fn find_author_by_name(&self, name: &str) -> Result<Lookup<AuthorEntry>, ControlError> {
        let name = require_arg("name", name)?;
        let found = self
            .resolve_author(name)
            .map(|(author_id, author)| AuthorEntry::new(author_id, author.clone()));
        debug!(name, found = found.is_some(), "find_author_by_name");

        Ok(found.map_or_else(
            || {
                Lookup::NotFound(NotFound::AuthorName {
                    name: name.to_string(),
                })
            },
            Lookup::Found,
        ))
    }

    /// Lists every book written by the first author matching `author_name`.
    ///
    /// Distinguishes an unknown author from a known author with no books.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `author_name` is blank.
    pub fn find_books_by_author(
        &self,
        author_name: &str,
    ) -> Result<Lookup<Vec<BookEntry>>, ControlError> {
        let author_name = require_arg("author_name", author_name)?;
        let Some((author_id, _)) = self.resolve_author(author_name) else {
            debug!(author_name, "find_books_by_author: no author");
            return Ok(Lookup::NotFound(NotFound::AuthorName {
                name: author_name.to_string(),
            }));
        };

        let books: Vec<BookEntry> = self
            .data
            .books
            .filter(|book| book.author_id == author_id)
            .map(|(book_id, book)| BookEntry::new(book_id, book.clone()))
            .collect();
        debug!(author_name, author_id, count = books.len(), "find_books_by_author");

        if books.is_empty() {
            return Ok(Lookup::NotFound(NotFound::BooksForAuthor {
                author_name: author_name.to_string(),
            }));
        }
        Ok(Lookup::Found(books))
    }

    /// Fetches an author by exact id.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `author_id` is blank.
    pub fn get_author_by_id(&self, author_id: &str) -> Result<Lookup<AuthorEntry>, ControlError> {
        let author_id = require_arg("author_id", author_id)?;
        let Some(author) = self.data.authors.get(author_id) else {
            return Ok(Lookup::NotFound(NotFound::AuthorId {
                author_id: author_id.to_string(),
            }));
        };
        Ok(Lookup::Found(AuthorEntry::new(author_id, author.clone())))
    }

    fn resolve_author(&self, name: &str) -> Option<(&str, &Author)> {
        let fragment = name.to_lowercase();
        self.data
            .authors
            .find(|author| matches_fragment(&author.name, &fragment))
    }
}
