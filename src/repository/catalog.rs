//! Catalog store over the books snapshot.

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Category},
    storage::SnapshotFile,
};

/// The book catalog, keyed by ISBN.
///
/// Entries keep their insertion order, matching the snapshot on disk. Every
/// mutation rewrites the snapshot before returning.
pub struct CatalogStore {
    books: IndexMap<String, Book>,
    snapshot: SnapshotFile,
}

impl CatalogStore {
    /// Open the store, loading whatever the snapshot currently holds.
    pub fn open(snapshot: SnapshotFile) -> Self {
        let books = snapshot.load();
        Self { books, snapshot }
    }

    /// Add a book under its ISBN.
    pub fn add(&mut self, book: Book) -> AppResult<()> {
        if self.books.contains_key(&book.isbn) {
            return Err(AppError::DuplicateIsbn(book.isbn));
        }
        self.books.insert(book.isbn.clone(), book);
        self.persist()
    }

    /// Remove a book by ISBN, returning the removed entry.
    pub fn remove(&mut self, isbn: &str) -> AppResult<Book> {
        let book = self
            .books
            .shift_remove(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        self.persist()?;
        Ok(book)
    }

    /// Get a book by ISBN.
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Whether a book with this ISBN is in the catalog.
    pub fn contains(&self, isbn: &str) -> bool {
        self.books.contains_key(isbn)
    }

    /// Case-insensitive substring search over title, author and category label.
    ///
    /// Lazy; every call starts a fresh pass over the catalog.
    pub fn find(&self, query: &str) -> impl Iterator<Item = &Book> {
        let query = query.to_lowercase();
        self.books.values().filter(move |book| {
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
                || book.category.label().to_lowercase().contains(&query)
        })
    }

    /// Books grouped by category, in the fixed category order.
    ///
    /// Categories with no books are omitted.
    pub fn by_category(&self) -> Vec<(Category, Vec<&Book>)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let books: Vec<&Book> = self
                    .books
                    .values()
                    .filter(|book| book.category == category)
                    .collect();
                (category, books)
            })
            .filter(|(_, books)| !books.is_empty())
            .collect()
    }

    /// All books in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn persist(&self) -> AppResult<()> {
        self.snapshot.save(&self.books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> CatalogStore {
        CatalogStore::open(SnapshotFile::new(tmp.path().join("libros.json")))
    }

    fn book(isbn: &str, title: &str, author: &str, category: Category) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            category,
            isbn: isbn.to_string(),
        }
    }

    #[test]
    fn test_add_rejects_duplicate_isbn() {
        let tmp = TempDir::new().unwrap();
        let mut catalog = store(&tmp);

        catalog
            .add(book("111", "Primero", "Autor A", Category::General))
            .unwrap();
        let err = catalog
            .add(book("111", "Segundo", "Autor B", Category::Technology))
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateIsbn(_)));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("111").unwrap().title, "Primero");
    }

    #[test]
    fn test_remove_unknown_isbn_fails() {
        let tmp = TempDir::new().unwrap();
        let mut catalog = store(&tmp);

        let err = catalog.remove("999").unwrap_err();
        assert!(matches!(err, AppError::BookNotFound(_)));
    }

    #[test]
    fn test_mutations_survive_reload() {
        let tmp = TempDir::new().unwrap();
        {
            let mut catalog = store(&tmp);
            catalog
                .add(book("111", "Uno", "A", Category::General))
                .unwrap();
            catalog
                .add(book("222", "Dos", "B", Category::Religion))
                .unwrap();
            catalog.remove("111").unwrap();
        }

        let catalog = store(&tmp);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("222"));
        assert!(!catalog.contains("111"));
    }

    #[test]
    fn test_find_is_case_insensitive_across_fields() {
        let tmp = TempDir::new().unwrap();
        let mut catalog = store(&tmp);
        catalog
            .add(book(
                "111",
                "Cien años de soledad",
                "Gabriel García Márquez",
                Category::ArtsAndLiterature,
            ))
            .unwrap();
        catalog
            .add(book("222", "Cálculo", "Spivak", Category::NaturalSciences))
            .unwrap();

        assert_eq!(catalog.find("SOLEDAD").count(), 1);
        assert_eq!(catalog.find("gabriel").count(), 1);
        assert_eq!(catalog.find("matemáticas").count(), 1);
        assert_eq!(catalog.find("inexistente").count(), 0);
        // Restartable: a second pass over the same query sees the same books.
        let matches = catalog.find("cálculo");
        assert_eq!(matches.count(), 1);
    }

    #[test]
    fn test_by_category_groups_in_fixed_order() {
        let tmp = TempDir::new().unwrap();
        let mut catalog = store(&tmp);
        catalog
            .add(book("111", "Robótica", "X", Category::Technology))
            .unwrap();
        catalog
            .add(book("222", "Enciclopedia", "Y", Category::General))
            .unwrap();

        let groups = catalog.by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Category::General);
        assert_eq!(groups[1].0, Category::Technology);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let tmp = TempDir::new().unwrap();
        let mut catalog = store(&tmp);
        for isbn in ["c", "a", "b"] {
            catalog
                .add(book(isbn, "T", "A", Category::General))
                .unwrap();
        }

        let order: Vec<&str> = catalog.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
