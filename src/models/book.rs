//! Book model.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A catalog entry, serialized under its legacy Spanish field names.
///
/// Field order matches the snapshot files on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Título")]
    pub title: String,
    #[serde(rename = "Autor")]
    pub author: String,
    #[serde(rename = "Categoría")]
    pub category: Category,
    #[serde(rename = "ISBN")]
    pub isbn: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_legacy_field_names() {
        let book = Book {
            title: "El Quijote".into(),
            author: "Cervantes".into(),
            category: Category::ArtsAndLiterature,
            isbn: "978-84-376-0494-7".into(),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["Título"], "El Quijote");
        assert_eq!(json["Autor"], "Cervantes");
        assert_eq!(json["Categoría"], "Arte y literatura");
        assert_eq!(json["ISBN"], "978-84-376-0494-7");
    }

    #[test]
    fn test_deserializes_legacy_snapshot_entry() {
        let raw = r#"{
            "Título": "Cien años de soledad",
            "Autor": "Gabriel García Márquez",
            "Categoría": "Arte y literatura",
            "ISBN": "978-0-06-088328-7"
        }"#;
        let book: Book = serde_json::from_str(raw).unwrap();
        assert_eq!(book.title, "Cien años de soledad");
        assert_eq!(book.category, Category::ArtsAndLiterature);
    }
}
