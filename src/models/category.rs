//! Subject category enumeration.

use serde::{Deserialize, Serialize};

/// Subject categories for catalog entries.
///
/// The set is closed: nine values, selected by number at the menu and stored
/// in snapshots under their Spanish labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Generalidades")]
    General,
    #[serde(rename = "Filosofía")]
    Philosophy,
    #[serde(rename = "Religión")]
    Religion,
    #[serde(rename = "Ciencias sociales y Política")]
    SocialSciences,
    #[serde(rename = "Filología y psicología")]
    Philology,
    #[serde(rename = "Matemáticas y Ciencias naturales")]
    NaturalSciences,
    #[serde(rename = "Tecnología y ciencias prácticas")]
    Technology,
    #[serde(rename = "Arte y literatura")]
    ArtsAndLiterature,
    #[serde(rename = "Historia y Geografía")]
    HistoryAndGeography,
}

impl Category {
    /// All categories, in menu-selection and listing order.
    pub const ALL: [Category; 9] = [
        Category::General,
        Category::Philosophy,
        Category::Religion,
        Category::SocialSciences,
        Category::Philology,
        Category::NaturalSciences,
        Category::Technology,
        Category::ArtsAndLiterature,
        Category::HistoryAndGeography,
    ];

    /// The Spanish label shown at the menu and stored in snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "Generalidades",
            Category::Philosophy => "Filosofía",
            Category::Religion => "Religión",
            Category::SocialSciences => "Ciencias sociales y Política",
            Category::Philology => "Filología y psicología",
            Category::NaturalSciences => "Matemáticas y Ciencias naturales",
            Category::Technology => "Tecnología y ciencias prácticas",
            Category::ArtsAndLiterature => "Arte y literatura",
            Category::HistoryAndGeography => "Historia y Geografía",
        }
    }

    /// Category for a 1-based menu selection, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Category> {
        if index >= 1 && index <= Self::ALL.len() {
            Some(Self::ALL[index - 1])
        } else {
            None
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
