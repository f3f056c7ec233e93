//! Member model.

use serde::{Deserialize, Serialize};

use super::book::Book;

/// A registered member, serialized under its legacy Spanish field names.
///
/// `borrowed` holds full copies of the books currently on loan to the
/// member, mirroring the loan ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Libros Prestados")]
    pub borrowed: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_serializes_with_empty_borrow_list() {
        let member = Member {
            name: "Ana Torres".into(),
            id: "U-001".into(),
            borrowed: Vec::new(),
        };
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["Nombre"], "Ana Torres");
        assert_eq!(json["ID"], "U-001");
        assert_eq!(json["Libros Prestados"], serde_json::json!([]));
    }

    #[test]
    fn test_deserializes_legacy_snapshot_entry() {
        let raw = r#"{
            "Nombre": "Luis Pérez",
            "ID": "U-007",
            "Libros Prestados": [
                {
                    "Título": "Rayuela",
                    "Autor": "Julio Cortázar",
                    "Categoría": "Arte y literatura",
                    "ISBN": "978-84-376-0495-4"
                }
            ]
        }"#;
        let member: Member = serde_json::from_str(raw).unwrap();
        assert_eq!(member.id, "U-007");
        assert_eq!(member.borrowed.len(), 1);
        assert_eq!(member.borrowed[0].isbn, "978-84-376-0495-4");
    }
}
