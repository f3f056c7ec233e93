//! Table rendering for the terminal menu.

use crate::models::{Book, Loan};

/// Placeholder printed instead of an empty table.
pub const NO_RECORDS: &str = "No hay registros disponibles.";

/// Lay out books as a bordered grid, column per field.
///
/// Returns [`NO_RECORDS`] when there is nothing to show.
pub fn book_table(books: &[&Book]) -> String {
    if books.is_empty() {
        return NO_RECORDS.to_string();
    }
    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|book| {
            vec![
                book.title.clone(),
                book.author.clone(),
                book.category.label().to_string(),
                book.isbn.clone(),
            ]
        })
        .collect();
    grid(&["Título", "Autor", "Categoría", "ISBN"], &rows)
}

/// Lay out active loans as a bordered grid, one row per loan.
///
/// Returns [`NO_RECORDS`] when there is nothing to show.
pub fn loan_table(loans: &[Loan]) -> String {
    if loans.is_empty() {
        return NO_RECORDS.to_string();
    }
    let rows: Vec<Vec<String>> = loans
        .iter()
        .map(|loan| {
            vec![
                loan.member_id.clone(),
                loan.book.title.clone(),
                loan.book.author.clone(),
                loan.book.isbn.clone(),
            ]
        })
        .collect();
    grid(&["Usuario", "Título", "Autor", "ISBN"], &rows)
}

/// Render a grid with double-ruled borders around the header.
///
/// Column widths fit the widest cell, counted in characters. Cells are
/// left-aligned with one space of padding on each side.
fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = Vec::new();
    lines.push(border(&widths, '╒', '═', '╤', '╕'));
    lines.push(row_line(&header_cells, &widths));
    lines.push(border(&widths, '╞', '═', '╪', '╡'));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(border(&widths, '├', '─', '┼', '┤'));
        }
        lines.push(row_line(row, &widths));
    }
    lines.push(border(&widths, '╘', '═', '╧', '╛'));
    lines.join("\n")
}

fn border(widths: &[usize], left: char, fill: char, junction: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(junction);
        }
        for _ in 0..width + 2 {
            line.push(fill);
        }
    }
    line.push(right);
    line
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<w$} │", cell, w = *width));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn book(isbn: &str, title: &str, author: &str) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            category: Category::General,
            isbn: isbn.to_string(),
        }
    }

    #[test]
    fn test_empty_tables_use_placeholder() {
        assert_eq!(book_table(&[]), NO_RECORDS);
        assert_eq!(loan_table(&[]), NO_RECORDS);
    }

    #[test]
    fn test_grid_layout_matches_legacy_table_style() {
        let rendered = grid(&["A", "Bb"], &[vec!["x".to_string(), "y".to_string()]]);
        let expected = "\
╒═══╤════╕
│ A │ Bb │
╞═══╪════╡
│ x │ y  │
╘═══╧════╛";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_rows_are_separated_by_single_rules() {
        let rendered = grid(
            &["A"],
            &[vec!["x".to_string()], vec!["y".to_string()]],
        );
        let expected = "\
╒═══╕
│ A │
╞═══╡
│ x │
├───┤
│ y │
╘═══╛";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_columns_fit_widest_cell_in_characters() {
        let b = book("111", "Filosofía", "X");
        let rendered = book_table(&[&b]);
        // "Filosofía" is nine characters; the accented vowel must not widen
        // the column.
        assert!(rendered.contains("│ Filosofía │"));
        assert!(rendered.contains("│ Título    │"));
    }
}
