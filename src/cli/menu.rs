//! Interactive menu over a library session.

use std::io::{BufRead, Write};

use crate::{
    cli::render,
    error::AppResult,
    models::{Book, Category},
    repository::Library,
};

/// The terminal menu, read-eval-print over a [`Library`] session.
///
/// Input and output are generic so tests can drive a whole session from a
/// script. Prompts, messages and table layout reproduce the legacy tool
/// verbatim, including the Spanish wording.
pub struct MenuSession<'a, R, W> {
    library: &'a mut Library,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(library: &'a mut Library, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Run the menu until the operator exits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Seleccione una opción: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.remove_book()?,
                "3" => self.register_member()?,
                "4" => self.deregister_member()?,
                "5" => self.borrow_book()?,
                "6" => self.return_book()?,
                "7" => self.search_books()?,
                "8" => self.list_books()?,
                "9" => self.list_loans()?,
                "10" => {
                    writeln!(
                        self.output,
                        "============ Gracias por usar la Biblioteca Digital de la UEA. \
                         ¡Hasta luego! ============"
                    )?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Opción no válida. Intente de nuevo.")?,
            }
            if self.prompt("\nPresione Enter para continuar...")?.is_none() {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(
            self.output,
            "║        Sistema de Gestión de Biblioteca Digital          ║"
        )?;
        writeln!(
            self.output,
            "║           Universidad Estatal Amazónica UEA              ║"
        )?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "1. Añadir libro a la Biblioteca")?;
        writeln!(self.output, "2. Quitar libro de la Biblioteca")?;
        writeln!(self.output, "3. Registrar usuario")?;
        writeln!(self.output, "4. Dar de baja a usuario")?;
        writeln!(self.output, "5. Prestar libro")?;
        writeln!(self.output, "6. Devolución de libros")?;
        writeln!(self.output, "7. Buscar libros")?;
        writeln!(self.output, "8. Mostrar todos los libros")?;
        writeln!(self.output, "9. Lista de libros prestados")?;
        writeln!(self.output, "10. Salir")?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        Ok(())
    }

    /// Write `message` without a newline and read one input line.
    ///
    /// Returns `None` when input is exhausted.
    fn prompt(&mut self, message: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print the success line, or the Spanish error line for operator
    /// mistakes. Session failures propagate.
    fn report(&mut self, result: AppResult<()>, success: &str) -> AppResult<()> {
        match result {
            Ok(()) => writeln!(self.output, "{}", success)?,
            Err(err) if err.is_operator_error() => {
                tracing::warn!("Operation rejected: {:?}", err);
                writeln!(self.output, "Error: {}.", err)?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn add_book(&mut self) -> AppResult<()> {
        let Some(isbn) = self.prompt("Ingrese el Código ISBN del libro: ")? else {
            return Ok(());
        };
        // Checked before asking for the rest, as the legacy flow did.
        if self.library.catalog.contains(&isbn) {
            writeln!(self.output, "Error: ISBN ya registrado.")?;
            return Ok(());
        }

        let Some(title) = self.prompt("Ingrese el título del libro: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Ingrese el autor del libro: ")? else {
            return Ok(());
        };

        writeln!(self.output, "\n+----------------------------------+")?;
        writeln!(self.output, "| Seleccione la categoría del libro: |")?;
        writeln!(self.output, "+------------------------------------+")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category)?;
        }
        let Some(selection) = self.prompt("Seleccione el número de la categoría: ")? else {
            return Ok(());
        };
        let Some(category) = selection
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Category::from_index)
        else {
            writeln!(self.output, "Opción no válida. Intente de nuevo.")?;
            return Ok(());
        };

        let result = self.library.catalog.add(Book {
            title,
            author,
            category,
            isbn,
        });
        self.report(result, "Libro añadido con éxito.")
    }

    fn remove_book(&mut self) -> AppResult<()> {
        let Some(isbn) = self.prompt("Ingrese el Código ISBN del libro a eliminar: ")? else {
            return Ok(());
        };
        let result = self.library.catalog.remove(&isbn).map(|_| ());
        self.report(result, "Libro eliminado con éxito.")
    }

    fn register_member(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt("Ingrese ID único del usuario: ")? else {
            return Ok(());
        };
        if self.library.members.contains(&id) {
            writeln!(self.output, "Error: ID ya registrado.")?;
            return Ok(());
        }
        let Some(name) = self.prompt("Ingrese el nombre del usuario: ")? else {
            return Ok(());
        };

        let result = self.library.members.register(id, name);
        self.report(result, "Usuario registrado con éxito.")
    }

    fn deregister_member(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt("Ingrese ID del usuario a dar de baja: ")? else {
            return Ok(());
        };
        let result = self.library.members.deregister(&id).map(|_| ());
        self.report(result, "Usuario eliminado con éxito.")
    }

    fn borrow_book(&mut self) -> AppResult<()> {
        let Some(member_id) = self.prompt("Ingrese ID del usuario: ")? else {
            return Ok(());
        };
        if !self.library.members.contains(&member_id) {
            writeln!(self.output, "Error: Usuario no registrado.")?;
            return Ok(());
        }
        let Some(isbn) = self.prompt("Ingrese el ISBN del libro a prestar: ")? else {
            return Ok(());
        };

        let result = self.library.lending().borrow_book(&member_id, &isbn);
        self.report(result, "Libro prestado con éxito.")
    }

    fn return_book(&mut self) -> AppResult<()> {
        let Some(member_id) = self.prompt("Ingrese ID del usuario: ")? else {
            return Ok(());
        };
        if !self.library.members.contains(&member_id) {
            writeln!(self.output, "Error: Usuario no registrado.")?;
            return Ok(());
        }
        let Some(isbn) = self.prompt("Ingrese el ISBN del libro a devolver: ")? else {
            return Ok(());
        };

        let result = self.library.lending().return_book(&member_id, &isbn);
        self.report(result, "Libro devuelto con éxito.")
    }

    fn search_books(&mut self) -> AppResult<()> {
        let Some(query) =
            self.prompt("Ingrese título, autor o categoría del libro a buscar: ")?
        else {
            return Ok(());
        };
        let results: Vec<&Book> = self.library.catalog.find(&query).collect();
        writeln!(self.output, "{}", render::book_table(&results))?;
        Ok(())
    }

    fn list_books(&mut self) -> AppResult<()> {
        writeln!(
            self.output,
            "\n****************** Libros en la Biblioteca ******************"
        )?;
        for (category, books) in self.library.catalog.by_category() {
            writeln!(self.output, "\nCategoría: {}", category)?;
            writeln!(self.output, "{}", render::book_table(&books))?;
        }
        Ok(())
    }

    fn list_loans(&mut self) -> AppResult<()> {
        writeln!(
            self.output,
            "\n********************* Libros Prestados *********************"
        )?;
        writeln!(
            self.output,
            "{}",
            render::loan_table(self.library.loans.active())
        )?;
        Ok(())
    }
}
