//! Book display formatting
//!
//! Formats books for terminal output in table and detail views.

use crate::models::Book;

/// Format a list of books as a table
pub fn format_book_list(books: &[&Book]) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    // Calculate column widths
    let id_width = books
        .iter()
        .map(|b| b.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let title_width = books
        .iter()
        .map(|b| b.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let author_width = books
        .iter()
        .map(|b| b.author.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>id_width$}  {:<title_width$}  {:<author_width$}  {}\n",
        "ID",
        "Title",
        "Author",
        "Status",
        id_width = id_width,
        title_width = title_width,
        author_width = author_width,
    ));

    output.push_str(&format!(
        "{:->id_width$}  {:-<title_width$}  {:-<author_width$}  {:-<9}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
        title_width = title_width,
        author_width = author_width,
    ));

    for book in books {
        output.push_str(&format!(
            "{:>id_width$}  {:<title_width$}  {:<author_width$}  {}\n",
            book.id.to_string(),
            book.title,
            book.author,
            book.status(),
            id_width = id_width,
            title_width = title_width,
            author_width = author_width,
        ));
    }

    output
}

/// Format a single book's details
pub fn format_book_details(book: &Book) -> String {
    let mut output = String::new();

    output.push_str(&format!("Book {}\n", book.id));
    output.push_str(&format!("  Title:   {}\n", book.title));
    output.push_str(&format!("  Author:  {}\n", book.author));
    output.push_str(&format!("  Status:  {}\n", book.status()));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookId;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_book_list(&[]), "No books found.\n");
    }

    #[test]
    fn test_list_contains_all_fields() {
        let dune = Book::new(BookId::from_raw(1), "Dune", "Herbert");
        let mut hobbit = Book::new(BookId::from_raw(2), "The Hobbit", "Tolkien");
        hobbit.borrowed = true;

        let output = format_book_list(&[&dune, &hobbit]);

        assert!(output.contains("Dune"));
        assert!(output.contains("Herbert"));
        assert!(output.contains("Available"));
        assert!(output.contains("The Hobbit"));
        assert!(output.contains("Borrowed"));
    }

    #[test]
    fn test_details() {
        let book = Book::new(BookId::from_raw(7), "Dune", "Herbert");
        let output = format_book_details(&book);

        assert!(output.contains("Book 7"));
        assert!(output.contains("Title:   Dune"));
        assert!(output.contains("Status:  Available"));
    }
}
