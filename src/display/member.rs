//! Member display formatting
//!
//! Formats members for terminal output in table and detail views.

use crate::models::Member;
use crate::store::Catalog;

/// Format a list of members as a table
pub fn format_member_list(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members found.\n".to_string();
    }

    let id_width = members
        .iter()
        .map(|m| m.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let name_width = members
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>id_width$}  {:<name_width$}  {}\n",
        "ID",
        "Name",
        "Borrowed",
        id_width = id_width,
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:->id_width$}  {:-<name_width$}  {:-<12}\n",
        "",
        "",
        "",
        id_width = id_width,
        name_width = name_width,
    ));

    for member in members {
        let borrowed: Vec<String> = member.borrowed_books.iter().map(|id| id.to_string()).collect();
        output.push_str(&format!(
            "{:>id_width$}  {:<name_width$}  [{}]\n",
            member.id.to_string(),
            member.name,
            borrowed.join(", "),
            id_width = id_width,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single member's details, resolving borrowed ids to titles
pub fn format_member_details(member: &Member, catalog: &Catalog) -> String {
    let mut output = String::new();

    output.push_str(&format!("Member {}\n", member.id));
    output.push_str(&format!("  Name:  {}\n", member.name));

    if member.borrowed_books.is_empty() {
        output.push_str("  Borrowed: none\n");
    } else {
        output.push_str("  Borrowed:\n");
        for &book_id in &member.borrowed_books {
            match catalog.find_by_id(book_id) {
                Some(book) => {
                    output.push_str(&format!("    {} - {} by {}\n", book.id, book.title, book.author));
                }
                None => {
                    output.push_str(&format!("    {} - (missing from catalog)\n", book_id));
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookId, MemberId};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_member_list(&[]), "No members found.\n");
    }

    #[test]
    fn test_list_shows_borrowed_ids() {
        let mut member = Member::new(MemberId::from_raw(1), "Alice");
        member.record_loan(BookId::from_raw(2));
        member.record_loan(BookId::from_raw(5));

        let output = format_member_list(&[member]);
        assert!(output.contains("Alice"));
        assert!(output.contains("[2, 5]"));
    }

    #[test]
    fn test_details_resolves_titles() {
        let mut catalog = Catalog::new();
        let book_id = catalog.add("Dune", "Herbert").id;

        let mut member = Member::new(MemberId::from_raw(1), "Alice");
        member.record_loan(book_id);

        let output = format_member_details(&member, &catalog);
        assert!(output.contains("Name:  Alice"));
        assert!(output.contains("Dune by Herbert"));
    }

    #[test]
    fn test_details_with_no_loans() {
        let catalog = Catalog::new();
        let member = Member::new(MemberId::from_raw(1), "Alice");

        let output = format_member_details(&member, &catalog);
        assert!(output.contains("Borrowed: none"));
    }

    #[test]
    fn test_details_flags_missing_book() {
        let catalog = Catalog::new();
        let mut member = Member::new(MemberId::from_raw(1), "Alice");
        member.record_loan(BookId::from_raw(9));

        let output = format_member_details(&member, &catalog);
        assert!(output.contains("missing from catalog"));
    }
}
