use juniper::{GraphQLInputObject, ID, graphql_object};

use crate::state::AppData;
use crate::store::{Book, BookId};

#[derive(GraphQLInputObject, Debug, Clone, Default)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
}

#[graphql_object(context = AppData)]
impl Book {
    fn id(&self) -> ID {
        ID::new(self.id.to_string())
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

/// Coerce a client-supplied id to a numeric book id.
///
/// Numeric text such as `"2"`, `" 2 "`, `"2.0"` or `"0x2"` resolves; anything
/// else (including fractions and negatives) matches no book.
pub fn parse_book_id(id: &ID) -> Option<BookId> {
    let text = id.trim();
    if let Some(n) = parse_radix_literal(text) {
        return n;
    }
    let n: f64 = text.parse().ok()?;
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(BookId::MAX) {
        return None;
    }
    Some(n as BookId)
}

/// `0x`, `0o` and `0b` literals. Outer `None` means `text` has no radix prefix.
fn parse_radix_literal(text: &str) -> Option<Option<BookId>> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(BookId::from_str_radix(digits, radix).ok())
}
