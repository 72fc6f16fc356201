use serde::{Deserialize, Serialize};

/// Author of a book, owned by exactly one `Book`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

/// Catalog record served by the Books module.
///
/// `Book::default()` is the empty record returned for unknown ids under the
/// lenient not-found policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier, unique within the store
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    /// Serialized as `null` when absent
    #[serde(default)]
    pub author: Option<Author>,
}

/// Request model for creating or replacing a book.
///
/// Every field is optional. Unknown fields, including any client-supplied
/// `id`, are ignored: ids come from the store or the request path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookInput {
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<Author>,
}

impl BookInput {
    /// Materialize the input as a stored book under `id`.
    pub fn into_book(self, id: impl Into<String>) -> Book {
        Book {
            id: id.into(),
            isbn: self.isbn,
            title: self.title,
            author: self.author,
        }
    }
}

impl Author {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// Records every fresh process starts with when seeding is enabled.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            isbn: "12345".to_string(),
            title: "Book One".to_string(),
            author: Some(Author::new("John", "Taylor")),
        },
        Book {
            id: "2".to_string(),
            isbn: "776655".to_string(),
            title: "Book Two".to_string(),
            author: Some(Author::new("Tim", "Banks")),
        },
        Book {
            id: "3".to_string(),
            isbn: "45243".to_string(),
            title: "Book Three".to_string(),
            author: Some(Author::new("Ray", "Smith")),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_serializes_with_nested_author() {
        let book = &sample_books()[1];
        assert_eq!(
            serde_json::to_value(book).unwrap(),
            json!({
                "id": "2",
                "isbn": "776655",
                "title": "Book Two",
                "author": {"firstname": "Tim", "lastname": "Banks"}
            })
        );
    }

    #[test]
    fn empty_book_has_null_author() {
        assert_eq!(
            serde_json::to_value(Book::default()).unwrap(),
            json!({"id": "", "isbn": "", "title": "", "author": null})
        );
    }

    #[test]
    fn input_ignores_client_id_and_defaults_missing_fields() {
        let input: BookInput =
            serde_json::from_value(json!({"id": "999", "title": "Untitled draft"})).unwrap();
        assert_eq!(
            input,
            BookInput {
                isbn: String::new(),
                title: "Untitled draft".to_string(),
                author: None,
            }
        );

        let book = input.into_book("7");
        assert_eq!(book.id, "7");
        assert_eq!(book.title, "Untitled draft");
    }

    #[test]
    fn input_rejects_mistyped_author() {
        let result = serde_json::from_value::<BookInput>(json!({"author": "Ray Smith"}));
        assert!(result.is_err());
    }
}
