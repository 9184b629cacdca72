use serde::{Deserialize, Serialize};

/// Anything that can be looked up by a numeric identifier.
pub trait HasId {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub is_active: bool,
}

impl HasId for User {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Builds a [`User`]. Without an email the field stays `None`, and a user is
/// active unless `is_active` says otherwise.
///
/// ```
/// use csv_to_json_rs::helpers::create_user;
///
/// let user = create_user(2, "Petr Petrov", None, None);
/// assert_eq!(user.email, None);
/// assert!(user.is_active);
/// ```
pub fn create_user<N: Into<String>>(
    id: u64,
    name: N,
    email: Option<&str>,
    is_active: Option<bool>,
) -> User {
    User {
        id,
        name: name.into(),
        email: email.map(str::to_string),
        is_active: is_active.unwrap_or(true),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Fiction,
    NonFiction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    pub genre: Genre,
}

pub fn create_book(book: Book) -> Book {
    book
}

pub fn first_element<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns the first item whose id is `id`.
pub fn find_by_id<T: HasId>(items: &[T], id: u64) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}
