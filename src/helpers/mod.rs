/// Record builders and id based lookup over generic collections.
pub mod records;

/// Area calculation and status colors over closed enumerations.
pub mod shapes;

/// Small string formatters sharing the [`formatting::StringFormatter`] signature.
pub mod formatting;

pub use formatting::{capitalize_first_letter, trim_and_format, StringFormatter};
pub use records::{create_book, create_user, find_by_id, first_element, Book, Genre, HasId, User};
pub use shapes::{calculate_area, status_color, Shape, Status};
