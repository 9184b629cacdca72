/// A formatter takes the input text and an `uppercase` flag.
pub type StringFormatter = fn(&str, bool) -> String;

/// Uppercases the first character and keeps the rest as is. With `uppercase`
/// the whole result is uppercased.
///
/// ```
/// use csv_to_json_rs::helpers::capitalize_first_letter;
///
/// assert_eq!(capitalize_first_letter("hello world", false), "Hello world");
/// assert_eq!(capitalize_first_letter("hello", true), "HELLO");
/// ```
pub fn capitalize_first_letter(text: &str, uppercase: bool) -> String {
    let mut chars = text.chars();
    let result = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if uppercase {
        result.to_uppercase()
    } else {
        result
    }
}

pub fn trim_and_format(text: &str, uppercase: bool) -> String {
    let trimmed = text.trim();

    if uppercase {
        trimmed.to_uppercase()
    } else {
        trimmed.to_string()
    }
}
