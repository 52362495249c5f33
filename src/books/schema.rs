use serde_json::{Map, Value};
use url::Url;
use crate::books::dto::BookDto;

pub const REQUIRED_FIELDS: [&str; 8] = [
    "isbn", "amazon_url", "author", "language", "pages", "publisher", "title", "year",
];

/// Checks an untyped payload against the book schema.
///
/// Returns the typed book when every constraint holds, otherwise every
/// violation found, in the order of [`REQUIRED_FIELDS`].
pub fn validate_book(payload: &Value) -> Result<BookDto, Vec<String>> {
    let obj = match payload.as_object() {
        Some(obj) => obj,
        None => return Err(vec!["instance is not of a type(s) object".to_string()]),
    };
    let mut violations = Vec::new();

    let isbn = string_field(obj, "isbn", &mut violations);
    let amazon_url = string_field(obj, "amazon_url", &mut violations);
    if let Some(ref url) = amazon_url {
        if Url::parse(url).is_err() {
            violations.push(r#"instance.amazon_url does not conform to the "uri" format"#.to_string());
        }
    }
    let author = string_field(obj, "author", &mut violations);
    let language = string_field(obj, "language", &mut violations);
    let pages = integer_field(obj, "pages", 1, &mut violations);
    let publisher = string_field(obj, "publisher", &mut violations);
    let title = string_field(obj, "title", &mut violations);
    let year = integer_field(obj, "year", i32::MIN, &mut violations);

    match (isbn, amazon_url, author, language, pages, publisher, title, year) {
        (Some(isbn), Some(amazon_url), Some(author), Some(language),
            Some(pages), Some(publisher), Some(title), Some(year)) if violations.is_empty() => {
            Ok(BookDto { isbn, amazon_url, author, language, pages, publisher, title, year })
        }
        _ => Err(violations),
    }
}

fn string_field(obj: &Map<String, Value>, name: &str, violations: &mut Vec<String>) -> Option<String> {
    match obj.get(name) {
        None => {
            violations.push(format!("instance requires property {:?}", name));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(format!("instance.{} does not meet minimum length of 1", name));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(format!("instance.{} is not of a type(s) string", name));
            None
        }
    }
}

fn integer_field(obj: &Map<String, Value>, name: &str, minimum: i32, violations: &mut Vec<String>) -> Option<i32> {
    let val = match obj.get(name) {
        None => {
            violations.push(format!("instance requires property {:?}", name));
            return None;
        }
        Some(val) => val,
    };
    // a number without fractional part counts as an integer, e.g. 300.0
    let n = match (val.as_i64(), val.as_u64(), val.as_f64()) {
        (Some(n), _, _) => n as f64,
        (None, Some(n), _) => n as f64,
        (None, None, Some(f)) if f.is_finite() && f.fract() == 0.0 => f,
        _ => {
            violations.push(format!("instance.{} is not of a type(s) integer", name));
            return None;
        }
    };
    if n < minimum as f64 {
        violations.push(format!("instance.{} must be greater than or equal to {}", name, minimum));
        return None;
    }
    if n > i32::MAX as f64 {
        violations.push(format!("instance.{} must be less than or equal to {}", name, i32::MAX));
        return None;
    }
    Some(n as i32)
}
