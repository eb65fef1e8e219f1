//! Shared utility functions for code generation.

/// Lower-case the first character of a string, leaving the rest untouched
/// (e.g., "FirstName" -> "firstName", "ID" -> "iD")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to kebab-case (e.g., "OrderLineItem" -> "order-line-item")
///
/// Words break on `_`, `-`, `.` and whitespace, on a lower-case letter or digit
/// followed by an upper-case letter, and before the last capital of an acronym
/// that is followed by a lower-case letter ("HTTPServer" -> "http-server").
/// Digits never start a new word.
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | '.') || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Name"), "name");
        assert_eq!(lower_first("FirstName"), "firstName");
        assert_eq!(lower_first("ID"), "iD");
        assert_eq!(lower_first("already"), "already");
        assert_eq!(lower_first("_private"), "_private");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_lower_first_keeps_tail() {
        for name in ["Name", "URLValue", "x", "Ärger"] {
            let cased = lower_first(name);
            let first = cased.chars().next().unwrap();
            assert!(!first.is_uppercase());
            assert_eq!(
                cased.chars().skip(1).collect::<String>(),
                name.chars().skip(1).collect::<String>()
            );
        }
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Person"), "person");
        assert_eq!(to_kebab_case("OrderItem"), "order-item");
        assert_eq!(to_kebab_case("OrderLineItem"), "order-line-item");
        assert_eq!(to_kebab_case("orderItem"), "order-item");
        assert_eq!(to_kebab_case("HTTPServer"), "http-server");
        assert_eq!(to_kebab_case("UserDTO"), "user-dto");
        assert_eq!(to_kebab_case("Ipv4Address"), "ipv4-address");
        assert_eq!(to_kebab_case("Address2"), "address2");
        assert_eq!(to_kebab_case("snake_case_name"), "snake-case-name");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_to_kebab_case_is_deterministic() {
        assert_eq!(to_kebab_case("CustomerOrder"), to_kebab_case("CustomerOrder"));
    }

    #[test]
    fn test_to_kebab_case_known_collisions() {
        // Casing differences inside an acronym are erased.
        assert_eq!(to_kebab_case("HTTPServer"), to_kebab_case("HttpServer"));
        // Different boundaries stay distinct.
        assert_ne!(to_kebab_case("OrderItem"), to_kebab_case("Orderitem"));
    }
}
