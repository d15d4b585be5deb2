//! Identifier case conversion for generated names.
//!
//! Component ids and prop names are ASCII; words are split on `-`, `_`,
//! whitespace and lower-to-upper case boundaries.

fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `value-change` / `valueChange` -> `ValueChange`
pub fn pascal_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// `valueChange` / `Value Change` -> `value-change`
pub fn kebab_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("button"), "Button");
        assert_eq!(pascal_case("valueChange"), "ValueChange");
        assert_eq!(pascal_case("checked-change"), "CheckedChange");
        assert_eq!(pascal_case("navbar"), "Navbar");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("valueChange"), "value-change");
        assert_eq!(kebab_case("Tab Change"), "tab-change");
        assert_eq!(kebab_case("switch"), "switch");
        assert_eq!(kebab_case("inputType"), "input-type");
    }
}
