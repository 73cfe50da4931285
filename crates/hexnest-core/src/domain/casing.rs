//! Kebab-case to Pascal-case conversion for generated symbol names.

/// Convert a kebab-case identifier to PascalCase.
///
/// Splits on `-`, uppercases the first character of each segment, and
/// concatenates with no separator. Total function: `""` maps to `""`.
///
/// ```
/// use hexnest_core::domain::casing::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user-profile"), "UserProfile");
/// ```
pub fn to_pascal_case(kebab: &str) -> String {
    kebab
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_segment() {
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("shop-api-v2"), "ShopApiV2");
    }

    #[test]
    fn single_char() {
        assert_eq!(to_pascal_case("a"), "A");
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(to_pascal_case("v2-api"), "V2Api");
    }
}
