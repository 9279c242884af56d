//! String transformation utilities for template helpers

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input. A run
/// of capitals ends before a capital followed by a lowercase letter, so
/// `HTTPResponse` becomes `http_response`.
///
/// # Examples
/// ```
/// use cmdgen::core::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("listUsers"), "list_users");
/// assert_eq!(to_snake_case("ListUsers"), "list_users");
/// assert_eq!(to_snake_case("list-users"), "list_users");
/// assert_eq!(to_snake_case("getHTTPResponse"), "get_http_response");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev_is_uppercase = i > 0 && chars[i - 1].is_uppercase();
            let next_is_lowercase = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if (prev_is_lowercase || (prev_is_uppercase && next_is_lowercase))
                && !result.ends_with('_')
            {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_numeric();
        } else if (ch == '-' || ch == '_' || ch == ' ') && !result.ends_with('_') {
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Splits a name into its lowercase words.
fn words(s: &str) -> Vec<String> {
    to_snake_case(s)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a string to UpperCamelCase (PascalCase) for type names.
///
/// # Examples
/// ```
/// use cmdgen::core::utils::to_upper_camel_case;
///
/// assert_eq!(to_upper_camel_case("list_users"), "ListUsers");
/// assert_eq!(to_upper_camel_case("listUsers"), "ListUsers");
/// assert_eq!(to_upper_camel_case("widget"), "Widget");
/// ```
pub fn to_upper_camel_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// Converts a string to lowerCamelCase.
///
/// # Examples
/// ```
/// use cmdgen::core::utils::to_lower_camel_case;
///
/// assert_eq!(to_lower_camel_case("list_users"), "listUsers");
/// assert_eq!(to_lower_camel_case("ListUsers"), "listUsers");
/// ```
pub fn to_lower_camel_case(s: &str) -> String {
    words(s)
        .into_iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w } else { capitalize(&w) })
        .collect()
}

/// Converts every character to uppercase, leaving separators in place.
pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("listUsers"), "list_users");
        assert_eq!(to_snake_case("ListUsers"), "list_users");
        assert_eq!(to_snake_case("list-users"), "list_users");
        assert_eq!(to_snake_case("list_users"), "list_users");
        assert_eq!(to_snake_case("HTTPResponse"), "http_response");
        assert_eq!(to_snake_case("getHTTPResponse"), "get_http_response");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("LIST_USERS"), "list_users");
        assert_eq!(to_snake_case("_private__name_"), "private_name");
        assert_eq!(to_snake_case("v2Api"), "v2_api");
    }

    #[test]
    fn test_to_upper_camel_case() {
        assert_eq!(to_upper_camel_case("widget"), "Widget");
        assert_eq!(to_upper_camel_case("list_users"), "ListUsers");
        assert_eq!(to_upper_camel_case("listUsers"), "ListUsers");
        assert_eq!(to_upper_camel_case("ListUsers"), "ListUsers");
        assert_eq!(to_upper_camel_case("LIST_USERS"), "ListUsers");
        assert_eq!(to_upper_camel_case("userID"), "UserId");
        assert_eq!(to_upper_camel_case("getHTTPResponse"), "GetHttpResponse");
        assert_eq!(to_upper_camel_case(""), "");
        assert_eq!(to_upper_camel_case("__"), "");
    }

    #[test]
    fn test_to_lower_camel_case() {
        assert_eq!(to_lower_camel_case("widget"), "widget");
        assert_eq!(to_lower_camel_case("list_users"), "listUsers");
        assert_eq!(to_lower_camel_case("ListUsers"), "listUsers");
        assert_eq!(to_lower_camel_case("show_all_items"), "showAllItems");
    }

    #[test]
    fn test_to_upper_case() {
        assert_eq!(to_upper_case("widget"), "WIDGET");
        assert_eq!(to_upper_case("list_users"), "LIST_USERS");
        assert_eq!(to_upper_case("fooBar"), "FOOBAR");
    }
}
