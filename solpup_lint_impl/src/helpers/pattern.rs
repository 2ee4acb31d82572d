use regex::Regex;

// Determine if a string matches a pattern, using regex if possible
pub fn string_matches_pattern(string: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(string),
        Err(_) => string == pattern, // Fall back to exact match
    }
}

// A user-friendly description of a pattern
pub fn describe_pattern(pattern: &str) -> &'static str {
    if pattern.contains(|c: char| {
        c == '*' || c == '.' || c == '+' || c == '[' || c == '(' || c == '|' || c == '^' || c == '$'
    }) {
        "pattern"
    } else {
        "name"
    }
}
