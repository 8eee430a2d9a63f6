//! TeamCity service-message output for the CI publishing step.

/// Publish a build parameter for downstream build steps to pick up.
pub fn set_build_parameter(name: &str, value: &str) {
    println!(
        "##teamcity[setParameter name='{}' value='{}']",
        escape(name),
        escape(value)
    );
}

/// Service-message value escaping: vertical bars, quotes, brackets, and line
/// breaks all get the `|` prefix.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '|' => out.push_str("||"),
            '\'' => out.push_str("|'"),
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            '[' => out.push_str("|["),
            ']' => out.push_str("|]"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(escape("hello world"), "hello world");
    }

    #[test]
    fn reserved_characters_get_bar_prefix() {
        assert_eq!(escape("a|b'c[d]e"), "a||b|'c|[d|]e");
        assert_eq!(escape("line1\nline2\r"), "line1|nline2|r");
    }
}
