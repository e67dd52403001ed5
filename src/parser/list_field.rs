//! Source columns that encode a set of values as one bracketed, quoted
//! string, e.g. `"['Comedy', 'Drama']"`. Parsing strips only the literal
//! list syntax and splits on the field's separator; token content is never
//! altered beyond that (no case folding, no extra trimming).

/// Separator between values in comma-encoded list fields.
const LIST_SEPARATOR: &str = ", ";

/// Separator between character names within one credit row.
const CHARACTER_SEPARATOR: &str = " / ";

/// Parses a bracketed, quoted list field (genres, production countries)
/// into its ordered tokens. Empty or absent input yields no tokens.
#[must_use]
pub fn parse_list_field(raw: &str) -> Vec<String> {
    split_stripped(raw, LIST_SEPARATOR)
}

/// Parses a character-name field. A single credit row may name several
/// characters joined by `" / "`.
#[must_use]
pub fn parse_character_field(raw: &str) -> Vec<String> {
    split_stripped(raw, CHARACTER_SEPARATOR)
}

fn split_stripped(raw: &str, separator: &str) -> Vec<String> {
    let stripped = strip_list_syntax(raw);
    if stripped.trim().is_empty() {
        return Vec::new();
    }

    stripped.split(separator).map(str::to_string).collect()
}

/// Removes every literal `[`, `]` and `'` character, matching how the
/// source files quote their list values.
fn strip_list_syntax(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_element_list() {
        assert_eq!(
            parse_list_field("['Drama', 'Comedy']"),
            vec!["Drama".to_string(), "Comedy".to_string()]
        );
    }

    #[test]
    fn test_parse_single_element_list() {
        assert_eq!(
            parse_list_field("['documentation']"),
            vec!["documentation".to_string()]
        );
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(parse_list_field("").is_empty());
        assert!(parse_list_field("[]").is_empty());
        assert!(parse_list_field("['']").is_empty());
    }

    #[test]
    fn test_token_content_is_preserved() {
        // Internal spaces survive, case is untouched.
        assert_eq!(
            parse_list_field("['United States', 'South Korea']"),
            vec!["United States".to_string(), "South Korea".to_string()]
        );
    }

    #[test]
    fn test_quote_characters_are_stripped_everywhere() {
        // Apostrophes inside values are quoting to the source encoding and
        // get removed along with the delimiters.
        assert_eq!(
            parse_list_field("['St. Patrick's Day']"),
            vec!["St. Patricks Day".to_string()]
        );
    }

    #[test]
    fn test_character_field_splits_on_slash_separator() {
        assert_eq!(
            parse_character_field("Tony Stark / Iron Man"),
            vec!["Tony Stark".to_string(), "Iron Man".to_string()]
        );
    }

    #[test]
    fn test_character_field_single_name() {
        assert_eq!(
            parse_character_field("Hermione Granger"),
            vec!["Hermione Granger".to_string()]
        );
    }

    #[test]
    fn test_character_field_empty() {
        assert!(parse_character_field("").is_empty());
    }

    #[test]
    fn test_character_field_strips_list_syntax_first() {
        assert_eq!(
            parse_character_field("['Self / Host']"),
            vec!["Self".to_string(), "Host".to_string()]
        );
    }
}
