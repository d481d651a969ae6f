use serde::{Deserialize, Serialize};

/// Case conversion applied at the end of [`sanitize_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    #[default]
    Unchanged,
    Lower,
    Upper,
}

/// Reduce user input to a compact, markup-free ASCII token.
///
/// In order: all whitespace is removed, `<...>` tags are stripped (an
/// unterminated `<` drops the rest), double and single quotes become `&#34;`
/// and `&#39;`, and non-ASCII characters are dropped. The result is then
/// converted to the requested [`LetterCase`].
///
/// ```
/// use fst_helpers::{LetterCase, sanitize_string};
///
/// assert_eq!(sanitize_string("  Müller <b>GmbH</b> ", LetterCase::Upper), "MLLERGMBH");
/// ```
pub fn sanitize_string(input: &str, case: LetterCase) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        match c {
            c if c.is_whitespace() => {}
            '<' => in_tag = true,
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c if c.is_ascii() => out.push(c),
            _ => {}
        }
    }

    match case {
        LetterCase::Unchanged => out,
        LetterCase::Lower => out.to_ascii_lowercase(),
        LetterCase::Upper => out.to_ascii_uppercase(),
    }
}
