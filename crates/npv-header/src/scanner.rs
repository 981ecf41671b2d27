//! Rewrites the header's dictionary literal into JSON text.
//!
//! The header is not general Python. It is a dict with single-quoted
//! keys and strings, tuples, capitalized booleans, and trailing commas.
//! The scanner alternates between two states split on the `'` delimiter:
//!
//! ```text
//!   Outside ──'──▶ Inside ──'──▶ Outside ...
//! ```
//!
//! Only outside segments can hold tuple or boolean syntax, so only they
//! go through the rewrite table. Inside segments are copied untouched;
//! the delimiters themselves become `"`.

/// Token rewrites applied, in order, to every outside segment.
const REWRITES: [(&str, &str); 4] = [
    ("False", "false"),
    ("True", "true"),
    ("(", "["),
    (")", "]"),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside,
}

/// Convert header text into JSON text.
///
/// Returns `None` if a string literal is left unterminated. The output is
/// not guaranteed to be valid JSON; the caller still has to parse it.
pub fn to_json(header: &str) -> Option<String> {
    let mut out = String::with_capacity(header.len());
    let mut segment = String::new();
    let mut state = State::Outside;
    let mut chars = header.chars();

    while let Some(c) = chars.next() {
        match (state, c) {
            (State::Outside, '\'') => {
                out.push_str(&rewrite_outside(&segment));
                out.push('"');
                segment.clear();
                state = State::Inside;
            }
            (State::Outside, _) => segment.push(c),
            (State::Inside, '\'') => {
                out.push('"');
                state = State::Outside;
            }
            (State::Inside, '\\') => {
                // An escaped character never closes the literal.
                out.push(c);
                out.push(chars.next()?);
            }
            (State::Inside, _) => out.push(c),
        }
    }

    if state == State::Inside {
        return None;
    }
    out.push_str(&rewrite_outside(&segment));
    Some(out)
}

/// Apply the rewrite table, then drop any comma that directly precedes a
/// closing `]` or `}` (whitespace between them is dropped too).
fn rewrite_outside(segment: &str) -> String {
    let rewritten = REWRITES
        .iter()
        .fold(segment.to_string(), |s, (from, to)| s.replace(from, to));

    let mut out = String::with_capacity(rewritten.len());
    for c in rewritten.chars() {
        if matches!(c, ']' | '}') {
            let kept = out.trim_end().len();
            if out[..kept].ends_with(',') {
                out.truncate(kept - 1);
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_simple_header() {
        let json = to_json("{'descr': '<f8', 'fortran_order': False, 'shape': (3,), }").unwrap();
        assert_eq!(
            json,
            r#"{"descr": "<f8", "fortran_order": false, "shape": [3]}"#
        );
    }

    #[test]
    fn rewrites_record_header() {
        let json = to_json("{'descr': [('a', '<i4'), ('b', '|S2')], 'fortran_order': True, 'shape': (2, 2)}")
            .unwrap();
        assert_eq!(
            json,
            r#"{"descr": [["a", "<i4"], ["b", "|S2"]], "fortran_order": true, "shape": [2, 2]}"#
        );
    }

    #[test]
    fn string_contents_are_not_rewritten() {
        let json = to_json("{'True (x,)': False}").unwrap();
        assert_eq!(json, r#"{"True (x,)": false}"#);
    }

    #[test]
    fn empty_tuple_becomes_empty_array() {
        assert_eq!(to_json("{'shape': ()}").unwrap(), r#"{"shape": []}"#);
    }

    #[test]
    fn trailing_comma_before_brace_with_padding() {
        let json = to_json("{'a': 1,   }   \n").unwrap();
        assert_eq!(json, "{\"a\": 1}   \n");
    }

    #[test]
    fn unterminated_string_is_undecodable() {
        assert_eq!(to_json("{'descr: '<f8'}"), None);
        assert_eq!(to_json("{'descr"), None);
        assert_eq!(to_json("{'a\\"), None);
    }

    #[test]
    fn escaped_quote_stays_inside_literal() {
        assert_eq!(to_json(r"{'it\'s': 1}").unwrap(), r#"{"it\'s": 1}"#);
    }
}
