//! Shell-style word splitting for command lines.
//!
//! Follows POSIX shell quoting so that `notes "Great first half"` yields a
//! single `Great first half` word:
//!
//! - unquoted space, tab, CR and LF separate words; other whitespace is
//!   ordinary text;
//! - `'...'` is taken literally;
//! - inside `"..."` a backslash only escapes `"` and `\`, and is kept before
//!   anything else;
//! - outside quotes a backslash escapes the next character;
//! - quoted and unquoted pieces that touch form one word (`a"b c"` is `ab c`).

use super::error::ParseError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Between,
    Word,
    Single,
    Double,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split `line` into words.
///
/// Fails on an unterminated quote or a trailing lone backslash.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::Between;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Between | State::Word => match c {
                c if is_separator(c) => {
                    if state == State::Word {
                        tokens.push(std::mem::take(&mut current));
                        state = State::Between;
                    }
                }
                '\'' => state = State::Single,
                '"' => state = State::Double,
                '\\' => {
                    let escaped = chars
                        .next()
                        .ok_or_else(|| ParseError::new("No escaped character."))?;
                    current.push(escaped);
                    state = State::Word;
                }
                c => {
                    current.push(c);
                    state = State::Word;
                }
            },
            State::Single => match c {
                '\'' => state = State::Word,
                c => current.push(c),
            },
            State::Double => match c {
                '"' => state = State::Word,
                '\\' => {
                    let escaped = chars
                        .next()
                        .ok_or_else(|| ParseError::new("No escaped character."))?;
                    if !matches!(escaped, '"' | '\\') {
                        current.push('\\');
                    }
                    current.push(escaped);
                }
                c => current.push(c),
            },
        }
    }

    match state {
        State::Single | State::Double => Err(ParseError::new("No closing quotation.")),
        State::Word => {
            tokens.push(current);
            Ok(tokens)
        }
        State::Between => Ok(tokens),
    }
}
