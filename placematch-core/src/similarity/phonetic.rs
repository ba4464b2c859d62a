//! Soundex phonetic codes

use super::TokenSimilarity;

/// Length of a Soundex code
pub const CODE_LEN: usize = 4;

/// Matches tokens whose Soundex codes are identical
///
/// Binary decision, no threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Phonetic;

impl TokenSimilarity for Phonetic {
    fn is_match(&self, a: &str, b: &str) -> bool {
        soundex(a) == soundex(b)
    }

    fn name(&self) -> &'static str {
        "phonetic"
    }
}

fn digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Compute the American Soundex code of a token.
///
/// Only ASCII letters are coded, and any token with at least one ASCII
/// letter gets a code of exactly [`CODE_LEN`] characters. A token with no
/// ASCII letter has no consonant skeleton: its uppercased text is returned
/// as is, not padded or truncated to `CODE_LEN`, so distinct numbers or
/// symbols never collide.
pub fn soundex(token: &str) -> String {
    let mut letters = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());

    let Some(first) = letters.next() else {
        return token.to_uppercase();
    };

    let mut code = String::with_capacity(CODE_LEN);
    code.push(first);
    let mut last = digit(first);

    for c in letters {
        if code.len() == CODE_LEN {
            break;
        }
        match c {
            // H and W do not separate letters with the same code
            'H' | 'W' => {}
            'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => last = None,
            _ => {
                let d = digit(c);
                if d != last {
                    if let Some(d) = d {
                        code.push(d);
                    }
                    last = d;
                }
            }
        }
    }

    while code.len() < CODE_LEN {
        code.push('0');
    }
    code
}
