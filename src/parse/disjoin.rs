//! Disjoin swars sharing one beat
//!
//! Swars joined with `,` are played within a single beat, so `sa,re`
//! becomes `saI reI`: two eighth notes filling one quarter. Each member of
//! a group of N gets the duration letter for N (see
//! [`DurationLetter::for_group_size`]).

use crate::models::DurationLetter;

pub const GROUP_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, Default)]
pub struct DisjoinPreprocessor;

impl DisjoinPreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite every comma group in `music` into separate duration-tagged tokens
    pub fn preprocess(&self, music: &str) -> String {
        let tokens: Vec<&str> = music.split(' ').collect();
        if tokens.len() == 1 && !music.contains(GROUP_SEPARATOR) {
            return music.to_string();
        }

        let mut out = String::with_capacity(music.len() + tokens.len());
        for token in tokens {
            let swars = split_group(token);
            if swars.len() > 1 {
                let letter = DurationLetter::for_group_size(swars.len()).as_char();
                for swar in swars {
                    out.push_str(swar);
                    out.push(letter);
                    out.push(' ');
                }
            } else {
                out.push_str(token);
                out.push(' ');
            }
        }

        out.trim_end().to_string()
    }
}

/// Split a token on commas, dropping trailing empty members (`sa,re,` is a pair)
fn split_group(token: &str) -> Vec<&str> {
    if !token.contains(GROUP_SEPARATOR) {
        return vec![token];
    }
    let mut swars: Vec<&str> = token.split(GROUP_SEPARATOR).collect();
    while swars.last() == Some(&"") {
        swars.pop();
    }
    swars
}
