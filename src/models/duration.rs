//! Duration letters
//!
//! Each letter adds `1/denominator` of a whole note. Letters written in a
//! row are summed, so `QI` is a dotted quarter.

use num_rational::Rational32;
use serde::{Deserialize, Serialize};

/// Exact note length as a fraction of a whole note
pub type Rational = Rational32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationLetter {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    OneTwentyEighth,
}

impl DurationLetter {
    pub fn from_char(c: char) -> Option<DurationLetter> {
        match c.to_ascii_uppercase() {
            'W' => Some(DurationLetter::Whole),
            'H' => Some(DurationLetter::Half),
            'Q' => Some(DurationLetter::Quarter),
            'I' => Some(DurationLetter::Eighth),
            'S' => Some(DurationLetter::Sixteenth),
            'T' => Some(DurationLetter::ThirtySecond),
            'X' => Some(DurationLetter::SixtyFourth),
            'O' => Some(DurationLetter::OneTwentyEighth),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            DurationLetter::Whole => 'W',
            DurationLetter::Half => 'H',
            DurationLetter::Quarter => 'Q',
            DurationLetter::Eighth => 'I',
            DurationLetter::Sixteenth => 'S',
            DurationLetter::ThirtySecond => 'T',
            DurationLetter::SixtyFourth => 'X',
            DurationLetter::OneTwentyEighth => 'O',
        }
    }

    pub fn denominator(&self) -> i32 {
        match self {
            DurationLetter::Whole => 1,
            DurationLetter::Half => 2,
            DurationLetter::Quarter => 4,
            DurationLetter::Eighth => 8,
            DurationLetter::Sixteenth => 16,
            DurationLetter::ThirtySecond => 32,
            DurationLetter::SixtyFourth => 64,
            DurationLetter::OneTwentyEighth => 128,
        }
    }

    pub fn value(&self) -> Rational {
        Rational::new(1, self.denominator())
    }

    /// Letter given to each member of a comma group of `size` swars.
    ///
    /// Groups larger than six fall back to a quarter note.
    pub fn for_group_size(size: usize) -> DurationLetter {
        match size {
            1 => DurationLetter::Quarter,
            2 => DurationLetter::Eighth,
            3 => DurationLetter::Sixteenth,
            4 => DurationLetter::ThirtySecond,
            5 => DurationLetter::SixtyFourth,
            6 => DurationLetter::OneTwentyEighth,
            _ => DurationLetter::Quarter,
        }
    }
}

/// Length of a note written without any duration letter
pub fn default_duration() -> Rational {
    DurationLetter::Quarter.value()
}

/// Sum the run of duration letters at the start of `input`.
///
/// Scanning stops at the first character that is not a duration letter;
/// that character contributes nothing. An empty run yields a quarter note.
///
/// Returns the total and the number of bytes consumed.
pub fn scan_duration(input: &str) -> (Rational, usize) {
    let mut total = Rational::from_integer(0);
    let mut consumed = 0;

    for c in input.chars() {
        match DurationLetter::from_char(c) {
            Some(letter) => {
                total += letter.value();
                consumed += c.len_utf8();
            }
            None => break,
        }
    }

    if consumed == 0 {
        (default_duration(), 0)
    } else {
        (total, consumed)
    }
}

pub fn to_f64(duration: Rational) -> f64 {
    *duration.numer() as f64 / *duration.denom() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_table() {
        let letters = "WHQISTXO";
        let expected = [1, 2, 4, 8, 16, 32, 64, 128];
        for (c, denom) in letters.chars().zip(expected) {
            let letter = DurationLetter::from_char(c).unwrap();
            assert_eq!(letter.denominator(), denom);
            assert_eq!(letter.as_char(), c);
        }
        assert_eq!(DurationLetter::from_char('q'), Some(DurationLetter::Quarter));
        assert_eq!(DurationLetter::from_char('K'), None);
    }

    #[test]
    fn test_scan_sums_letters() {
        let (total, consumed) = scan_duration("QI");
        assert_eq!(total, Rational::new(3, 8));
        assert_eq!(consumed, 2);

        let (total, _) = scan_duration("WWH");
        assert_eq!(total, Rational::new(5, 2));
    }

    #[test]
    fn test_scan_stops_at_unknown_character() {
        let (total, consumed) = scan_duration("HZQ");
        assert_eq!(total, Rational::new(1, 2));
        assert_eq!(consumed, 1);
    }

    #[test]
    fn test_scan_defaults_to_quarter() {
        assert_eq!(scan_duration(""), (Rational::new(1, 4), 0));
        assert_eq!(scan_duration("=5"), (Rational::new(1, 4), 0));
    }

    #[test]
    fn test_group_sizes() {
        let letters: String = (1..=7)
            .map(|n| DurationLetter::for_group_size(n).as_char())
            .collect();
        assert_eq!(letters, "QISTXOQ");
        assert_eq!(DurationLetter::for_group_size(0), DurationLetter::Quarter);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(Rational::new(3, 8)), 0.375);
        assert_eq!(to_f64(default_duration()), 0.25);
    }
}
