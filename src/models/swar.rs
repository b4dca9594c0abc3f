//! Sargam scale degrees (swar)
//!
//! The sargam system uses syllables Sa, Re, Ga, Ma, Pa, Dha, Ni to
//! represent the seven degrees of the Hindustani scale. Komal (flat) forms
//! carry a trailing `K`, tivra Ma a trailing `T`:
//!
//! | symbol | offset | svar |
//! |--------|--------|------|
//! | SA  | 0  | Shadja |
//! | REK | 1  | komal Rishabha |
//! | RE  | 2  | Rishabha |
//! | GAK | 3  | komal Gandhara |
//! | GA  | 4  | Gandhara |
//! | MA  | 5  | Madhyama |
//! | MAT | 6  | tivra Madhyama |
//! | PA  | 7  | Panchama |
//! | DHK | 8  | komal Dhaivata |
//! | DH  | 9  | Dhaivata |
//! | NIK | 10 | komal Nishada |
//! | NI  | 11 | Nishada |

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Swar {
    Sa,
    ReKomal,
    Re,
    GaKomal,
    Ga,
    Ma,
    MaTivra,
    Pa,
    DhaKomal,
    Dha,
    NiKomal,
    Ni,
}

impl Swar {
    /// All twelve degrees in ascending semitone order
    pub const ALL: [Swar; 12] = [
        Swar::Sa,
        Swar::ReKomal,
        Swar::Re,
        Swar::GaKomal,
        Swar::Ga,
        Swar::Ma,
        Swar::MaTivra,
        Swar::Pa,
        Swar::DhaKomal,
        Swar::Dha,
        Swar::NiKomal,
        Swar::Ni,
    ];

    /// Notation symbol (uppercase)
    pub fn symbol(&self) -> &'static str {
        match self {
            Swar::Sa => "SA",
            Swar::ReKomal => "REK",
            Swar::Re => "RE",
            Swar::GaKomal => "GAK",
            Swar::Ga => "GA",
            Swar::Ma => "MA",
            Swar::MaTivra => "MAT",
            Swar::Pa => "PA",
            Swar::DhaKomal => "DHK",
            Swar::Dha => "DH",
            Swar::NiKomal => "NIK",
            Swar::Ni => "NI",
        }
    }

    /// Semitone offset from Sa
    pub fn offset(&self) -> u8 {
        match self {
            Swar::Sa => 0,
            Swar::ReKomal => 1,
            Swar::Re => 2,
            Swar::GaKomal => 3,
            Swar::Ga => 4,
            Swar::Ma => 5,
            Swar::MaTivra => 6,
            Swar::Pa => 7,
            Swar::DhaKomal => 8,
            Swar::Dha => 9,
            Swar::NiKomal => 10,
            Swar::Ni => 11,
        }
    }

    /// Parse a degree from the start of `input` using longest match.
    ///
    /// `input` is expected to be uppercase already. Every symbol is probed
    /// and the longest one that prefixes the input wins, so `REK` beats `RE`
    /// regardless of where either sits in [`Swar::ALL`].
    ///
    /// Returns the degree and the number of bytes consumed.
    pub fn parse_prefix(input: &str) -> Option<(Swar, usize)> {
        Self::ALL
            .iter()
            .filter(|swar| input.starts_with(swar.symbol()))
            .max_by_key(|swar| swar.symbol().len())
            .map(|swar| (*swar, swar.symbol().len()))
    }

    /// True when `prefix` is one of the seven two-letter base symbols
    pub fn is_base_symbol(prefix: &str) -> bool {
        Self::ALL
            .iter()
            .any(|swar| swar.symbol().len() == 2 && swar.symbol().eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for Swar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
