use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::Track;

/// Ring of the Camelot wheel a key sits on.
///
/// The inner ring `A` holds the minor keys, the outer ring `B` the major keys.
/// `A` orders before `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    A,
    B,
}

impl Letter {
    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    fn other(self) -> Self {
        match self {
            Letter::A => Letter::B,
            Letter::B => Letter::A,
        }
    }
}

/// A key in Camelot notation, e.g. `8B` for C major or `5A` for C minor.
///
/// Ordering is numeric on the wheel position first and on the letter second,
/// so `9B < 10A < 10B < 11B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Notation {
    position: u8,
    letter: Letter,
}

/// Wheel positions indexed by pitch class (0 = C .. 11 = B), major keys.
const MAJOR_POSITIONS: [u8; 12] = [8, 3, 10, 5, 12, 7, 2, 9, 4, 11, 6, 1];

/// Wheel positions indexed by pitch class, minor keys.
const MINOR_POSITIONS: [u8; 12] = [5, 12, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10];

impl Notation {
    pub const MIN_POSITION: u8 = 1;
    pub const MAX_POSITION: u8 = 12;

    /// Returns `None` unless `position` is within `1..=12`.
    pub fn new(position: u8, letter: Letter) -> Option<Self> {
        (Self::MIN_POSITION..=Self::MAX_POSITION)
            .contains(&position)
            .then_some(Self { position, letter })
    }

    pub fn position(self) -> u8 {
        self.position
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    /// Steps `offset` positions around the wheel, staying on the same ring.
    pub fn rotate(self, offset: i32) -> Self {
        let zero_based = (i32::from(self.position) - 1 + offset).rem_euclid(12);
        Self {
            position: zero_based as u8 + 1,
            letter: self.letter,
        }
    }

    /// Same position on the other ring (the relative major/minor).
    pub fn relative(self) -> Self {
        Self {
            position: self.position,
            letter: self.letter.other(),
        }
    }

    /// The keys that mix harmonically with this one, in the order
    /// self, one step down, one step up, relative.
    pub fn compatible(self) -> [Notation; 4] {
        [self, self.rotate(-1), self.rotate(1), self.relative()]
    }

    pub fn is_compatible(self, other: Notation) -> bool {
        self.compatible().contains(&other)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position, self.letter.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNotationError(String);

impl fmt::Display for ParseNotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid Camelot notation: {:?}", self.0)
    }
}

impl std::error::Error for ParseNotationError {}

impl FromStr for Notation {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNotationError(s.to_string());
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Letter::A,
            Some('B') => Letter::B,
            _ => return Err(err()),
        };
        let position = chars.as_str().parse::<u8>().map_err(|_| err())?;
        Notation::new(position, letter).ok_or_else(err)
    }
}

impl TryFrom<String> for Notation {
    type Error = ParseNotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Notation> for String {
    fn from(notation: Notation) -> Self {
        notation.to_string()
    }
}

/// Maps a pitch class (`0..=11`) and mode (`1` major, `0` minor) onto the
/// Camelot wheel.
///
/// Values outside that domain, including Spotify's `-1` for "no key
/// detected", yield `None`.
pub fn to_notation(pitch_class: i32, mode: i32) -> Option<Notation> {
    let index = usize::try_from(pitch_class).ok().filter(|pc| *pc < 12)?;
    let (position, letter) = match mode {
        1 => (MAJOR_POSITIONS[index], Letter::B),
        0 => (MINOR_POSITIONS[index], Letter::A),
        _ => return None,
    };
    Some(Notation { position, letter })
}

/// Derives the notation of every track and orders the tracks by it.
///
/// The sort is stable. Tracks without a key or mode, or with values outside
/// the wheel, keep `notation == None` and go to the end.
pub fn rank_by_notation(tracks: Vec<Track>) -> Vec<Track> {
    let mut tracks: Vec<Track> = tracks
        .into_iter()
        .map(|mut track| {
            track.notation = match (track.key, track.mode) {
                (Some(key), Some(mode)) => to_notation(key, mode),
                _ => None,
            };
            track
        })
        .collect();

    tracks.sort_by_key(|t| (t.notation.is_none(), t.notation));
    tracks
}
