use std::fmt;

/// Difficulty of a puzzle, named after its count of givens.
///
/// The classification is a static lookup: boards whose count of givens
/// matches none of the named levels are [`Level::Unknown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[allow(missing_docs)]
pub enum Level {
    Diabolic,
    Extreme,
    Expert,
    VeryHard,
    Hard,
    Medium,
    Easy,
    VeryEasy,
    Unknown,
}

impl Level {
    /// Classifies a board by its count of given digits.
    pub fn from_givens(count: u8) -> Level {
        match count {
            17 => Level::Diabolic,
            18 => Level::Extreme,
            20 => Level::Expert,
            24 => Level::VeryHard,
            28 => Level::Hard,
            30 => Level::Medium,
            32 => Level::Easy,
            36 => Level::VeryEasy,
            _ => Level::Unknown,
        }
    }

    /// The count of givens that defines this level, `None` for [`Level::Unknown`].
    pub fn givens(self) -> Option<u8> {
        match self {
            Level::Diabolic => Some(17),
            Level::Extreme => Some(18),
            Level::Expert => Some(20),
            Level::VeryHard => Some(24),
            Level::Hard => Some(28),
            Level::Medium => Some(30),
            Level::Easy => Some(32),
            Level::VeryEasy => Some(36),
            Level::Unknown => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Level::Diabolic => "Diabolic",
            Level::Extreme => "Extreme",
            Level::Expert => "Expert",
            Level::VeryHard => "VeryHard",
            Level::Hard => "Hard",
            Level::Medium => "Medium",
            Level::Easy => "Easy",
            Level::VeryEasy => "VeryEasy",
            Level::Unknown => "Unknown",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn givens_roundtrip() {
        for level in Level::iter() {
            match level.givens() {
                Some(count) => assert_eq!(Level::from_givens(count), level),
                None => assert_eq!(level, Level::Unknown),
            }
        }
    }

    #[test]
    fn unnamed_counts_are_unknown() {
        for count in &[0, 16, 19, 40, 81] {
            assert_eq!(Level::from_givens(*count), Level::Unknown);
        }
    }
}
