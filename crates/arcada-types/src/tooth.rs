//! Tooth numbering and anatomical sections.
//!
//! `ToothNumber` is any two-digit capture from a filename, object name,
//! or script line. `ToothId` is a number proven to lie in the permanent
//! dentition. Keeping the two apart means the range check happens exactly
//! once, at the manifest boundary.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Two-digit tooth number as captured from input, not yet range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToothNumber(pub u8);

impl ToothNumber {
    /// Checks the permanent-tooth range: quadrant digit 1-4, position
    /// digit 1-8 (11-18, 21-28, 31-38, 41-48).
    pub fn validate(self) -> Option<ToothId> {
        let quadrant = self.0 / 10;
        let position = self.0 % 10;
        if (1..=4).contains(&quadrant) && (1..=8).contains(&position) {
            Some(ToothId(self.0))
        } else {
            None
        }
    }
}

impl fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Validated permanent-tooth identifier.
///
/// Constructed only through [`ToothNumber::validate`]. Serializes as its
/// two-digit string so it can key JSON objects directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToothId(u8);

impl ToothId {
    /// Returns the raw two-digit value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<ToothId> for ToothNumber {
    fn from(id: ToothId) -> Self {
        ToothNumber(id.0)
    }
}

impl fmt::Display for ToothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for ToothId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ToothId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let number: u8 = raw
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid tooth id: {raw:?}")))?;
        ToothNumber(number)
            .validate()
            .ok_or_else(|| de::Error::custom(format!("not a permanent tooth: {raw:?}")))
    }
}

/// Anatomical portion of a tooth mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Crown,
    Root,
    Nucleus,
}

impl Section {
    /// Every section, in manifest order (C, R, N).
    pub const ALL: [Section; 3] = [Section::Crown, Section::Root, Section::Nucleus];

    /// Maps an uppercase section letter to its section.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'C' => Some(Section::Crown),
            'R' => Some(Section::Root),
            'N' => Some(Section::Nucleus),
            _ => None,
        }
    }

    /// The single-letter encoding used in filenames and the manifest.
    pub fn letter(self) -> char {
        match self {
            Section::Crown => 'C',
            Section::Root => 'R',
            Section::Nucleus => 'N',
        }
    }
}
