use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod assignment;
mod subject;
mod summary;
mod user;
mod voice_actor;

pub use assignment::Assignment;
pub use subject::{
    decode_subject, decode_subject_collection, AudioContentType, AuxiliaryMeaning,
    AuxiliaryMeaningType, CharacterImage, ContextSentence, KanaVocabulary, Kanji, KanjiReading,
    KanjiReadingType, Meaning, PngMetadata, PronunciationAudio, PronunciationMetadata, Radical,
    Subject, SubjectBase, SubjectData, SubjectType, SvgMetadata, Vocabulary, VocabularyReading,
};
pub use summary::{Summary, SummaryEntry};
pub use user::{
    LessonsPresentationOrder, Preferences, ReviewsPresentationOrder, Subscription,
    SubscriptionType, User,
};
pub use voice_actor::{Gender, VoiceActor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{what} {value} is outside {min}..={max}")]
pub struct OutOfRange {
    what: &'static str,
    value: u8,
    min: u8,
    max: u8,
}

/// A WaniKani level, `1` to `60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 60;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OutOfRange {
                what: "level",
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position of an assignment in the spaced repetition system, `0` (locked / in lessons)
/// to `9` (burned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SrsStage(u8);

impl SrsStage {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 9;
    pub const PASSED: SrsStage = SrsStage(5);
    pub const BURNED: SrsStage = SrsStage(9);

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_passed(self) -> bool {
        self >= Self::PASSED
    }

    pub fn is_burned(self) -> bool {
        self == Self::BURNED
    }
}

impl TryFrom<u8> for SrsStage {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(OutOfRange {
                what: "srs stage",
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }
}

impl From<SrsStage> for u8 {
    fn from(stage: SrsStage) -> Self {
        stage.0
    }
}

impl fmt::Display for SrsStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
