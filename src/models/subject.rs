//! Subjects are the radicals, kanji, vocabulary and kana-only vocabulary taught through
//! lessons and reviews.
//!
//! The envelope's `object` tag decides which payload shape applies. The tag is parsed
//! first and the payload is only ever decoded against the matching shape: fields such
//! as `readings` mean different things for kanji and vocabulary, so there is no fallback
//! to "whichever shape fits".

use std::str::FromStr;

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::Level;
use crate::error::ValidationError;
use crate::schema::{self, serde_url, Collection, Envelope, Resource};

pub type Subject = Resource<SubjectData>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubjectType {
    Radical,
    Kanji,
    Vocabulary,
    KanaVocabulary,
}

impl FromStr for SubjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radical" => Ok(SubjectType::Radical),
            "kanji" => Ok(SubjectType::Kanji),
            "vocabulary" => Ok(SubjectType::Vocabulary),
            "kana_vocabulary" => Ok(SubjectType::KanaVocabulary),
            other => Err(ValidationError::UnknownSubjectKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubjectData {
    Radical(Radical),
    Kanji(Kanji),
    Vocabulary(Vocabulary),
    KanaVocabulary(KanaVocabulary),
}

impl SubjectData {
    pub fn subject_type(&self) -> SubjectType {
        match self {
            SubjectData::Radical(_) => SubjectType::Radical,
            SubjectData::Kanji(_) => SubjectType::Kanji,
            SubjectData::Vocabulary(_) => SubjectType::Vocabulary,
            SubjectData::KanaVocabulary(_) => SubjectType::KanaVocabulary,
        }
    }

    pub fn base(&self) -> &SubjectBase {
        match self {
            SubjectData::Radical(radical) => &radical.base,
            SubjectData::Kanji(kanji) => &kanji.base,
            SubjectData::Vocabulary(vocabulary) => &vocabulary.base,
            SubjectData::KanaVocabulary(vocabulary) => &vocabulary.base,
        }
    }

    /// `None` only for radicals without a Unicode character.
    pub fn characters(&self) -> Option<&str> {
        match self {
            SubjectData::Radical(radical) => radical.characters.as_deref(),
            SubjectData::Kanji(kanji) => Some(&kanji.characters),
            SubjectData::Vocabulary(vocabulary) => Some(&vocabulary.characters),
            SubjectData::KanaVocabulary(vocabulary) => Some(&vocabulary.characters),
        }
    }
}

/// Fields shared by every kind of subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectBase {
    #[serde(default)]
    pub auxiliary_meanings: Vec<AuxiliaryMeaning>,
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_url")]
    pub document_url: Url,
    pub hidden_at: Option<DateTime<Utc>>,
    /// Position within the subject's level; values repeat across levels.
    pub lesson_position: u32,
    pub level: Level,
    pub meaning_mnemonic: String,
    pub meanings: Vec<Meaning>,
    pub slug: String,
    pub spaced_repetition_system_id: u64,
}

impl SubjectBase {
    pub fn primary_meaning(&self) -> Option<&str> {
        self.meanings
            .iter()
            .find(|meaning| meaning.primary)
            .map(|meaning| meaning.meaning.as_str())
    }

    pub fn accepted_meanings(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .filter(|meaning| meaning.accepted_answer)
            .map(|meaning| meaning.meaning.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub meaning: String,
    pub primary: bool,
    pub accepted_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryMeaning {
    pub meaning: String,
    #[serde(rename = "type")]
    pub kind: AuxiliaryMeaningType,
}

/// Whitelisted meanings count as correct answers, blacklisted ones as incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuxiliaryMeaningType {
    Whitelist,
    Blacklist,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radical {
    #[serde(flatten)]
    pub base: SubjectBase,
    /// Kanji that use this radical as a component.
    pub amalgamation_subject_ids: Vec<u64>,
    /// Not every radical has a Unicode character; those are drawn from `character_images`.
    pub characters: Option<String>,
    pub character_images: Vec<CharacterImage>,
}

impl Radical {
    /// URL of the SVG rendition with built-in styling, if there is one.
    pub fn inline_svg_url(&self) -> Option<&str> {
        self.character_images.iter().find_map(|image| match image {
            CharacterImage::Svg { url, metadata } if metadata.inline_styles => Some(url.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type")]
pub enum CharacterImage {
    #[serde(rename = "image/png")]
    Png { url: String, metadata: PngMetadata },
    #[serde(rename = "image/svg+xml")]
    Svg { url: String, metadata: SvgMetadata },
}

impl CharacterImage {
    pub fn url(&self) -> &str {
        match self {
            CharacterImage::Png { url, .. } | CharacterImage::Svg { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PngMetadata {
    /// Hexadecimal colour of the asset.
    pub color: String,
    /// Pixel dimensions, e.g. `1024x1024`.
    pub dimensions: String,
    pub style_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgMetadata {
    pub inline_styles: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kanji {
    #[serde(flatten)]
    pub base: SubjectBase,
    /// Vocabulary that use this kanji as a component.
    pub amalgamation_subject_ids: Vec<u64>,
    pub characters: String,
    /// Radicals that must be passed before this kanji unlocks.
    pub component_subject_ids: Vec<u64>,
    pub meaning_hint: Option<String>,
    pub reading_hint: Option<String>,
    pub reading_mnemonic: String,
    pub readings: Vec<KanjiReading>,
    #[serde(default)]
    pub visually_similar_subject_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanjiReading {
    pub reading: String,
    pub primary: bool,
    pub accepted_answer: bool,
    #[serde(rename = "type")]
    pub kind: KanjiReadingType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KanjiReadingType {
    Kunyomi,
    Nanori,
    Onyomi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(flatten)]
    pub base: SubjectBase,
    pub characters: String,
    /// Kanji that must be passed before this vocabulary unlocks.
    pub component_subject_ids: Vec<u64>,
    pub context_sentences: Vec<ContextSentence>,
    pub parts_of_speech: Vec<String>,
    pub pronunciation_audios: Vec<PronunciationAudio>,
    pub readings: Vec<VocabularyReading>,
    pub reading_mnemonic: String,
}

/// Vocabulary written purely in kana: no component kanji and no readings to quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanaVocabulary {
    #[serde(flatten)]
    pub base: SubjectBase,
    pub characters: String,
    pub context_sentences: Vec<ContextSentence>,
    pub parts_of_speech: Vec<String>,
    pub pronunciation_audios: Vec<PronunciationAudio>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyReading {
    pub reading: String,
    pub primary: bool,
    pub accepted_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSentence {
    pub en: String,
    pub ja: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationAudio {
    #[serde(with = "serde_url")]
    pub url: Url,
    pub content_type: AudioContentType,
    pub metadata: PronunciationMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioContentType {
    #[serde(rename = "audio/mpeg")]
    Mpeg,
    #[serde(rename = "audio/ogg")]
    Ogg,
    // Not in the published API docs, but served in practice.
    #[serde(rename = "audio/webm")]
    Webm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationMetadata {
    pub gender: String,
    /// Shared by every audio file recorded from the same source.
    pub source_id: u64,
    /// The vocabulary in kana.
    pub pronunciation: String,
    pub voice_actor_id: u64,
    pub voice_actor_name: String,
    pub voice_description: String,
}

pub(crate) fn subject_from_envelope(envelope: Envelope) -> Result<Subject, ValidationError> {
    let subject_type: SubjectType = envelope.object.parse()?;

    let subject = match subject_type {
        SubjectType::Radical => envelope
            .decode_data::<Radical>("radical")?
            .map(SubjectData::Radical),
        SubjectType::Kanji => envelope
            .decode_data::<Kanji>("kanji")?
            .map(SubjectData::Kanji),
        SubjectType::Vocabulary => envelope
            .decode_data::<Vocabulary>("vocabulary")?
            .map(SubjectData::Vocabulary),
        SubjectType::KanaVocabulary => envelope
            .decode_data::<KanaVocabulary>("kana_vocabulary")?
            .map(SubjectData::KanaVocabulary),
    };

    Ok(subject)
}

pub fn decode_subject(body: &[u8]) -> Result<Subject, ValidationError> {
    subject_from_envelope(Envelope::parse(body)?)
}

pub fn decode_subject_collection(body: &[u8]) -> Result<Collection<Subject>, ValidationError> {
    schema::decode_collection_with(body, subject_from_envelope)
}
