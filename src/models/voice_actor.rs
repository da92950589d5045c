use serde::{Deserialize, Serialize};

use crate::schema::ResourceData;

/// A voice actor used for vocabulary pronunciation audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceActor {
    pub description: String,
    pub gender: Gender,
    pub name: String,
}

impl ResourceData for VoiceActor {
    const OBJECT: &'static str = "voice_actor";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}
