//! Sample API responses shared by the unit tests.

use serde_json::{json, Value};

pub fn body(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

pub fn collection(url: &str, next_url: Option<&str>, data: Vec<Value>) -> Value {
    json!({
        "object": "collection",
        "url": url,
        "pages": {
            "per_page": 500,
            "next_url": next_url,
            "previous_url": null,
        },
        "total_count": data.len(),
        "data_updated_at": "2024-01-02T03:04:05.000000Z",
        "data": data,
    })
}

pub fn user() -> Value {
    json!({
        "object": "user",
        "url": "https://api.wanikani.com/v2/user",
        "data_updated_at": "2024-01-02T03:04:05.000000Z",
        "data": {
            "id": "5a6a5234-a392-4a87-8f3f-33342afe8a42",
            "username": "test-user",
            "level": 5,
            "profile_url": "https://www.wanikani.com/users/test-user",
            "started_at": "2012-05-11T00:52:18.958466Z",
            "current_vacation_started_at": null,
            "subscription": {
                "active": true,
                "type": "recurring",
                "max_level_granted": 60,
                "period_ends_at": "2024-12-11T14:15:59.000000Z",
            },
            "preferences": {
                "default_voice_actor_id": 1,
                "extra_study_autoplay_audio": false,
                "lessons_autoplay_audio": false,
                "lessons_batch_size": 10,
                "lessons_presentation_order": "ascending_level_then_subject",
                "reviews_autoplay_audio": false,
                "reviews_display_srs_indicator": true,
                "reviews_presentation_order": "shuffled",
            },
        },
    })
}

pub fn assignment() -> Value {
    json!({
        "id": 80463006,
        "object": "assignment",
        "url": "https://api.wanikani.com/v2/assignments/80463006",
        "data_updated_at": "2017-10-30T01:51:10.438432Z",
        "data": {
            "created_at": "2017-09-05T23:38:10.695133Z",
            "subject_id": 8761,
            "subject_type": "radical",
            "srs_stage": 8,
            "unlocked_at": "2017-09-05T23:38:10.695133Z",
            "started_at": "2017-09-05T23:41:28.980679Z",
            "passed_at": "2017-09-07T17:14:14.491889Z",
            "burned_at": null,
            "available_at": "2018-02-27T00:00:00.000000Z",
            "resurrected_at": null,
            "hidden": false,
        },
    })
}

pub fn summary() -> Value {
    json!({
        "id": 1,
        "object": "report",
        "url": "https://api.wanikani.com/v2/summary",
        "data_updated_at": null,
        "data": {
            "lessons": [
                {"available_at": "2024-01-01T00:00:00Z", "subject_ids": [10, 11]},
            ],
            "next_reviews_at": null,
            "reviews": [],
        },
    })
}

pub fn voice_actor() -> Value {
    json!({
        "id": 1,
        "object": "voice_actor",
        "url": "https://api.wanikani.com/v2/voice_actors/1",
        "data_updated_at": "2019-11-27T17:50:18.000000Z",
        "data": {
            "gender": "male",
            "name": "Kenichi",
            "description": "Tokyo accent",
        },
    })
}

pub fn radical() -> Value {
    json!({
        "id": 1,
        "object": "radical",
        "url": "https://api.wanikani.com/v2/subjects/1",
        "data_updated_at": "2018-03-29T23:13:14.064836Z",
        "data": {
            "amalgamation_subject_ids": [5, 4, 98],
            "auxiliary_meanings": [],
            "characters": "一",
            "character_images": [
                {
                    "url": "https://files.wanikani.com/a.png",
                    "content_type": "image/png",
                    "metadata": {
                        "color": "#000000",
                        "dimensions": "1024x1024",
                        "style_name": "original",
                    },
                },
                {
                    "url": "https://files.wanikani.com/the-good-path",
                    "content_type": "image/svg+xml",
                    "metadata": {"inline_styles": true},
                },
            ],
            "created_at": "2012-02-27T18:08:16.000000Z",
            "document_url": "https://www.wanikani.com/radicals/ground",
            "hidden_at": null,
            "lesson_position": 0,
            "level": 1,
            "meanings": [
                {"meaning": "Ground", "primary": true, "accepted_answer": true},
            ],
            "meaning_mnemonic": "This radical consists of a single, horizontal stroke.",
            "slug": "ground",
            "spaced_repetition_system_id": 2,
        },
    })
}

pub fn kanji() -> Value {
    json!({
        "id": 440,
        "object": "kanji",
        "url": "https://api.wanikani.com/v2/subjects/440",
        "data_updated_at": "2018-03-29T23:14:30.805034Z",
        "data": {
            "amalgamation_subject_ids": [56, 88, 91],
            "auxiliary_meanings": [
                {"meaning": "1", "type": "blacklist"},
            ],
            "characters": "一",
            "component_subject_ids": [1],
            "created_at": "2012-02-27T19:55:19.000000Z",
            "document_url": "https://www.wanikani.com/kanji/%E4%B8%80",
            "hidden_at": null,
            "lesson_position": 2,
            "level": 1,
            "meanings": [
                {"meaning": "One", "primary": true, "accepted_answer": true},
            ],
            "meaning_hint": "To remember the meaning of One, imagine yourself there.",
            "meaning_mnemonic": "Lying on the ground is something that looks just like the ground.",
            "readings": [
                {"type": "onyomi", "primary": true, "accepted_answer": true, "reading": "いち"},
                {"type": "kunyomi", "primary": false, "accepted_answer": false, "reading": "ひと"},
                {"type": "nanori", "primary": false, "accepted_answer": false, "reading": "かず"},
            ],
            "reading_mnemonic": "As you're sitting there next to Ichy, you say it.",
            "reading_hint": null,
            "slug": "一",
            "visually_similar_subject_ids": [],
            "spaced_repetition_system_id": 1,
        },
    })
}

fn pronunciation_audio() -> Value {
    json!({
        "url": "https://files.wanikani.com/w4yp5o02betioucki05lp6x78quy",
        "content_type": "audio/mpeg",
        "metadata": {
            "gender": "male",
            "source_id": 21630,
            "pronunciation": "いち",
            "voice_actor_id": 2,
            "voice_actor_name": "Kenichi",
            "voice_description": "Tokyo accent",
        },
    })
}

pub fn vocabulary() -> Value {
    json!({
        "id": 2467,
        "object": "vocabulary",
        "url": "https://api.wanikani.com/v2/subjects/2467",
        "data_updated_at": "2018-12-12T23:09:52.234049Z",
        "data": {
            "auxiliary_meanings": [],
            "characters": "一",
            "component_subject_ids": [440],
            "context_sentences": [
                {"en": "Let’s meet up once.", "ja": "一ど、あいましょう。"},
            ],
            "created_at": "2012-02-28T08:04:47.000000Z",
            "document_url": "https://www.wanikani.com/vocabulary/%E4%B8%80",
            "hidden_at": null,
            "lesson_position": 44,
            "level": 1,
            "meanings": [
                {"meaning": "One", "primary": true, "accepted_answer": true},
            ],
            "meaning_mnemonic": "As is the case with most vocab words that consist of a single kanji.",
            "parts_of_speech": ["numeral"],
            "pronunciation_audios": [pronunciation_audio()],
            "readings": [
                {"primary": true, "reading": "いち", "accepted_answer": true},
            ],
            "reading_mnemonic": "When a vocab word is all alone, it usually uses the kun'yomi reading.",
            "slug": "一",
            "spaced_repetition_system_id": 1,
        },
    })
}

pub fn kana_vocabulary() -> Value {
    json!({
        "id": 9210,
        "object": "kana_vocabulary",
        "url": "https://api.wanikani.com/v2/subjects/9210",
        "data_updated_at": "2023-05-03T13:01:51.444403Z",
        "data": {
            "auxiliary_meanings": [],
            "characters": "おやつ",
            "context_sentences": [
                {"en": "Today I had a rice cracker for a snack.", "ja": "今日はおやつにせんべいを食べた。"},
            ],
            "created_at": "2023-02-27T19:26:24.000000Z",
            "document_url": "https://www.wanikani.com/vocabulary/おやつ",
            "hidden_at": null,
            "lesson_position": 0,
            "level": 8,
            "meaning_mnemonic": "You know what a snack is.",
            "meanings": [
                {"meaning": "Snack", "primary": true, "accepted_answer": true},
            ],
            "parts_of_speech": ["noun"],
            "pronunciation_audios": [pronunciation_audio()],
            "slug": "おやつ",
            "spaced_repetition_system_id": 1,
        },
    })
}
