//! Envelope shapes shared by every WaniKani endpoint.
//!
//! Responses are decoded in two steps: first the envelope, with the payload kept as raw
//! JSON, then the payload against the schema selected by the envelope's `object` tag.
//! Either step failing rejects the whole response.

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

const COLLECTION_OBJECT: &str = "collection";

/// A payload type that can appear as the `data` of a single resource.
pub trait ResourceData: DeserializeOwned {
    /// Value of the envelope's `object` field for this payload.
    const OBJECT: &'static str;
}

/// A single resource: common metadata around a typed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub id: Option<u64>,
    pub url: Url,
    pub data_updated_at: Option<DateTime<Utc>>,
    pub data: T,
}

impl<T> Resource<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        Resource {
            id: self.id,
            url: self.url,
            data_updated_at: self.data_updated_at,
            data: f(self.data),
        }
    }
}

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub url: Url,
    pub pages: Pages,
    pub total_count: u64,
    pub data_updated_at: Option<DateTime<Utc>>,
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pages {
    #[serde(default, deserialize_with = "serde_url::deserialize_option")]
    pub next_url: Option<Url>,
    #[serde(default, deserialize_with = "serde_url::deserialize_option")]
    pub previous_url: Option<Url>,
    pub per_page: u32,
}

/// Wire shape of a resource with the payload not yet validated.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    id: Option<u64>,
    #[serde(with = "serde_url")]
    url: Url,
    #[serde(default)]
    data_updated_at: Option<DateTime<Utc>>,
    pub(crate) object: String,
    data: Value,
}

impl Envelope {
    pub(crate) fn parse(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(ValidationError::shape("resource"))
    }

    pub(crate) fn into_resource<T: ResourceData>(self) -> Result<Resource<T>, ValidationError> {
        if self.object != T::OBJECT {
            return Err(ValidationError::UnexpectedObject {
                expected: T::OBJECT,
                found: self.object,
            });
        }
        self.decode_data(T::OBJECT)
    }

    /// Decodes `data` as `T` without checking the `object` tag.
    pub(crate) fn decode_data<T: DeserializeOwned>(
        self,
        context: &'static str,
    ) -> Result<Resource<T>, ValidationError> {
        let data = serde_json::from_value(self.data).map_err(ValidationError::shape(context))?;

        Ok(Resource {
            id: self.id,
            url: self.url,
            data_updated_at: self.data_updated_at,
            data,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CollectionEnvelope {
    object: String,
    #[serde(with = "serde_url")]
    url: Url,
    pages: Pages,
    total_count: u64,
    #[serde(default)]
    data_updated_at: Option<DateTime<Utc>>,
    data: Vec<Envelope>,
}

pub fn decode_resource<T: ResourceData>(body: &[u8]) -> Result<Resource<T>, ValidationError> {
    Envelope::parse(body)?.into_resource()
}

pub fn decode_collection<T: ResourceData>(
    body: &[u8],
) -> Result<Collection<Resource<T>>, ValidationError> {
    decode_collection_with(body, Envelope::into_resource::<T>)
}

/// Decodes a collection, running every item through `decode_item`.
pub(crate) fn decode_collection_with<T, F>(
    body: &[u8],
    decode_item: F,
) -> Result<Collection<T>, ValidationError>
where
    F: Fn(Envelope) -> Result<T, ValidationError>,
{
    let raw: CollectionEnvelope =
        serde_json::from_slice(body).map_err(ValidationError::shape(COLLECTION_OBJECT))?;

    if raw.object != COLLECTION_OBJECT {
        return Err(ValidationError::UnexpectedObject {
            expected: COLLECTION_OBJECT,
            found: raw.object,
        });
    }

    let data = raw
        .data
        .into_iter()
        .map(decode_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Collection {
        url: raw.url,
        pages: raw.pages,
        total_count: raw.total_count,
        data_updated_at: raw.data_updated_at,
        data,
    })
}

/// (De)serializes a [`Url`] as a string, rejecting anything that does not parse.
pub(crate) mod serde_url {
    use reqwest::Url;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(url: &Url, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(url.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Url, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Url::parse(&raw).map_err(de::Error::custom)
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Url>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| Url::parse(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
