//! Persisted navigation record.
//!
//! Survives process recreation only: the shell hands the encoded bytes to
//! a [`SnapshotPort`](crate::app::ports::SnapshotPort) on suspend and
//! reads them back on resume.  Two encodings are supported:
//!
//! - `Postcard`: compact binary, the default.
//! - `Json`: `{"screenName":"DETAIL","pet":{...}}`, for debugging.  The
//!   `pet` key is left out for every other screen.

use serde::{Deserialize, Serialize};

use super::{Screen, ScreenName};
use crate::error::{Error, Result};
use crate::pet::Pet;

/// JSON view of a [`NavSnapshot`].  Postcard has no field presence, so
/// only this path drops an absent `pet`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRecord<'a> {
    screen_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pet: Option<&'a Pet>,
}

/// Wire encoding for [`NavSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapshotFormat {
    #[default]
    Postcard,
    Json,
}

/// The structured record written on suspend.
///
/// `pet` is present exactly when `screen_name == "DETAIL"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSnapshot {
    pub screen_name: String,
    #[serde(default)]
    pub pet: Option<Pet>,
}

impl NavSnapshot {
    pub fn from_screen(screen: &Screen) -> Self {
        Self {
            screen_name: screen.name().as_str().to_owned(),
            pet: screen.pet().cloned(),
        }
    }

    /// Validate the record and rebuild the screen it describes.
    pub fn to_screen(&self) -> Result<Screen> {
        let name: ScreenName = self.screen_name.parse()?;
        match (name, &self.pet) {
            (ScreenName::Detail, Some(pet)) => Ok(Screen::detail(pet.clone())),
            (ScreenName::Detail, None) => Err(Error::MalformedState("DETAIL record without pet")),
            (ScreenName::Home | ScreenName::Account, Some(_)) => {
                Err(Error::MalformedState("pet payload on non-detail screen"))
            }
            (ScreenName::Home, None) => Ok(Screen::Home),
            (ScreenName::Account, None) => Ok(Screen::Account),
        }
    }

    pub fn encode(&self, format: SnapshotFormat) -> Result<Vec<u8>> {
        match format {
            SnapshotFormat::Postcard => {
                postcard::to_allocvec(self).map_err(|_| Error::Codec("postcard encode failed"))
            }
            SnapshotFormat::Json => {
                let record = JsonRecord {
                    screen_name: &self.screen_name,
                    pet: self.pet.as_ref(),
                };
                serde_json::to_vec(&record).map_err(|_| Error::Codec("json encode failed"))
            }
        }
    }

    /// Decode bytes produced by [`encode`](Self::encode).  Undecodable input
    /// is reported as [`Error::MalformedState`].
    pub fn decode(bytes: &[u8], format: SnapshotFormat) -> Result<Self> {
        match format {
            SnapshotFormat::Postcard => {
                let (record, rest) = postcard::take_from_bytes(bytes)
                    .map_err(|_| Error::MalformedState("undecodable postcard snapshot"))?;
                if !rest.is_empty() {
                    return Err(Error::MalformedState("trailing bytes in postcard snapshot"));
                }
                Ok(record)
            }
            SnapshotFormat::Json => serde_json::from_slice(bytes)
                .map_err(|_| Error::MalformedState("undecodable json snapshot")),
        }
    }
}
