//! Pet value entity.
//!
//! A [`Pet`] is an immutable record.  The only field that ever changes is
//! `liked`, and even that change produces a *new* value via
//! [`Pet::with_liked_toggled`]; the [`PetStore`](crate::store::PetStore)
//! swaps the new value in at the old position.
//!
//! Identity is structural: two pets are "the same pet" when every field
//! compares equal.  See `DESIGN.md` for why no surrogate id is added.

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// The fixed set of species the app knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Species {
    Cat = 0,
    Dog = 1,
    Chameleon = 2,
}

impl Species {
    /// Every known species, in display order.
    pub const ALL: [Species; 3] = [Species::Cat, Species::Dog, Species::Chameleon];

    /// Bit used for this species inside a
    /// [`SpeciesFilter`](crate::store::SpeciesFilter).
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cat => "CAT",
            Self::Dog => "DOG",
            Self::Chameleon => "CHAMELEON",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Size / Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

// ---------------------------------------------------------------------------
// Pet
// ---------------------------------------------------------------------------

/// One adoptable pet.
///
/// Fields are private so the descriptive part of the record cannot be
/// edited after construction; use [`Pet::new`] and the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    name: String,
    species: Species,
    size: Size,
    sex: Sex,
    location: String,
    description: String,
    /// Opaque asset identifier for the large photo.
    image_ref: String,
    /// Opaque asset identifier for the small species icon.
    icon_ref: String,
    liked: bool,
}

impl Pet {
    /// Create a pet with empty text fields and `liked = false`.
    pub fn new(name: impl Into<String>, species: Species, size: Size, sex: Sex) -> Self {
        Self {
            name: name.into(),
            species,
            size,
            sex,
            location: String::new(),
            description: String::new(),
            image_ref: String::new(),
            icon_ref: String::new(),
            liked: false,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_assets(mut self, image_ref: impl Into<String>, icon_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self.icon_ref = icon_ref.into();
        self
    }

    #[must_use]
    pub fn with_liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    /// A copy of this pet with the `liked` flag inverted.  `self` is left
    /// untouched.
    #[must_use]
    pub fn with_liked_toggled(&self) -> Self {
        Self {
            liked: !self.liked,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn icon_ref(&self) -> &str {
        &self.icon_ref
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }
}
