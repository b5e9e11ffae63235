//! In-memory pet collection and species filtering.
//!
//! [`PetStore`] owns the canonical, ordered list of pets.  Readers get
//! owned snapshots from [`PetStore::list`]; the only mutator is
//! [`PetStore::toggle_liked`], which replaces one entry in place.  Because
//! every mutator takes `&mut self`, a reader can never observe a
//! half-applied toggle.

use core::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pet::{Pet, Species};

// ---------------------------------------------------------------------------
// Species filter
// ---------------------------------------------------------------------------

/// A set of species, stored as a bitmask (one bit per [`Species`]).
///
/// An empty filter is valid and matches nothing; there is no implicit
/// "all" fallback.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Species>", into = "Vec<Species>")]
pub struct SpeciesFilter(u8);

impl SpeciesFilter {
    const ALL_BITS: u8 = Species::Cat.mask() | Species::Dog.mask() | Species::Chameleon.mask();

    pub const fn all() -> Self {
        Self(Self::ALL_BITS)
    }

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn only(species: Species) -> Self {
        Self(species.mask())
    }

    pub const fn contains(self, species: Species) -> bool {
        self.0 & species.mask() != 0
    }

    pub fn insert(&mut self, species: Species) {
        self.0 |= species.mask();
    }

    pub fn remove(&mut self, species: Species) {
        self.0 &= !species.mask();
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Home-screen chip behaviour: tapping a selected chip deselects it,
    /// unless it is the last one selected; tapping an unselected chip
    /// selects it.  Returns the membership of `species` afterwards.
    pub fn toggle(&mut self, species: Species) -> bool {
        if self.contains(species) && self.len() > 1 {
            self.remove(species);
            false
        } else {
            self.insert(species);
            true
        }
    }

    /// Selected species in display order.
    pub fn iter(self) -> impl Iterator<Item = Species> {
        Species::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl Default for SpeciesFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for SpeciesFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Species> for SpeciesFilter {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        let mut filter = Self::empty();
        for species in iter {
            filter.insert(species);
        }
        filter
    }
}

impl From<Vec<Species>> for SpeciesFilter {
    fn from(species: Vec<Species>) -> Self {
        species.into_iter().collect()
    }
}

impl From<SpeciesFilter> for Vec<Species> {
    fn from(filter: SpeciesFilter) -> Self {
        filter.iter().collect()
    }
}

// ---------------------------------------------------------------------------
// PetStore
// ---------------------------------------------------------------------------

/// Owner of the authoritative pet list.
#[derive(Debug, Clone, Default)]
pub struct PetStore {
    pets: Vec<Pet>,
}

impl PetStore {
    /// Initialise the store with the seed list.  Order is display order.
    pub fn new(pets: Vec<Pet>) -> Self {
        debug!("PetStore: initialised with {} pets", pets.len());
        Self { pets }
    }

    /// Pets whose species is in `filter`, in collection order.
    pub fn list(&self, filter: SpeciesFilter) -> Vec<Pet> {
        self.pets
            .iter()
            .filter(|p| filter.contains(p.species()))
            .cloned()
            .collect()
    }

    /// Every pet, equivalent to `list(SpeciesFilter::all())`.
    pub fn list_all(&self) -> Vec<Pet> {
        self.list(SpeciesFilter::all())
    }

    /// Liked pets in collection order.
    pub fn liked(&self) -> Vec<Pet> {
        self.pets.iter().filter(|p| p.is_liked()).cloned().collect()
    }

    /// Invert the `liked` flag of the first entry structurally equal to
    /// `pet`, keeping its position.  Returns the replacement value.
    ///
    /// A pet with no equal entry (typically a stale snapshot whose `liked`
    /// flag no longer matches) yields [`Error::NotFound`] and leaves the
    /// collection untouched.
    pub fn toggle_liked(&mut self, pet: &Pet) -> Result<Pet> {
        let Some(index) = self.pets.iter().position(|p| p == pet) else {
            warn!("PetStore: toggle_liked on unknown pet '{}'", pet.name());
            return Err(Error::NotFound(pet.name().to_owned()));
        };

        let toggled = self.pets[index].with_liked_toggled();
        self.pets[index] = toggled.clone();
        debug!(
            "PetStore: '{}' liked={} (index {})",
            toggled.name(),
            toggled.is_liked(),
            index
        );
        Ok(toggled)
    }

    pub fn get(&self, index: usize) -> Option<&Pet> {
        self.pets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pet> {
        self.pets.iter()
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}
