//! Species image enrichment
//!
//! Resolves the picture list for a newly seen species. A manual override
//! entry wins outright and skips the network; otherwise a single remote
//! lookup is made and projected according to the [`PicturePolicy`].
//! Lookup failures never abort the run: they come back as
//! [`Enrichment::Unavailable`] and the species is written without pictures.

use super::species_media_client::{MediaItem, MediaLookupError, SpeciesMediaLookup};
use birdsong_common::config::{OverrideEntry, PicturePolicy};
use birdsong_common::PictureRef;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Media type of still images in GBIF media listings
pub const STILL_IMAGE_TYPE: &str = "StillImage";

/// Curated pictures for species whose remote listing is unsuitable
const CURATED_OVERRIDES: &[(&str, &str, &str)] = &[
    (
        "7626513",
        "https://inaturalist-open-data.s3.amazonaws.com/photos/345397183/original.jpeg",
        "Antonio Rico García",
    ),
    (
        "2493084",
        "https://inaturalist-open-data.s3.amazonaws.com/photos/349694073/original.jpg",
        "Sourav Halder ",
    ),
];

/// Manual picture overrides keyed by species key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOverrides {
    entries: HashMap<String, Vec<PictureRef>>,
}

impl ImageOverrides {
    /// Empty table: every species goes to the remote lookup
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in curated table
    pub fn curated() -> Self {
        CURATED_OVERRIDES
            .iter()
            .map(|(key, src, rights_holder)| {
                (
                    key.to_string(),
                    vec![PictureRef::attributed(*src, *rights_holder)],
                )
            })
            .collect()
    }

    /// Table from the `[image_overrides]` config section
    pub fn from_config(table: BTreeMap<String, OverrideEntry>) -> Self {
        table
            .into_iter()
            .map(|(key, entry)| (key, entry.into_pictures()))
            .collect()
    }

    pub fn insert(&mut self, species_key: impl Into<String>, pictures: Vec<PictureRef>) {
        self.entries.insert(species_key.into(), pictures);
    }

    pub fn get(&self, species_key: &str) -> Option<&[PictureRef]> {
        self.entries.get(species_key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<PictureRef>)> for ImageOverrides {
    fn from_iter<I: IntoIterator<Item = (String, Vec<PictureRef>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Outcome of enriching one species
#[derive(Debug)]
pub enum Enrichment {
    /// Override table entry; no remote call was made
    Override(Vec<PictureRef>),
    /// Remote lookup succeeded (possibly with no pictures)
    Fetched(Vec<PictureRef>),
    /// Remote lookup failed; the species gets no picture list
    Unavailable(MediaLookupError),
}

impl Enrichment {
    /// Whether a remote request was issued
    pub fn used_remote(&self) -> bool {
        !matches!(self, Self::Override(_))
    }

    /// Picture list to store on the species entry
    pub fn into_pictures(self) -> Option<Vec<PictureRef>> {
        match self {
            Self::Override(pictures) | Self::Fetched(pictures) => Some(pictures),
            Self::Unavailable(_) => None,
        }
    }
}

/// Resolves species pictures from overrides or a media lookup
pub struct ImageEnricher<L: SpeciesMediaLookup> {
    lookup: L,
    overrides: ImageOverrides,
    policy: PicturePolicy,
}

impl<L: SpeciesMediaLookup> ImageEnricher<L> {
    pub fn new(lookup: L, overrides: ImageOverrides, policy: PicturePolicy) -> Self {
        Self {
            lookup,
            overrides,
            policy,
        }
    }

    pub fn policy(&self) -> PicturePolicy {
        self.policy
    }

    pub fn overrides(&self) -> &ImageOverrides {
        &self.overrides
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolve pictures for one species
    ///
    /// Makes at most one remote request. Callers invoke this once per species.
    pub async fn enrich(&self, species_key: &str) -> Enrichment {
        if let Some(pictures) = self.overrides.get(species_key) {
            debug!(species_key = %species_key, pictures = pictures.len(), "Using picture override");
            return Enrichment::Override(pictures.to_vec());
        }

        match self.lookup.lookup_media(species_key).await {
            Ok(items) => match project_pictures(items, self.policy) {
                Ok(pictures) => {
                    debug!(
                        species_key = %species_key,
                        pictures = pictures.len(),
                        policy = %self.policy,
                        "Species pictures fetched"
                    );
                    Enrichment::Fetched(pictures)
                }
                Err(e) => {
                    warn!(species_key = %species_key, error = %e, "Species media listing unusable; continuing without pictures");
                    Enrichment::Unavailable(e)
                }
            },
            Err(e) => {
                warn!(species_key = %species_key, error = %e, "Species picture lookup failed; continuing without pictures");
                Enrichment::Unavailable(e)
            }
        }
    }
}

/// Project media results into picture references
///
/// Under [`PicturePolicy::StillImages`] a still image without a rights holder
/// makes the whole listing unusable; other item types are never inspected.
/// [`PicturePolicy::AllMedia`] reads only identifiers.
pub fn project_pictures(
    items: Vec<MediaItem>,
    policy: PicturePolicy,
) -> Result<Vec<PictureRef>, MediaLookupError> {
    match policy {
        PicturePolicy::StillImages => items
            .into_iter()
            .filter(|item| item.media_type.as_deref() == Some(STILL_IMAGE_TYPE))
            .map(|item| match item.rights_holder {
                Some(rights_holder) => Ok(PictureRef::attributed(item.identifier, rights_holder)),
                None => Err(MediaLookupError::Parse(format!(
                    "still image {} has no rightsHolder",
                    item.identifier
                ))),
            })
            .collect(),
        PicturePolicy::AllMedia => Ok(items
            .into_iter()
            .map(|item| PictureRef::bare(item.identifier))
            .collect()),
    }
}
