//! Listing catalog loaded from a `listings.json` file.

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use super::{CatalogIntegrityError, CatalogSnapshot, check_integrity};
use crate::{Listing, ListingCatalog, ListingId, LocationId};

/// Error raised when reading or validating a JSON catalog.
#[derive(Debug, Error)]
pub enum JsonCatalogError {
    /// Opening the catalog file failed.
    #[error("failed to open listing catalog at {path}: {source}")]
    Open {
        /// Location of the catalog on disk.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The payload was not a JSON array of listing records.
    #[error("failed to decode listing catalog: {source}")]
    Decode {
        /// Decoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record lacked a required field.
    #[error("listing record {index} is missing `{field}`")]
    MissingField {
        /// Position of the record in the array.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },
    /// The decoded listings violate catalog invariants.
    #[error(transparent)]
    Integrity(#[from] CatalogIntegrityError),
}

/// Identifiers appear as strings in some exports and as integers in others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawListing {
    id: Option<RawId>,
    location_id: Option<RawId>,
    length: Option<u32>,
    width: Option<u32>,
    price_in_cents: Option<u64>,
}

impl RawListing {
    fn into_listing(self, index: usize) -> Result<Listing, JsonCatalogError> {
        let missing = |field| JsonCatalogError::MissingField { index, field };
        Ok(Listing {
            id: ListingId::new(self.id.ok_or_else(|| missing("id"))?.into_string()),
            location_id: LocationId::new(
                self.location_id
                    .ok_or_else(|| missing("location_id"))?
                    .into_string(),
            ),
            length: self.length.ok_or_else(|| missing("length"))?,
            width: self.width.ok_or_else(|| missing("width"))?,
            price_in_cents: self
                .price_in_cents
                .ok_or_else(|| missing("price_in_cents"))?,
        })
    }
}

/// Read-only catalog decoded once from JSON and held as a snapshot.
///
/// The file holds an array of records shaped like
/// `{"id": "…", "location_id": "…", "length": 20, "width": 10,
/// "price_in_cents": 500}`. Every record is checked when the catalog loads,
/// so a malformed export fails fast instead of silently losing listings.
///
/// # Examples
/// ```
/// use stowage_core::{JsonListingCatalog, ListingCatalog};
///
/// let json = r#"[{"id": "a", "location_id": 7, "length": 20, "width": 10, "price_in_cents": 500}]"#;
/// let catalog = JsonListingCatalog::from_reader(json.as_bytes())?;
/// let listing = catalog.listings().next().expect("one listing");
/// assert_eq!(listing.location_id.as_str(), "7");
/// # Ok::<(), stowage_core::JsonCatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonListingCatalog {
    snapshot: CatalogSnapshot,
}

impl JsonListingCatalog {
    /// Load and validate the catalog stored at `path`.
    pub fn open(path: &Utf8Path) -> Result<Self, JsonCatalogError> {
        let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            JsonCatalogError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} listings from {path}", catalog.snapshot.len());
        Ok(catalog)
    }

    /// Decode and validate a catalog from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, JsonCatalogError> {
        let records: Vec<RawListing> = serde_json::from_reader(reader)
            .map_err(|source| JsonCatalogError::Decode { source })?;
        let listings = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_listing(index))
            .collect::<Result<Vec<_>, _>>()?;
        check_integrity(&listings)?;
        Ok(Self {
            snapshot: CatalogSnapshot::new(listings),
        })
    }
}

impl ListingCatalog for JsonListingCatalog {
    fn listings(&self) -> Box<dyn Iterator<Item = Listing> + Send + '_> {
        self.snapshot.listings()
    }

    fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.clone()
    }
}
