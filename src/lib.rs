//! Course profile scraping for UQ course offerings
//!
//! Extracts structured records from the semi-structured HTML of course
//! profile pages:
//! - offering lookup: match semester/location/mode columns in the
//!   offerings table and follow the profile link
//! - assessment details: segment a flat strong/hr sibling stream into
//!   key/value records
//!
//! The extraction primitives in [`extract`] are document-agnostic and work
//! on the owned tree from [`dom`]; everything site-specific lives in
//! [`profile`].

pub mod dom;
pub mod error;
pub mod extract;
pub mod net;
pub mod profile;

pub use error::{ExtractError, ScrapeError};
pub use extract::{find_link, segment, Record, RowConstraint, SegmentConfig};
pub use profile::{Assessment, ExtractionKind, Offering, ProfileScraper};
