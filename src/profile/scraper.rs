//! Course profile scraper
//!
//! Resolves the profile URL for one course offering from the offerings
//! table, then pulls record sections out of the profile pages. The table
//! columns and the marker/separator conventions are fixed by the site, so
//! they live here rather than in the extraction primitives.

use url::Url;

use super::{Assessment, Offering};
use crate::dom::Node;
use crate::error::ScrapeError;
use crate::extract::{find_link, segment, Record, RowConstraint, SegmentConfig};
use crate::net;

const BASE_URL: &str = "https://my.uq.edu.au/programs-courses/course.html?course_code=";

// Offerings table layout: semester, location, mode, profile link
const SEMESTER_COLUMN: usize = 0;
const LOCATION_COLUMN: usize = 1;
const MODE_COLUMN: usize = 2;
const PROFILE_LINK_COLUMN: usize = 3;

/// Record types the scraper knows how to extract.
///
/// One variant per supported section; each carries its own section id,
/// container and segmentation convention. Adding a kind means adding a
/// variant, and every match below stops compiling until it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionKind {
    Assessments,
}

impl ExtractionKind {
    /// Profile section holding this record type
    fn section(self) -> &'static str {
        match self {
            ExtractionKind::Assessments => "section_5",
        }
    }

    /// Id of the container element within the section page
    fn container_id(self) -> &'static str {
        match self {
            ExtractionKind::Assessments => "assessmentDetail",
        }
    }

    /// Heading tag the record run starts at
    fn start_tag(self) -> &'static str {
        match self {
            ExtractionKind::Assessments => "h4",
        }
    }

    fn segment_config(self) -> SegmentConfig {
        match self {
            ExtractionKind::Assessments => SegmentConfig::new("strong", "hr"),
        }
    }
}

/// Scraper for one course offering.
///
/// Construction resolves the profile URL up front, so an offering that does
/// not exist fails fast with `NoMatchingRow` before any section is fetched.
pub struct ProfileScraper {
    agent: ureq::Agent,
    profile_url: Url,
}

impl ProfileScraper {
    pub fn new(offering: &Offering) -> Result<Self, ScrapeError> {
        let agent = net::agent();
        let profile_url = resolve_profile_url(&agent, offering)?;
        Ok(Self { agent, profile_url })
    }

    /// Resolved URL of the profile's first section
    pub fn profile_url(&self) -> &Url {
        &self.profile_url
    }

    /// Fetch and extract the records of the given kind
    pub fn scrape(&self, kind: ExtractionKind) -> Result<Vec<Assessment>, ScrapeError> {
        match kind {
            ExtractionKind::Assessments => self.scrape_assessments(),
        }
    }

    /// All assessment items of this offering
    pub fn scrape_assessments(&self) -> Result<Vec<Assessment>, ScrapeError> {
        let kind = ExtractionKind::Assessments;
        let url = section_url(&self.profile_url, kind)?;
        let page = net::fetch_document(&self.agent, url.as_str())?;
        let container = page
            .find_by_id(kind.container_id())
            .ok_or(ScrapeError::MissingSection(kind.container_id()))?;

        let records = assessment_records(container)?;
        Ok(records.iter().map(Assessment::from_record).collect())
    }
}

/// Match the offering against the offerings table and resolve its link
fn resolve_profile_url(agent: &ureq::Agent, offering: &Offering) -> Result<Url, ScrapeError> {
    let course_url = format!("{}{}", BASE_URL, offering.course_code);
    let page = net::fetch_document(agent, &course_url)?;

    let rows = page.find_all("tr");
    let constraints = [
        RowConstraint::new(SEMESTER_COLUMN, offering.semester.as_str()),
        RowConstraint::new(LOCATION_COLUMN, offering.location.as_str()),
        RowConstraint::new(MODE_COLUMN, offering.mode.as_str()),
    ];
    let href = find_link(&rows, &constraints, PROFILE_LINK_COLUMN)?;

    // Profile links are usually absolute; join covers the relative case
    Ok(Url::parse(&course_url)?.join(&href)?)
}

/// Profile URLs point at section_1; other sections swap the suffix
fn section_url(profile_url: &Url, kind: ExtractionKind) -> Result<Url, ScrapeError> {
    let replaced = profile_url.as_str().replace("section_1", kind.section());
    Ok(Url::parse(&replaced)?)
}

/// Segment an assessment container into raw records.
///
/// Line-break elements are noise between a marker and its value, so they
/// are dropped before segmentation. The record run starts at the first
/// section heading; a container without one simply has no assessments.
pub fn assessment_records(container: &Node) -> Result<Vec<Record>, ScrapeError> {
    let kind = ExtractionKind::Assessments;
    let siblings: Vec<&Node> = container
        .children()
        .iter()
        .filter(|node| !node.is_element("br"))
        .collect();

    let Some(start) = siblings.iter().position(|node| node.is_element(kind.start_tag())) else {
        return Ok(Vec::new());
    };

    Ok(segment(&siblings[start..], &kind.segment_config())?)
}
