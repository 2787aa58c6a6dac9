//! Course profile data types and scraper

mod scraper;

pub use self::scraper::{assessment_records, ExtractionKind, ProfileScraper};

use serde::Serialize;

use crate::extract::Record;

/// One course offering to look up: code plus the offering table columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offering {
    pub course_code: String,
    pub semester: String,
    pub location: String,
    pub mode: String,
}

impl Offering {
    /// Offering at the default location and delivery mode
    pub fn new(course_code: impl Into<String>, semester: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            semester: semester.into(),
            location: "St Lucia".to_string(),
            mode: "Internal".to_string(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

/// One assessment item from the profile's assessment section.
///
/// Fields mirror the labels the pages use; anything the page omits is left
/// empty. Weighting stays textual ("40%"), the pages are not consistent
/// enough to commit to a number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Assessment {
    pub task: String,
    pub due_date: String,
    pub weighting: String,
    pub description: String,
}

impl Assessment {
    /// Map a segmented record onto the fixed assessment schema
    pub fn from_record(record: &Record) -> Self {
        let field = |key: &str| record.get(key).cloned().unwrap_or_default();
        Self {
            task: field("task"),
            due_date: field("due_date"),
            weighting: field("weighting"),
            description: field("description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offering_defaults() {
        let offering = Offering::new("CSSE2310", "Semester 1, 2020");
        assert_eq!(offering.location, "St Lucia");
        assert_eq!(offering.mode, "Internal");

        let external = Offering::new("CSSE2310", "Semester 1, 2020")
            .with_location("Gatton")
            .with_mode("External");
        assert_eq!(external.location, "Gatton");
        assert_eq!(external.mode, "External");
    }

    #[test]
    fn test_assessment_from_partial_record() {
        let mut record = Record::new();
        record.insert("task".to_string(), "Essay".to_string());
        record.insert("weighting".to_string(), "40%".to_string());

        let assessment = Assessment::from_record(&record);
        assert_eq!(assessment.task, "Essay");
        assert_eq!(assessment.weighting, "40%");
        assert_eq!(assessment.due_date, "");
        assert_eq!(assessment.description, "");
    }

    #[test]
    fn test_assessment_serializes_flat() {
        let assessment = Assessment {
            task: "Essay".to_string(),
            due_date: "30 Oct".to_string(),
            weighting: "40%".to_string(),
            description: "Individual essay".to_string(),
        };

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["task"], "Essay");
        assert_eq!(json["weighting"], "40%");
    }
}
