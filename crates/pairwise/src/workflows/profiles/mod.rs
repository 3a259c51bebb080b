//! CSV import of score sheets into the two sides of a comparison.
//!
//! Each row is `person,dimension,score`. The first person named becomes side A
//! and the second side B; blank or unparsable scores are carried as unknown.

mod parser;

use crate::workflows::comparison::{DimensionKey, PersonProfile, Score, ScoreMap};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ProfileImportError {
    #[error("failed to read score sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid score sheet CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {line}: unknown dimension '{dimension}'")]
    UnknownDimension { line: usize, dimension: String },
    #[error("row {line}: person name is blank")]
    BlankPerson { line: usize },
    #[error("row {line}: '{person}' would be a third person; a sheet compares exactly two")]
    TooManyPeople { line: usize, person: String },
    #[error("score sheet names {found} of the two people required")]
    MissingPerson { found: usize },
    #[error("row {line}: {} for '{person}' was already given", .dimension.label())]
    DuplicateScore {
        line: usize,
        person: String,
        dimension: DimensionKey,
    },
}

/// Both sides of a comparison, in the order they appear in the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedProfiles {
    pub a: PersonProfile,
    pub b: PersonProfile,
}

pub struct ProfileImporter;

impl ProfileImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImportedProfiles, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ImportedProfiles, ProfileImportError> {
        let mut people: Vec<PersonProfile> = Vec::with_capacity(2);

        for record in parser::parse_records(reader)? {
            if record.person.is_empty() {
                return Err(ProfileImportError::BlankPerson { line: record.line });
            }

            let dimension = DimensionKey::parse(&record.dimension).ok_or_else(|| {
                ProfileImportError::UnknownDimension {
                    line: record.line,
                    dimension: record.dimension.clone(),
                }
            })?;

            let slot = match people.iter().position(|person| person.name == record.person) {
                Some(slot) => slot,
                None if people.len() < 2 => {
                    people.push(PersonProfile::new(record.person.clone(), ScoreMap::new()));
                    people.len() - 1
                }
                None => {
                    return Err(ProfileImportError::TooManyPeople {
                        line: record.line,
                        person: record.person,
                    })
                }
            };

            let profile = &mut people[slot];
            if profile.scores.contains(dimension) {
                return Err(ProfileImportError::DuplicateScore {
                    line: record.line,
                    person: record.person,
                    dimension,
                });
            }
            profile.scores.insert(dimension, Score::from(record.score));
        }

        let found = people.len();
        let mut people = people.into_iter();
        match (people.next(), people.next()) {
            (Some(a), Some(b)) => {
                debug!(a = %a.name, b = %b.name, "score sheet imported");
                Ok(ImportedProfiles { a, b })
            }
            _ => Err(ProfileImportError::MissingPerson { found }),
        }
    }
}
