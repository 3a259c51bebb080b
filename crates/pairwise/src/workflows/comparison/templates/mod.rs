//! Narrative template library and metadata lookups.
//!
//! Templates are addressed only through their metadata tuple
//! `(section, dimension, relation, direction, variance)`; ids exist for
//! auditing and for tracing which text was chosen.

mod corpus;

use super::domain::{DimensionKey, Direction, Relation, Section, Variance, CONFIDENCE_ANCHOR};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Full metadata tuple. `None` fields are part of the tuple, not wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub section: Section,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<Variance>,
}

impl TemplateKey {
    /// The single catch-all safety template.
    pub const GLOBAL_SAFETY: Self = Self::section(Section::Safety);

    pub const fn section(section: Section) -> Self {
        Self {
            section,
            dimension: None,
            relation: None,
            direction: None,
            variance: None,
        }
    }

    pub const fn dimension(mut self, dimension: DimensionKey) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub const fn relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub const fn maybe_relation(mut self, relation: Option<Relation>) -> Self {
        self.relation = relation;
        self
    }

    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub const fn variance(mut self, variance: Variance) -> Self {
        self.variance = Some(variance);
        self
    }

    /// Standard per-dimension safety template.
    pub const fn dimension_safety(dimension: DimensionKey) -> Self {
        Self::section(Section::Safety)
            .dimension(dimension)
            .relation(Relation::Similar)
    }

    /// Per-dimension fallback when some, but not most, dimensions are missing.
    pub const fn low_confidence_safety(dimension: DimensionKey) -> Self {
        Self::dimension_safety(dimension).variance(Variance::Mixed)
    }

    /// Global very-low-confidence template on the anchor dimension.
    pub const fn very_low_confidence(variance: Variance) -> Self {
        Self::dimension_safety(CONFIDENCE_ANCHOR).variance(variance)
    }
}

/// Conjunctive filter; unset fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub section: Option<Section>,
    pub dimension: Option<DimensionKey>,
    pub relation: Option<Relation>,
    pub direction: Option<Direction>,
    pub variance: Option<Variance>,
}

impl TemplateFilter {
    pub fn section(section: Section) -> Self {
        Self {
            section: Some(section),
            ..Self::default()
        }
    }

    pub fn matches(&self, template: &Template) -> bool {
        let key = &template.key;
        self.section.map_or(true, |section| key.section == section)
            && self.dimension.map_or(true, |dimension| key.dimension == Some(dimension))
            && self.relation.map_or(true, |relation| key.relation == Some(relation))
            && self.direction.map_or(true, |direction| key.direction == Some(direction))
            && self.variance.map_or(true, |variance| key.variance == Some(variance))
    }
}

impl From<TemplateKey> for TemplateFilter {
    fn from(key: TemplateKey) -> Self {
        Self {
            section: Some(key.section),
            dimension: key.dimension,
            relation: key.relation,
            direction: key.direction,
            variance: key.variance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(flatten)]
    pub key: TemplateKey,
    pub text: String,
}

impl Template {
    pub fn new(id: impl Into<String>, key: TemplateKey, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key,
            text: text.into(),
        }
    }
}

/// Corpus problems that make a template set unusable.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("template corpus is empty")]
    Empty,
    #[error("template id {0} appears more than once")]
    DuplicateId(String),
    #[error("templates {ids:?} share the metadata tuple {key:?}")]
    Collision { key: TemplateKey, ids: Vec<String> },
    #[error("failed to read template corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid template corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Authoring issue found by [`TemplateRepository::audit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusIssue {
    DuplicateTuple { key: TemplateKey, ids: Vec<String> },
    EmptySection { section: Section },
    UnknownPlaceholder { id: String, placeholder: String },
}

/// Read-only template table with an exact-tuple index built at construction.
#[derive(Debug)]
pub struct TemplateRepository {
    templates: Vec<Template>,
    index: HashMap<TemplateKey, Vec<usize>>,
}

static STANDARD: OnceLock<Arc<TemplateRepository>> = OnceLock::new();

impl TemplateRepository {
    /// Rejects empty corpora and duplicate ids. Tuple collisions are allowed
    /// here and surfaced by [`audit`](Self::audit) and at resolution time.
    pub fn new(templates: Vec<Template>) -> Result<Self, CorpusError> {
        if templates.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(CorpusError::DuplicateId(template.id.clone()));
            }
        }

        let mut index: HashMap<TemplateKey, Vec<usize>> = HashMap::new();
        for (position, template) in templates.iter().enumerate() {
            index.entry(template.key).or_default().push(position);
        }

        Ok(Self { templates, index })
    }

    /// Loads an external corpus, refusing any tuple collision.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let templates: Vec<Template> = serde_json::from_reader(reader)?;
        let repository = Self::new(templates)?;

        if let Some(CorpusIssue::DuplicateTuple { key, ids }) = repository
            .audit()
            .into_iter()
            .find(|issue| matches!(issue, CorpusIssue::DuplicateTuple { .. }))
        {
            return Err(CorpusError::Collision { key, ids });
        }

        Ok(repository)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// The built-in corpus, shared process-wide.
    pub fn standard() -> Arc<Self> {
        STANDARD
            .get_or_init(|| {
                let repository = Self::new(corpus::standard_templates())
                    .unwrap_or_else(|err| panic!("built-in template corpus is invalid: {err}"));
                Arc::new(repository)
            })
            .clone()
    }

    pub fn find_by_metadata(&self, filter: &TemplateFilter) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|template| filter.matches(template))
            .collect()
    }

    /// Templates whose full tuple equals `key`, in corpus order.
    pub fn exact(&self, key: &TemplateKey) -> Vec<&Template> {
        self.index
            .get(key)
            .map(|positions| {
                positions
                    .iter()
                    .map(|position| &self.templates[*position])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn first_in_section(&self, section: Section) -> Option<&Template> {
        self.templates
            .iter()
            .find(|template| template.key.section == section)
    }

    /// First template in corpus order; construction guarantees one exists.
    pub fn first(&self) -> &Template {
        &self.templates[0]
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Consistency checks for authoring defects that never block construction.
    pub fn audit(&self) -> Vec<CorpusIssue> {
        let mut issues = Vec::new();

        let mut collisions: Vec<(&TemplateKey, &Vec<usize>)> = self
            .index
            .iter()
            .filter(|(_, positions)| positions.len() > 1)
            .collect();
        collisions.sort_by_key(|(_, positions)| positions[0]);
        for (key, positions) in collisions {
            issues.push(CorpusIssue::DuplicateTuple {
                key: *key,
                ids: positions
                    .iter()
                    .map(|position| self.templates[*position].id.clone())
                    .collect(),
            });
        }

        for section in Section::ORDERED {
            if self.first_in_section(section).is_none() {
                issues.push(CorpusIssue::EmptySection { section });
            }
        }

        for template in &self.templates {
            for placeholder in placeholders(&template.text) {
                if placeholder != "{a}" && placeholder != "{b}" {
                    issues.push(CorpusIssue::UnknownPlaceholder {
                        id: template.id.clone(),
                        placeholder: placeholder.to_string(),
                    });
                }
            }
        }

        issues
    }
}

fn placeholders(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find('{') {
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                found.push(&tail[..=end]);
                rest = &tail[end + 1..];
            }
            None => {
                found.push(tail);
                break;
            }
        }
    }
    found
}
