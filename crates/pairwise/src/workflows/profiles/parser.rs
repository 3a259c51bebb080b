use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ScoreRecord {
    /// 1-based data row, for error messages.
    pub(crate) line: usize,
    pub(crate) person: String,
    pub(crate) dimension: String,
    pub(crate) score: Option<f64>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ScoreRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (position, record) in csv_reader.deserialize::<ScoreRow>().enumerate() {
        let row = record?;
        records.push(ScoreRecord {
            line: position + 1,
            person: collapse_whitespace(&row.person),
            dimension: row.dimension,
            score: row.score.as_deref().and_then(parse_score),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    #[serde(alias = "Person", alias = "name", alias = "Name")]
    person: String,
    #[serde(alias = "Dimension")]
    dimension: String,
    #[serde(
        alias = "Score",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    score: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Unparsable values read as unknown rather than failing the import.
fn parse_score(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|score| score.is_finite())
}

fn collapse_whitespace(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
