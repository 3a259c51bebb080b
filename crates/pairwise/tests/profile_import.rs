use std::io::Cursor;

use pairwise::workflows::comparison::{DimensionKey, NarrativeAggregator, Relation};
use pairwise::workflows::profiles::{ProfileImportError, ProfileImporter};

const SHEET: &str = "person,dimension,score\n\
Ana,Conflict Engagement,0.5\n\
Ana,Emotional Expression,2.0\n\
Ana,Reassurance Need,3.0\n\
Ana,Repair Pace,\n\
Ben,engagement,3.5\n\
Ben,expression,2.1\n\
Ben,reassurance,1.0\n\
Ben,repair,2.0\n";

#[test]
fn imported_sheet_feeds_the_aggregator() {
    let imported = ProfileImporter::from_reader(Cursor::new(SHEET)).expect("sheet imports");
    let (state, bundle) = NarrativeAggregator::standard().compare(&imported.a, &imported.b);

    assert_eq!(bundle.a_name(), "Ana");
    assert_eq!(bundle.b_name(), "Ben");
    assert_eq!(state.valid_count(), 3);
    assert_eq!(
        state.dimension(DimensionKey::Engagement).relation,
        Relation::VeryDifferent
    );
    assert_eq!(
        state.dimension(DimensionKey::Reassurance).relation,
        Relation::VeryDifferent
    );
    assert_eq!(state.dominant_dimension(), DimensionKey::Engagement);
    assert!(!state.dimension(DimensionKey::Repair).valid);
}

#[test]
fn header_only_sheet_is_missing_both_people() {
    let error = ProfileImporter::from_reader(Cursor::new("person,dimension,score\n"))
        .expect_err("no rows");

    assert!(matches!(error, ProfileImportError::MissingPerson { found: 0 }));
    assert_eq!(error.to_string(), "score sheet names 0 of the two people required");
}
