use fleet_table::model::{Asset, Column};
use fleet_table::query::{Direction, SortState, search, stable_sort};

fn asset(id: i64, name: &str, mileage: Option<f64>) -> Asset {
    Asset {
        id,
        name: name.to_string(),
        code: format!("C-{id:02}"),
        mileage,
        ..Asset::default()
    }
}

fn fleet() -> Vec<Asset> {
    vec![
        asset(1, "Bulldozer", Some(1200.0)),
        asset(2, "Crane", None),
        asset(3, "Excavator", Some(50.0)),
        asset(4, "Bulldozer", Some(50.0)),
    ]
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_empty_query_is_identity() {
    let rows = fleet();
    assert_eq!(search(&rows, ""), rows);
}

#[test]
fn test_search_result_is_subset_in_order() {
    let rows = fleet();
    let hits = search(&rows, "bulldozer");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, 1);
    assert_eq!(hits[1].id, 4);
}

#[test]
fn test_search_is_case_insensitive() {
    let rows = fleet();
    assert_eq!(search(&rows, "CRANE"), search(&rows, "crane"));
    assert_eq!(search(&rows, "CRANE").len(), 1);
}

#[test]
fn test_search_covers_every_declared_field() {
    let rows = fleet();
    // Matches the code field, not the name
    let hits = search(&rows, "c-03");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 3);
    // Matches a numeric field's serialization
    assert_eq!(search(&rows, "1200").len(), 1);
}

#[test]
fn test_search_no_match_is_empty() {
    assert!(search(&fleet(), "forklift").is_empty());
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_sort_is_idempotent() {
    let once = stable_sort(&fleet(), Column::Name, Direction::Ascending);
    let twice = stable_sort(&once, Column::Name, Direction::Ascending);
    assert_eq!(once, twice);
}

#[test]
fn test_sort_descending_reverses_ascending_without_ties() {
    let rows = fleet();
    let asc = stable_sort(&rows, Column::Id, Direction::Ascending);
    let mut desc = stable_sort(&rows, Column::Id, Direction::Descending);
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let rows = fleet();

    // ids 3 and 4 tie on mileage=50; input order is 3 before 4
    let asc = stable_sort(&rows, Column::Mileage, Direction::Ascending);
    let ids: Vec<i64> = asc.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 1]);

    // same relative order for the tied pair when descending
    let desc = stable_sort(&rows, Column::Mileage, Direction::Descending);
    let ids: Vec<i64> = desc.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 2]);
}

#[test]
fn test_sort_null_is_least() {
    let asc = stable_sort(&fleet(), Column::Mileage, Direction::Ascending);
    assert_eq!(asc[0].id, 2);
    assert_eq!(asc[0].mileage, None);
}

#[test]
fn test_sort_does_not_lose_rows() {
    let rows = fleet();
    let sorted = stable_sort(&rows, Column::Code, Direction::Descending);
    assert_eq!(sorted.len(), rows.len());
    for row in &rows {
        assert!(sorted.contains(row));
    }
}

// ============================================================================
// Sort state toggling
// ============================================================================

#[test]
fn test_sort_request_toggles_only_on_repeated_ascending_column() {
    let mut sort = SortState::default();
    assert_eq!(sort.column, Column::Id);
    assert_eq!(sort.direction, Direction::Ascending);

    // Re-requesting the current ascending column flips to descending
    sort.request(Column::Id);
    assert_eq!(sort.direction, Direction::Descending);

    // Re-requesting while descending goes back to ascending
    sort.request(Column::Id);
    assert_eq!(sort.direction, Direction::Ascending);

    // A different column always starts ascending
    sort.request(Column::Id);
    sort.request(Column::Mileage);
    assert_eq!(sort.column, Column::Mileage);
    assert_eq!(sort.direction, Direction::Ascending);
}
