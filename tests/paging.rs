use fleet_table::model::Asset;
use fleet_table::view::{PageSize, page_slice};

fn rows(n: i64) -> Vec<Asset> {
    (1..=n)
        .map(|id| Asset {
            id,
            name: format!("Asset {id}"),
            ..Asset::default()
        })
        .collect()
}

// ============================================================================
// Page slicing
// ============================================================================

#[test]
fn test_pages_partition_the_input() {
    let rows = rows(53);
    for size in PageSize::ALL {
        let per_page = size.rows();
        let pages = rows.len().div_ceil(per_page);

        let mut rebuilt = Vec::new();
        for page in 0..pages {
            rebuilt.extend(page_slice(&rows, page, size).rows);
        }
        assert_eq!(rebuilt, rows);
    }
}

#[test]
fn test_last_page_reports_placeholder_rows() {
    let rows = rows(53);
    let view = page_slice(&rows, 2, PageSize::Twenty);
    assert_eq!(view.rows.len(), 13);
    assert_eq!(view.empty_rows, 7);
}

#[test]
fn test_full_page_needs_no_placeholders() {
    let rows = rows(40);
    let view = page_slice(&rows, 1, PageSize::Twenty);
    assert_eq!(view.rows.len(), 20);
    assert_eq!(view.empty_rows, 0);
}

#[test]
fn test_out_of_range_page_clips_to_empty() {
    let rows = rows(5);
    let view = page_slice(&rows, 9, PageSize::Ten);
    assert!(view.rows.is_empty());
    assert_eq!(view.empty_rows, 10);
}

#[test]
fn test_empty_input_yields_empty_page() {
    let view = page_slice(&[], 0, PageSize::TwentyFive);
    assert!(view.rows.is_empty());
    assert_eq!(view.empty_rows, 25);
}

// ============================================================================
// Page sizes
// ============================================================================

#[test]
fn test_page_size_choices() {
    let sizes: Vec<usize> = PageSize::ALL.iter().map(|s| s.rows()).collect();
    assert_eq!(sizes, vec![10, 20, 25]);
    assert_eq!(PageSize::default(), PageSize::Twenty);
}
