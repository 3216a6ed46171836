use copilot_core::record::{seed_accounts, CustomerRecord};
use copilot_core::view::{FilterState, SortKey};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn sorted_names(records: &[CustomerRecord], key: SortKey) -> Vec<String> {
    let filters = FilterState {
        sort_key: key,
        ..FilterState::default()
    };
    filters
        .apply(records)
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// The default sort key is status priority.
#[test]
fn default_sort_key_is_status() {
    assert_eq!(FilterState::default().sort_key, SortKey::Status);
}

/// Status sort is descending by the fixed priority map
/// {at-risk:4, needs-engagement:3, opportunity:2, healthy:1}, with seed
/// order breaking ties.
#[test]
fn status_sort_orders_by_priority_descending() {
    let records = seed_accounts();
    assert_eq!(
        sorted_names(&records, SortKey::Status),
        vec![
            "Global Dynamics",    // at-risk
            "TechFlow Solutions", // needs-engagement
            "InnovateLab",        // opportunity, seed order
            "Enterprise Plus",    // opportunity
            "Acme Corp",          // healthy, seed order
            "StartupVenture",     // healthy
        ]
    );
}

/// Name sort is plain lexicographic ascending.
#[test]
fn name_sort_is_lexicographic_ascending() {
    let records = seed_accounts();
    assert_eq!(
        sorted_names(&records, SortKey::Name),
        vec![
            "Acme Corp",
            "Enterprise Plus",
            "Global Dynamics",
            "InnovateLab",
            "StartupVenture",
            "TechFlow Solutions",
        ]
    );
}

/// With seed usages 85/34/12/96/67/88, sort-by-usage descending yields
/// 96, 88, 85, 67, 34, 12.
#[test]
fn usage_sort_is_descending() {
    let records = seed_accounts();
    let filters = FilterState {
        sort_key: SortKey::Usage,
        ..FilterState::default()
    };
    let usages: Vec<u8> = filters
        .apply(&records)
        .iter()
        .map(|r| r.usage.current)
        .collect();
    assert_eq!(usages, vec![96, 88, 85, 67, 34, 12]);
}

/// Revenue sort strips `$`, `,`, `/mo` and orders descending by value.
#[test]
fn revenue_sort_is_descending_by_parsed_value() {
    let records = seed_accounts();
    assert_eq!(
        sorted_names(&records, SortKey::Revenue),
        vec![
            "Enterprise Plus",    // 45,200
            "Acme Corp",          // 24,500
            "InnovateLab",        // 18,600
            "TechFlow Solutions", // 12,200
            "Global Dynamics",    //  8,900
            "StartupVenture",     //  5,400
        ]
    );
}

/// Sorting is stable: equal usage values keep seed order.
#[test]
fn usage_sort_is_stable_for_ties() {
    let mut records = seed_accounts();
    // TechFlow (seed index 1) now ties StartupVenture (seed index 4).
    records[1].usage.current = 67;

    let order = sorted_names(&records, SortKey::Usage);
    let techflow = order.iter().position(|n| n == "TechFlow Solutions").unwrap();
    let startup = order.iter().position(|n| n == "StartupVenture").unwrap();
    assert!(
        techflow < startup,
        "stable sort must keep seed order for ties: {order:?}"
    );
}

/// An unparseable revenue string sorts after every real value under the
/// descending comparator.
#[test]
fn unparseable_revenue_sorts_last() {
    let mut records = seed_accounts();
    records[0].revenue = "TBD".into(); // Acme Corp

    let order = sorted_names(&records, SortKey::Revenue);
    assert_eq!(
        order.last().map(String::as_str),
        Some("Acme Corp"),
        "NaN revenue must land at the end: {order:?}"
    );
}

/// Sorting applies to the filtered view, not the full set.
#[test]
fn sort_applies_after_filtering() {
    let records = seed_accounts();
    let mut filters = FilterState {
        sort_key: SortKey::Usage,
        ..FilterState::default()
    };
    filters.toggle_business_unit("Risk BU");

    let names: Vec<String> = filters
        .apply(&records)
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(names, vec!["TechFlow Solutions", "Global Dynamics"]);
}
