//! Property tests for the controller's algebraic guarantees.

#![forbid(unsafe_code)]

use proptest::prelude::*;
use tabula::{
    FieldValue, FilterValue, ListView, Selection, ViewConfig, ViewRecord,
    paginate::{slice_bounds, total_pages},
};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    name: String,
    status: String,
}

impl ViewRecord for Row {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn config() -> ViewConfig<Row> {
    ViewConfig::<Row>::builder()
        .field("name", |r| FieldValue::text(&r.name))
        .field("status", |r| FieldValue::status(&r.status))
        .searchable(&["name"])
        .sortable(&["name", "status"])
        .choice_filter("status", "status")
        .status_rank("applied", 0)
        .status_rank("hired", 1)
        .build()
        .expect("valid config")
}

prop_compose! {
    fn arb_row()(id in 1u32..500, name in "[a-d]{1,6}", hired in any::<bool>()) -> Row {
        Row {
            id,
            name,
            status: if hired { "hired".into() } else { "applied".into() },
        }
    }
}

fn arb_store() -> impl Strategy<Value = Vec<Row>> {
    // Unique ids: selection and tie-breaking assume stable identifiers.
    prop::collection::vec(arb_row(), 0..60).prop_map(|mut rows| {
        rows.sort_by_key(|r| r.id);
        rows.dedup_by_key(|r| r.id);
        rows
    })
}

proptest! {
    #[test]
    fn test_pagination_invariants(
        count in 0usize..10_000,
        page_size in 1usize..100,
        page in 0usize..2000
    ) {
        let pages = total_pages(count, page_size);
        prop_assert!(pages >= 1);

        let (start, end) = slice_bounds(count, page, page_size);
        prop_assert!(start <= end);
        prop_assert!(end <= count);
        prop_assert!(end - start <= page_size);
    }

    #[test]
    fn test_pages_concatenate_to_sorted_sequence(
        store in arb_store(),
        page_size in 1usize..7
    ) {
        let mut view = ListView::new(config(), store);
        view.set_sort("name").unwrap();
        view.set_page_size(page_size).unwrap();

        let derived = view.derive_view();
        let mut seen = Vec::new();
        for page in 1..=derived.total_pages {
            view.set_page(page);
            seen.extend(view.derive_view().visible_page);
        }
        // No duplicates, no omissions.
        prop_assert_eq!(seen, derived.sorted);
    }

    #[test]
    fn test_derive_is_idempotent(store in arb_store(), term in "[a-d]{0,3}") {
        let mut view = ListView::new(config(), store);
        view.set_filter("search", FilterValue::Search(term)).unwrap();
        view.set_sort("status").unwrap();
        prop_assert_eq!(view.derive_view(), view.derive_view());
    }

    #[test]
    fn test_filter_conjunction(store in arb_store(), term in "[a-d]{1,3}") {
        let mut both = ListView::new(config(), store.clone());
        both.set_filter("search", FilterValue::Search(term.clone())).unwrap();
        both.set_filter("status", FilterValue::Choice("hired".into())).unwrap();

        let mut search_only = ListView::new(config(), store.clone());
        search_only.set_filter("search", FilterValue::Search(term)).unwrap();

        let mut status_only = ListView::new(config(), store);
        status_only.set_filter("status", FilterValue::Choice("hired".into())).unwrap();

        let search_ids: Vec<u32> = search_only.derive_view().filtered.iter().map(|r| r.id).collect();
        let status_ids: Vec<u32> = status_only.derive_view().filtered.iter().map(|r| r.id).collect();
        let both_ids: Vec<u32> = both.derive_view().filtered.iter().map(|r| r.id).collect();

        let expected: Vec<u32> = search_ids
            .iter()
            .copied()
            .filter(|id| status_ids.contains(id))
            .collect();
        prop_assert_eq!(both_ids, expected);
    }

    #[test]
    fn test_sort_is_stable_under_input_order(store in arb_store(), seed in any::<u64>()) {
        // Shuffle deterministically: order of input must not affect output.
        let mut shuffled = store.clone();
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            #[allow(clippy::cast_possible_truncation)]
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        let mut a = ListView::new(config(), store);
        let mut b = ListView::new(config(), shuffled);
        a.set_sort("status").unwrap();
        b.set_sort("status").unwrap();
        prop_assert_eq!(a.derive_view().sorted, b.derive_view().sorted);
    }

    #[test]
    fn test_toggle_all_is_involutive(
        // Ids selected on other pages are disjoint from the visible page.
        other_pages in prop::collection::hash_set(200u32..400, 0..40),
        page in prop::collection::vec(1u32..200, 1..10)
    ) {
        let mut selection: Selection<u32> = Selection::new();
        for id in &other_pages {
            selection.toggle(*id);
        }
        let before = selection.snapshot();

        selection.toggle_all(&page);
        selection.toggle_all(&page);
        prop_assert_eq!(selection.snapshot(), before);
    }

    #[test]
    fn test_selection_prunes_on_removal(store in arb_store(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!store.is_empty());
        let victim = store[pick.index(store.len())].id;

        let mut view = ListView::new(config(), store.clone());
        view.toggle_select(victim);
        prop_assert!(view.is_selected(&victim));

        view.set_records(store.into_iter().filter(|r| r.id != victim).collect());
        prop_assert!(!view.is_selected(&victim));
    }
}
