use pagelist::items::{Items, ItemsError, SortInfo};

fn numbers(page_size: usize) -> Items<i32> {
    Items::with_page_size(|x: &i32| x.to_string(), page_size).unwrap()
}

#[test]
fn test_new_items_are_empty() {
    let items = Items::new(|x: &i32| x.to_string());
    assert!(items.is_empty());
    assert!(items.working().is_empty());
    assert!(items.page().is_empty());
    assert_eq!(items.page_info().pages(), 1);
    assert!(items.sort_info().is_none());
}

#[test]
fn test_add_all_empty_has_empty_page() {
    let items = numbers(10).add_all(Vec::new());
    assert!(items.page().is_empty());
    assert!(items.page_info().range().is_empty());
}

#[test]
fn test_paging_scenario() {
    let items = numbers(2).add_all([1, 2, 3, 4, 5]);
    assert_eq!(items.page_info().pages(), 3);
    assert_eq!(items.page(), vec![&1, &2]);

    let items = items.goto_next_page();
    assert_eq!(items.page(), vec![&3, &4]);

    let items = items.goto_last_page();
    assert_eq!(items.page(), vec![&5]);

    let items = items.goto_page(99);
    assert_eq!(items.page_info().page(), 2);
    assert_eq!(items.goto_first_page().page(), vec![&1, &2]);
    assert_eq!(items.goto_previous_page().page(), vec![&3, &4]);
}

#[test]
fn test_filter_keeps_all_and_selection() {
    let items = numbers(2)
        .add_all([1, 2, 3, 4, 5])
        .goto_next_page()
        .select_all()
        .add_filter("even", |x: &i32| x % 2 == 0);

    assert_eq!(items.working(), vec![&2, &4]);
    assert_eq!(items.all(), &[1, 2, 3, 4, 5]);
    assert_eq!(items.selected_count(), 5);
    for id in ["1", "2", "3", "4", "5"] {
        assert!(items.selected().contains(id));
    }
    assert_eq!(items.selection(), vec![&1, &2, &3, &4, &5]);

    // total shrank to 2, the second page no longer exists
    assert_eq!(items.page_info().total(), 2);
    assert_eq!(items.page_info().page(), 0);
    assert_eq!(items.page(), vec![&2, &4]);
}

#[test]
fn test_sort_with() {
    let items = numbers(3).add_all([3, 1, 5, 2, 4]);
    let by_value = SortInfo::new("value", "Value", |a: &i32, b: &i32| a.cmp(b));

    let ascending = items.sort_with(by_value.clone());
    assert_eq!(ascending.working(), vec![&1, &2, &3, &4, &5]);
    assert_eq!(ascending.page(), vec![&1, &2, &3]);
    assert_eq!(ascending.page_info().total(), 5);
    assert_eq!(ascending.all(), &[3, 1, 5, 2, 4]);

    let descending = ascending.sort_with(by_value.toggle());
    assert_eq!(descending.working(), vec![&5, &4, &3, &2, &1]);
    assert_eq!(descending.page_info().total(), 5);
    assert_eq!(descending.sort_info(), Some(&by_value.toggle()));
}

#[test]
fn test_sort_is_stable() {
    let items = Items::new(|pair: &(i32, char)| pair.1.to_string())
        .add_all([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')])
        .sort_with(SortInfo::by_key("number", "Number", |pair: &(i32, char)| pair.0));

    let order: Vec<char> = items.working().iter().map(|pair| pair.1).collect();
    assert_eq!(order, vec!['b', 'd', 'a', 'c']);
}

#[test]
fn test_filter_and_sort_order_independent() {
    let by_value = SortInfo::new("value", "Value", |a: &i32, b: &i32| a.cmp(b)).toggle();

    let sorted_first = numbers(10)
        .add_all([7, 2, 9, 4, 1])
        .sort_with(by_value.clone())
        .add_filter("odd", |x: &i32| x % 2 != 0);
    let filtered_first = numbers(10)
        .add_filter("odd", |x: &i32| x % 2 != 0)
        .add_all([7, 2, 9, 4, 1])
        .sort_with(by_value);

    assert_eq!(sorted_first.working(), vec![&9, &7, &1]);
    assert_eq!(sorted_first.working(), filtered_first.working());
}

#[test]
fn test_add_all_applies_current_filters_and_sort() {
    let items = numbers(10)
        .add_filter("big", |x: &i32| *x > 2)
        .sort_with(SortInfo::new("value", "Value", |a: &i32, b: &i32| a.cmp(b)).toggle())
        .add_all([1, 5, 3, 2, 4]);

    assert_eq!(items.working(), vec![&5, &4, &3]);
    assert_eq!(items.page_info().total(), 3);
}

#[test]
fn test_add_all_reclamps_page() {
    let items = numbers(2).add_all(1..=10).goto_last_page();
    assert_eq!(items.page_info().page(), 4);

    let items = items.add_all(1..=3);
    assert_eq!(items.page_info().page(), 1);
    assert_eq!(items.page(), vec![&3]);
}

#[test]
fn test_page_size_change() {
    let items = numbers(2).add_all(1..=10).goto_page(3);
    assert_eq!(items.page(), vec![&7, &8]);

    let items = items.page_size(5).unwrap();
    assert_eq!(items.page_info().pages(), 2);
    assert_eq!(items.page(), vec![&6, &7, &8, &9, &10]);

    assert!(matches!(items.page_size(0), Err(ItemsError::InvalidArgument(_))));
    assert!(Items::with_page_size(|x: &i32| x.to_string(), 0).is_err());
}

#[test]
fn test_transitions_leave_original_untouched() {
    let original = numbers(2).add_all([1, 2, 3]);
    let _filtered = original.add_filter("none", |_: &i32| false);
    let _paged = original.goto_next_page();
    let _selected = original.select_all();

    assert_eq!(original.working().len(), 3);
    assert_eq!(original.page_info().page(), 0);
    assert_eq!(original.selected_count(), 0);
    assert!(!original.has_filter("none"));
}

#[test]
fn test_filter_excluding_everything() {
    let items = numbers(2).add_all([1, 2, 3]).add_filter("none", |_: &i32| false);
    assert!(items.working().is_empty());
    assert!(items.page().is_empty());
    assert_eq!(items.page_info().pages(), 1);
    assert_eq!(items.len(), 3);
}

#[test]
fn test_huge_page_size_shows_everything() {
    let items = numbers(usize::MAX).add_all([1, 2, 3]);
    assert_eq!(items.page(), vec![&1, &2, &3]);
    assert_eq!(items.select_page().selected_count(), 3);
    assert_eq!(items.goto_next_page().page(), vec![&1, &2, &3]);
}
