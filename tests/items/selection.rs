use pagelist::items::Items;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: &'static str,
}

fn users() -> Items<User> {
    let users = [
        User { id: 1, name: "ada" },
        User { id: 2, name: "grace" },
        User { id: 3, name: "linus" },
        User { id: 4, name: "barbara" },
        User { id: 5, name: "ken" },
    ];
    Items::with_page_size(|user: &User| user.id.to_string(), 2)
        .unwrap()
        .add_all(users)
}

fn ids(items: &Items<User>) -> HashSet<String> {
    items.selected().clone()
}

fn set(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_select_all_and_select_page_differ() {
    let items = users();
    assert!(items.working().len() > items.page_info().page_size());

    let all = items.select_all();
    let page = items.select_page();
    assert_eq!(ids(&all), set(&["1", "2", "3", "4", "5"]));
    assert_eq!(ids(&page), set(&["1", "2"]));
    assert_ne!(ids(&all), ids(&page));

    let second_page = items.goto_next_page().select_page();
    assert_eq!(ids(&second_page), set(&["3", "4"]));
}

#[test]
fn test_select_all_uses_working_set() {
    let items = users().add_filter("short", |user: &User| user.name.len() <= 3).select_all();
    assert_eq!(ids(&items), set(&["1", "5"]));
}

#[test]
fn test_select_and_deselect() {
    let items = users();
    let grace = items.all()[1].clone();

    let items = items.select(&grace, true);
    assert!(items.is_selected(&grace));
    assert_eq!(items.selected_count(), 1);

    let items = items.select(&grace, true);
    assert_eq!(items.selected_count(), 1);

    let items = items.select(&grace, false);
    assert!(!items.is_selected(&grace));
    assert_eq!(items.selected_count(), 0);
}

#[test]
fn test_select_only() {
    let items = users().select_all();
    let ken = items.all()[4].clone();

    let items = items.select_only(&ken);
    assert_eq!(ids(&items), set(&["5"]));
    assert_eq!(items.selection(), vec![&ken]);
}

#[test]
fn test_toggle_selection() {
    let items = users();
    let ada = items.all()[0].clone();

    let items = items.toggle_selection(&ada);
    assert!(items.is_selected(&ada));
    let items = items.toggle_selection(&ada);
    assert!(!items.is_selected(&ada));
}

#[test]
fn test_select_none() {
    let items = users().select_all().select_none();
    assert_eq!(items.selected_count(), 0);
    assert!(items.selection().is_empty());
}

#[test]
fn test_selection_survives_filter_hiding_item() {
    let items = users();
    let linus = items.all()[2].clone();

    let items = items
        .select(&linus, true)
        .add_filter("not-linus", |user: &User| user.name != "linus");

    assert!(!items.working().contains(&&linus));
    assert!(items.is_selected(&linus));
    assert_eq!(items.selection(), vec![&linus]);

    let items = items.remove_filter("not-linus");
    assert!(items.is_selected(&linus));
}

#[test]
fn test_selection_survives_sort_and_paging() {
    let items = users();
    let barbara = items.all()[3].clone();

    let items = items
        .select(&barbara, true)
        .sort_with(pagelist::SortInfo::by_key("name", "Name", |user: &User| user.name))
        .goto_last_page();

    assert!(items.is_selected(&barbara));
    assert_eq!(items.selection(), vec![&barbara]);
}

#[test]
fn test_selection_drops_replaced_items() {
    let items = users().select_all();
    let items = items.add_all([User { id: 2, name: "grace" }, User { id: 9, name: "dennis" }]);

    // identifiers stay selected, but only those still present resolve
    assert_eq!(items.selected_count(), 5);
    assert_eq!(items.selection(), vec![&User { id: 2, name: "grace" }]);
}

#[test]
fn test_selection_in_all_order() {
    let items = users();
    let ken = items.all()[4].clone();
    let ada = items.all()[0].clone();

    let items = items.select(&ken, true).select(&ada, true);
    assert_eq!(items.selection(), vec![&ada, &ken]);
}

#[test]
fn test_unknown_items_are_not_selected() {
    let items = users().select(&users().all()[0].clone(), true);
    let stranger = User { id: 42, name: "mallory" };

    let selected = items.select(&stranger, true);
    assert!(!selected.is_selected(&stranger));
    assert_eq!(ids(&selected), set(&["1"]));

    let only = items.select_only(&stranger);
    assert_eq!(ids(&only), set(&["1"]));

    let toggled = items.toggle_selection(&stranger);
    assert_eq!(toggled.selected_count(), 1);
}
