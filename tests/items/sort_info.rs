use pagelist::items::SortInfo;
use std::collections::HashSet;
use std::sync::Arc;

fn by_value() -> SortInfo<i32> {
    SortInfo::new("x", "Value", |a: &i32, b: &i32| a.cmp(b))
}

#[test]
fn test_new_is_ascending() {
    let sort = by_value();
    assert_eq!(sort.id(), "x");
    assert_eq!(sort.label(), "Value");
    assert!(sort.is_ascending());
}

#[test]
fn test_toggle_keeps_id_label_and_comparator() {
    let sort = by_value();
    let toggled = sort.toggle();

    assert_eq!(toggled.id(), "x");
    assert_eq!(toggled.label(), "Value");
    assert!(!toggled.is_ascending());
    assert!(Arc::ptr_eq(sort.comparator(), toggled.comparator()));
    assert!(toggled.toggle().is_ascending());
}

#[test]
fn test_effective_comparators_are_reverses() {
    let ascending = by_value();
    let descending = ascending.toggle();
    let up = ascending.effective_comparator();
    let down = descending.effective_comparator();

    for a in -3..=3 {
        for b in -3..=3 {
            assert_eq!(up(&a, &b), down(&a, &b).reverse(), "pair ({}, {})", a, b);
        }
    }
}

#[test]
fn test_equality_ignores_comparator() {
    let a = SortInfo::new("x", "A", |a: &i32, b: &i32| a.cmp(b));
    let b = SortInfo::new("x", "B", |a: &i32, b: &i32| b.cmp(a));
    let other = SortInfo::new("y", "A", |a: &i32, b: &i32| a.cmp(b));

    assert_eq!(a, b);
    assert_ne!(a, a.toggle());
    assert_ne!(a, other);

    let set: HashSet<SortInfo<i32>> = [a.clone(), b, a.toggle()].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_by_key() {
    let sort = SortInfo::by_key("len", "Length", |s: &String| s.len());
    let compare = sort.effective_comparator();
    assert!(compare(&"ab".to_string(), &"abc".to_string()).is_lt());
}
