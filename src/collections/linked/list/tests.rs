#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::collections::{Added, Entry, SortOrder};
use crate::util::panic::assert_panics;

fn numbered(count: usize) -> LinkedTable<String> {
    let mut list = LinkedTable::new();
    for i in 0..count {
        list.add(format!("name{i}"), format!("address{i}"));
    }
    list.verify_double_links();
    list
}

fn names<V>(list: &LinkedTable<V>) -> Vec<&str> {
    list.iter().map(|(name, _)| name).collect()
}

fn pairs<V: Clone>(list: &LinkedTable<V>) -> Vec<(String, V)> {
    list.iter().map(|(name, value)| (name.to_owned(), value.clone())).collect()
}

fn owned(expected: &[(&str, i64)]) -> Vec<(String, i64)> {
    expected.iter().map(|&(name, value)| (name.to_owned(), value)).collect()
}

#[test]
fn test_add_and_lookup() {
    let mut list = LinkedTable::new();
    assert!(list.is_empty());

    assert_eq!(list.add("George", String::from("23 Oak St")), Added::Inserted);
    assert_eq!(list.add("Peter", String::from("27 Oak St")), Added::Inserted);
    assert_eq!(
        list.add("George", String::from("289 Pine St")),
        Added::Replaced(String::from("23 Oak St")),
        "Adding an existing name should hand back the previous value."
    );
    list.verify_double_links();

    assert_eq!(list.len(), 2, "Replacing a value shouldn't add an entry.");
    assert_eq!(list.lookup("George").map(String::as_str), Some("289 Pine St"));
    assert_eq!(list.lookup("Peter").map(String::as_str), Some("27 Oak St"));
    assert_eq!(list.lookup("Paul"), None);
    assert_eq!(list.lookup_index("George"), Some(0));
    assert_eq!(list.lookup_index("Peter"), Some(1));
    assert!(list.contains("Peter"));
    assert!(!list.contains("Paul"));

    list.lookup_mut("Peter").expect("Peter was added").push_str(", Apt 2");
    assert_eq!(list.lookup("Peter").map(String::as_str), Some("27 Oak St, Apt 2"));
}

#[test]
fn test_empty_name() {
    let mut list = LinkedTable::new();
    assert_eq!(list.try_add("", 1_i64), Err(EmptyName));
    assert!(list.is_empty(), "A rejected add shouldn't change the list.");

    assert_panics!({
        let mut list = LinkedTable::new();
        list.add("", 1_i64);
    });
}

#[test]
fn test_insert_empty_name() {
    let mut list = LinkedTable::new();
    list.insert_last("kept", 1_i64);

    assert_eq!(list.try_insert_last("", 2), Err(EmptyName));
    assert_eq!(list.try_insert_first("", 3), Err(EmptyName));
    assert_eq!(
        list.iter().collect::<Vec<_>>(),
        [("kept", &1)],
        "A rejected insert shouldn't change the list."
    );

    assert_panics!({
        let mut list = LinkedTable::new();
        list.insert_first("", 1_i64);
    });
    assert_panics!({
        let mut list = LinkedTable::new();
        list.insert_last("", 1_i64);
    });
}

#[test]
fn test_remove_by_name() {
    let mut list = numbered(30);

    let removed = list.remove("name5");
    assert_eq!(removed, Some(Entry::new("name5", String::from("address5"))));
    assert_eq!(list.len(), 29);
    assert_eq!(list.lookup("name5"), None);
    assert_eq!(list.get_ith(5).map(|(name, _)| name), Ok("name6"));

    assert!(list.remove("name18").is_some());
    assert_eq!(list.get_ith(17).map(|(name, _)| name), Ok("name19"));

    assert_eq!(list.remove("name64"), None, "Removing a missing name should do nothing.");
    assert_eq!(list.len(), 28);
    list.verify_double_links();

    assert!(list.remove("name0").is_some(), "Removing the head should work.");
    assert!(list.remove("name29").is_some(), "Removing the tail should work.");
    list.verify_double_links();
    assert_eq!(list.get_ith(0).map(|(name, _)| name), Ok("name1"));
    assert_eq!(list.get_ith(25).map(|(name, _)| name), Ok("name28"));

    let mut list = numbered(1);
    assert!(list.remove("name0").is_some());
    assert!(list.is_empty(), "Removing the only entry should empty the list.");
    list.verify_double_links();
}

#[test]
fn test_get_ith_from_both_ends() {
    let list = numbered(30);

    for i in 0..30 {
        assert_eq!(
            list.get_ith(i),
            Ok((format!("name{i}").as_str(), &format!("address{i}"))),
            "Seeking should find the same entry from either end."
        );
    }

    assert_eq!(list.get_ith(30), Err(IndexOutOfBounds { index: 30, len: 30 }));
    assert!(list.get_ith(usize::MAX).is_err());
    assert_eq!(
        LinkedTable::<i64>::new().get_ith(0),
        Err(IndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_remove_ith() {
    let mut list = numbered(5);

    assert_eq!(list.remove_ith(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(list.remove_ith(1).map(|entry| entry.name), Ok(String::from("name1")));
    assert_eq!(list.remove_ith(2).map(|entry| entry.name), Ok(String::from("name3")));
    assert_eq!(names(&list), ["name0", "name2", "name4"]);
    list.verify_double_links();

    assert_eq!(list.remove_first().map(|entry| entry.name), Ok(String::from("name0")));
    assert_eq!(list.remove_last().map(|entry| entry.name), Ok(String::from("name4")));
    assert_eq!(names(&list), ["name2"]);
    list.verify_double_links();

    assert_eq!(list.remove_last().map(|entry| entry.name), Ok(String::from("name2")));
    assert_eq!(list.remove_first(), Err(NoElements));
    assert_eq!(list.remove_last(), Err(NoElements));
}

#[test]
fn test_insert_first_and_last() {
    let mut list = LinkedTable::new();
    list.insert_last("b", 2_i64);
    list.insert_first("a", 1);
    list.insert_last("c", 3);
    assert_eq!(pairs(&list), owned(&[("a", 1), ("b", 2), ("c", 3)]));

    list.insert_first("c", 0);
    list.verify_double_links();
    assert_eq!(list.len(), 4, "Inserting at either end doesn't check for duplicates.");
    assert_eq!(list.lookup("c"), Some(&0), "Lookup should find the first duplicate.");

    assert!(list.remove("c").is_some());
    assert_eq!(list.lookup("c"), Some(&3), "The other duplicate should remain.");

    list.clear();
    assert!(list.is_empty());
    list.insert_first("only", 9);
    assert_eq!(list.get_ith(0), Ok(("only", &9)));
    list.verify_double_links();
}

#[test]
fn test_sort_by_name() {
    let mut list = LinkedTable::new();
    list.add("c", 1_i64);
    list.add("a", 2);
    list.add("b", 3);

    list.sort(SortOrder::Ascending);
    list.verify_double_links();
    assert_eq!(pairs(&list), owned(&[("a", 2), ("b", 3), ("c", 1)]));
    assert_eq!(list.iter().rev().next(), Some(("c", &1)), "The tail should be relinked too.");

    list.sort(SortOrder::Descending);
    list.verify_double_links();
    assert_eq!(pairs(&list), owned(&[("c", 1), ("b", 3), ("a", 2)]));

    let mut list = LinkedTable::new();
    list.add("b", 1_i64);
    list.add("B", 2);
    list.add("ab", 3);
    list.add("a", 4);
    list.sort(SortOrder::Ascending);
    assert_eq!(names(&list), ["B", "a", "ab", "b"], "Names should be compared byte-wise.");

    let mut list = LinkedTable::<i64>::new();
    list.sort(SortOrder::Ascending);
    assert!(list.is_empty(), "Sorting an empty list should do nothing.");
}

#[test]
fn test_sort_with_duplicate_names() {
    let mut list = LinkedTable::new();
    list.insert_last("x", 1_i64);
    list.insert_last("a", 2);
    list.insert_last("x", 3);
    list.insert_last("a", 4);

    list.sort(SortOrder::Ascending);
    list.verify_double_links();
    assert_eq!(
        pairs(&list),
        owned(&[("a", 2), ("a", 4), ("x", 1), ("x", 3)]),
        "Duplicate names should keep their relative order and their own values."
    );
}

#[test]
fn test_sort_by_value() {
    let mut list = LinkedTable::new();
    list.add("George", 101_i64);
    list.add("Peter", -7);
    list.add("Mary", 101);
    list.add("Anne", 0);

    list.sort_by_value(SortOrder::Ascending);
    list.verify_double_links();
    assert_eq!(
        pairs(&list),
        owned(&[("Peter", -7), ("Anne", 0), ("George", 101), ("Mary", 101)])
    );

    list.sort_by_value(SortOrder::Descending);
    list.verify_double_links();
    assert_eq!(
        pairs(&list),
        owned(&[("George", 101), ("Mary", 101), ("Anne", 0), ("Peter", -7)]),
        "Entries sharing a value should keep their relative order."
    );
}

#[test]
fn test_iterators() {
    let mut list: LinkedTable<i64> =
        [("a", 1), ("b", 2), ("a", 3)].into_iter().map(|(n, v)| (n.to_owned(), v)).collect();
    assert_eq!(list.len(), 2, "Collecting should deduplicate through add.");
    assert_eq!(list.lookup("a"), Some(&3));

    for value in list.values_mut() {
        *value *= 10;
    }
    assert_eq!(list.iter().rev().collect::<Vec<_>>(), [("b", &20), ("a", &30)]);
    assert_eq!(list.iter().len(), 2);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(("a", &30)));
    assert_eq!(iter.next_back(), Some(("b", &20)));
    assert_eq!(iter.next(), None, "The two ends should stop once they meet.");
    assert_eq!(iter.next_back(), None);

    let mut owned_iter = list.clone().into_iter();
    assert_eq!(owned_iter.len(), 2);
    assert_eq!(owned_iter.next_back(), Some((String::from("b"), 20)));
    assert_eq!(owned_iter.next(), Some((String::from("a"), 30)));
    assert_eq!(owned_iter.next(), None);
}

#[test]
fn test_clone_and_equality() {
    let list = numbered(11);
    let clone = list.clone();
    clone.verify_double_links();
    assert_eq!(list, clone);

    let mut other = LinkedTable::new();
    other.extend(list.clone());
    assert_eq!(list, other);

    other.sort(SortOrder::Descending);
    assert_ne!(list, other, "Equality should depend on order.");
}

#[test]
fn test_display() {
    let mut list = LinkedTable::new();
    list.add("George", String::from("23 Oak St"));
    list.add("Peter", String::from("27 Oak St"));
    assert_eq!(
        list.to_string(),
        "===== List =====\n\
         nElements=2\n\
         name=\"George\" value=\"23 Oak St\"\n\
         name=\"Peter\" value=\"27 Oak St\"\n\
         ======== End List ======="
    );

    let list = LinkedTable::<i64>::new();
    assert_eq!(list.to_string(), "===== List =====\nnElements=0\n======== End List =======");
}

#[test]
fn test_matches_resizable_table() {
    use crate::collections::contiguous::ResizableTable;

    let mut list = LinkedTable::new();
    let mut table = ResizableTable::new();
    for (name, value) in [("d", 4_i64), ("b", 2), ("a", 1), ("b", 5), ("c", 3)] {
        assert_eq!(list.add(name, value), table.add(name, value));
    }
    assert!(list.remove("a").is_some());
    assert!(table.remove("a").is_some());
    list.sort(SortOrder::Ascending);
    table.sort(SortOrder::Ascending);

    assert!(list.iter().eq(table.iter()), "Both collections should agree on every operation.");
}

proptest! {
    #[test]
    fn prop_links_survive_operations(ops in prop::collection::vec((0_u8..5, 0_u8..20), 0..100)) {
        let mut list = LinkedTable::new();
        let mut expected: Vec<(String, i64)> = Vec::new();

        for (op, key) in ops {
            let name = format!("k{key}");
            match op {
                0 => {
                    list.add(name.clone(), i64::from(key));
                    match expected.iter_mut().find(|(n, _)| *n == name) {
                        Some(entry) => entry.1 = i64::from(key),
                        None => expected.push((name, i64::from(key))),
                    }
                },
                1 => {
                    list.insert_first(name.clone(), i64::from(key));
                    expected.insert(0, (name, i64::from(key)));
                },
                2 => {
                    let removed = list.remove(&name).map(|entry| entry.name);
                    let position = expected.iter().position(|(n, _)| *n == name);
                    prop_assert_eq!(removed.is_some(), position.is_some());
                    if let Some(position) = position {
                        expected.remove(position);
                    }
                },
                3 => {
                    let index = usize::from(key);
                    prop_assert_eq!(list.remove_ith(index).is_ok(), index < expected.len());
                    if index < expected.len() {
                        expected.remove(index);
                    }
                },
                _ => {
                    list.sort(SortOrder::Ascending);
                    expected.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
                },
            }
            list.verify_double_links();
        }

        prop_assert_eq!(pairs(&list), expected);
    }
}
