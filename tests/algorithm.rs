use indexmap::IndexMap;
use std::{cell::Cell, collections::HashMap};

#[test]
fn find_writes_back_through_mutable_reference() {
    let mut values = vec![1, 2, 3];

    let found: Option<&mut i32> = ezy::find(&mut values, &2);
    if let Some(x) = found {
        *x = 20;
    }
    assert_eq!(values, [1, 20, 3]);

    assert!(ezy::find(&mut values, &7).is_none());
}

#[test]
fn find_refers_into_shared_reference() {
    let values = vec![1, 2, 3];
    let found = ezy::find(&values, &3).unwrap();
    assert!(std::ptr::eq(found, &values[2]));
}

#[test]
fn find_on_temporary_owns_the_element() {
    let found: Option<String> = ezy::find(vec![String::from("a"), String::from("b")], "b");
    assert_eq!(found, Some(String::from("b")));

    let missing = ezy::find(vec![1, 2, 3], &4);
    assert_eq!(missing.unwrap_or(0), 0);
    assert_eq!(ezy::find(vec![1, 2, 3], &2).map(|x| x * 10), Some(20));
}

#[test]
fn find_if_stops_at_first_match() {
    let visited = Cell::new(0);
    let found = ezy::find_if(vec![1, 4, 6, 8], |x| {
        visited.set(visited.get() + 1);
        x % 2 == 0
    });
    assert_eq!(found, Some(4));
    assert_eq!(visited.get(), 2);
}

#[test]
fn find_element_reports_position() {
    let values = vec![5, 6, 7];
    assert_eq!(ezy::find_element(&values, &7), Some((2, &7)));
    assert_eq!(ezy::find_element(&values, &8), None);

    let mut values = vec![5, 6, 7];
    if let Some((index, x)) = ezy::find_element_if(&mut values, |x| **x > 5) {
        assert_eq!(index, 1);
        *x = 0;
    }
    assert_eq!(values, [5, 0, 7]);
}

#[test]
fn contains_and_checked_index() {
    let values = vec![1, 2, 3];
    assert!(ezy::contains(&values, &2));
    assert!(!ezy::contains(&values, &5));
    assert!(ezy::contains(vec![String::from("x")], "x"));

    assert_eq!(ezy::checked_index(&values, 1), Some(&2));
    assert_eq!(ezy::checked_index(&values, 3), None);
    assert_eq!(ezy::checked_index(ezy::range(100), 42), Some(42));
}

#[test]
fn accumulate_and_for_each() {
    let mut values = vec![1, 2, 3, 4];
    assert_eq!(ezy::accumulate(&values, 0, |sum, x| sum + x), 10);
    assert_eq!(
        ezy::accumulate(vec!["a", "b"], String::new(), |acc, x| acc + x),
        "ab"
    );

    ezy::for_each(&mut values, |x| *x *= 2);
    assert_eq!(values, [2, 4, 6, 8]);
}

#[test]
fn boolean_queries_are_eager() {
    let cells = vec![Cell::new(1), Cell::new(2), Cell::new(3)];

    let all_small = ezy::all(&cells, |cell| cell.get() < 5);
    let any_large = ezy::any(&cells, |cell| cell.get() > 5);
    let none_zero = ezy::none(&cells, |cell| cell.get() == 0);

    cells[0].set(10);
    cells[1].set(0);

    assert!(all_small);
    assert!(!any_large);
    assert!(none_zero);

    assert!(!ezy::all(&cells, |cell| cell.get() < 5));
    assert!(ezy::any(&cells, |cell| cell.get() > 5));
    assert!(!ezy::none(&cells, |cell| cell.get() == 0));
}

#[test]
fn size_and_empty() {
    let values = vec![1, 2, 3];
    assert_eq!(ezy::size(&values), 3);
    assert_eq!(ezy::size(ezy::filter(&values, |x| **x > 1)), 2);
    assert!(!ezy::empty(&values));
    assert!(ezy::empty(Vec::<i32>::new()));
    assert!(ezy::empty(ezy::take(&values, 0)));

    let map: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(ezy::size(map), 2);
}

#[test]
fn join_displays_elements() {
    assert_eq!(ezy::join(vec![1, 2, 3], "-"), "1-2-3");
    assert_eq!(ezy::join(Vec::<i32>::new(), ", "), "");
    assert_eq!(ezy::join(["only"], ", "), "only");
    assert_eq!(ezy::join(ezy::map(1..4, |x| x * x), " "), "1 4 9");
}

#[test]
fn join_uses_each_display_impl() {
    struct Point(i32, i32);

    impl std::fmt::Display for Point {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "({}, {})", self.0, self.1)
        }
    }

    let points = vec![Point(0, 1), Point(-2, 3)];
    assert_eq!(ezy::join(&points, "; "), "(0, 1); (-2, 3)");
    assert_eq!(ezy::join(vec![1.5, 2.0], ","), "1.5,2");
}

#[test]
fn collect_into_containers() {
    let map: IndexMap<char, i32> = ezy::collect(ezy::zip(vec!['b', 'a'], vec![1, 2]));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ['b', 'a']);
    assert_eq!(map[&'a'], 2);

    let text: String = ezy::collect(ezy::reverse("abc".chars()));
    assert_eq!(text, "cba");
}

#[test]
fn partition_splits_shared_range() {
    let values = vec![1, 2, 3, 4, 5];
    let (even, odd) = ezy::partition(&values, |x| **x % 2 == 0);

    assert_eq!(ezy::collect::<Vec<_>, _>(even), [&2, &4]);
    assert_eq!(ezy::collect::<Vec<_>, _>(odd), [&1, &3, &5]);
}

#[test]
fn transform_is_map() {
    let words = ["a", "bb", "ccc"];
    let lengths: Vec<usize> = ezy::collect(ezy::transform(&words, |word| word.len()));
    assert_eq!(lengths, [1, 2, 3]);
}
