use ezy::EzyError;
use std::cell::Cell;

fn collect<R: IntoIterator>(range: R) -> Vec<R::Item> {
    range.into_iter().collect()
}

#[test]
fn zip_stops_at_shortest() {
    assert_eq!(collect(ezy::zip(vec![1, 2, 3], vec![4, 5])), [(1, 4), (2, 5)]);
    assert_eq!(collect(ezy::zip(vec![1], vec!['a', 'b'])), [(1, 'a')]);

    let sums = ezy::zip_with(vec![1, 2, 3], vec![10, 20], |a, b| a + b);
    assert_eq!(collect(sums), [11, 22]);
}

#[test]
fn take_does_not_overrun() {
    assert_eq!(collect(ezy::take(vec![1, 2, 3], 5)), [1, 2, 3]);
    assert_eq!(collect(ezy::take(vec![1, 2, 3], 2)), [1, 2]);
    assert!(collect(ezy::take(vec![1, 2, 3], 0)).is_empty());

    let iter = ezy::take(vec![1, 2, 3], 2).into_iter();
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn take_while_stops_at_first_failure() {
    let calls = Cell::new(0);
    let view = ezy::take_while(vec![1, 2, 5, 1, 1], |x| {
        calls.set(calls.get() + 1);
        *x < 3
    });

    let mut iter = view.into_iter();
    let taken: Vec<i32> = iter.by_ref().collect();
    assert_eq!(taken, [1, 2]);
    assert_eq!(iter.next(), None);
    assert_eq!(calls.get(), 3);

    assert_eq!(collect(ezy::take_while(vec![1, 2], |_| true)), [1, 2]);
}

#[test]
fn filter_mutation_propagates() {
    let mut values = vec![1, 2, 3, 4, 5, 6];
    for x in ezy::filter(&mut values, |x| **x % 2 == 0) {
        *x *= 2;
    }
    assert_eq!(values, [1, 4, 3, 8, 5, 12]);
}

#[test]
fn owned_view_mutates_its_own_copy() {
    let values = vec![1, 2, 3];
    let mut view = ezy::Owned::new(values.clone());
    for x in view.get_mut().iter_mut() {
        *x = 0;
    }
    assert_eq!(collect(ezy::map(view, |x| x + 1)), [1, 1, 1]);
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn views_are_lazy() {
    let cells = vec![Cell::new(1), Cell::new(2), Cell::new(3), Cell::new(4)];

    let mapped = ezy::map(&cells, |cell| cell.get());
    let filtered = ezy::filter(&cells, |cell| cell.get() > 2);
    let sliced = ezy::slice(&cells, 1, 3).unwrap();

    cells[1].set(20);
    cells[3].set(0);

    assert_eq!(collect(mapped), [1, 20, 3, 0]);
    let filtered: Vec<i32> = filtered.into_iter().map(Cell::get).collect();
    assert_eq!(filtered, [20, 3]);
    let sliced: Vec<i32> = sliced.into_iter().map(Cell::get).collect();
    assert_eq!(sliced, [20, 3]);
}

#[test]
fn map_runs_once_per_visited_element() {
    let calls = Cell::new(0);
    let view = ezy::map(vec![1, 2, 3, 4], |x| {
        calls.set(calls.get() + 1);
        x * 10
    });
    assert_eq!(calls.get(), 0);

    assert_eq!(collect(ezy::take(view, 2)), [10, 20]);
    assert_eq!(calls.get(), 2);
}

#[test]
fn views_are_reiterable_by_clone() {
    let values = vec![3, 1, 2];
    let view = ezy::map(&values, |x| x * 2);

    let first = collect(view.clone());
    let second = collect(view);
    assert_eq!(first, [6, 2, 4]);
    assert_eq!(first, second);
}

#[test]
fn concatenate_chains_ranges() {
    assert_eq!(collect(ezy::concatenate(vec![1, 2], vec![3])), [1, 2, 3]);

    let a = [1, 2];
    let b = vec![3, 4];
    let joined = ezy::concatenate(&a, &b);
    assert_eq!(collect(joined.clone()), [&1, &2, &3, &4]);
    assert_eq!(collect(ezy::reverse(joined)), [&4, &3, &2, &1]);
}

#[test]
fn slice_clamps_and_rejects_inverted_bounds() {
    let values = vec![0, 1, 2, 3, 4];

    assert_eq!(collect(ezy::slice(&values, 1, 3).unwrap()), [&1, &2]);
    assert_eq!(collect(ezy::slice(&values, 3, 100).unwrap()), [&3, &4]);
    assert!(collect(ezy::slice(&values, 7, 9).unwrap()).is_empty());
    assert!(collect(ezy::slice(&values, 2, 2).unwrap()).is_empty());

    let err = ezy::slice(&values, 3, 1).unwrap_err();
    assert_eq!(err, EzyError::InvertedSlice { from: 3, until: 1 });
}

#[test]
fn drop_skips_when_iteration_starts() {
    assert_eq!(collect(ezy::drop(vec![1, 2, 3, 4], 2)), [3, 4]);
    assert!(collect(ezy::drop(vec![1], 5)).is_empty());
    assert_eq!(collect(ezy::drop(vec![1, 2], 0)), [1, 2]);

    let calls = Cell::new(0);
    let view = ezy::drop(
        ezy::iterate(0, |x| {
            calls.set(calls.get() + 1);
            x + 1
        }),
        3,
    );
    assert_eq!(calls.get(), 0);

    let mut iter = view.into_iter();
    assert_eq!(calls.get(), 2);
    assert_eq!(iter.next(), Some(3));
}

#[test]
fn step_by_yields_every_nth() {
    assert_eq!(collect(ezy::step_by(0..10, 3).unwrap()), [0, 3, 6, 9]);
    assert_eq!(collect(ezy::step_by(vec!['a', 'b', 'c'], 1).unwrap()), ['a', 'b', 'c']);
    assert_eq!(ezy::step_by(0..10, 0).unwrap_err(), EzyError::ZeroStep);
}

#[test]
fn flatten_skips_empty_ranges() {
    let nested = vec![vec![], vec![1, 2], vec![], vec![], vec![3]];
    assert_eq!(collect(ezy::flatten(nested)), [1, 2, 3]);

    let empty: Vec<Vec<i32>> = vec![vec![], vec![]];
    assert!(collect(ezy::flatten(empty)).is_empty());

    let repeated = ezy::flat_map(vec![1, 2, 3], |x| ezy::take(ezy::repeat(x), x as usize));
    assert_eq!(collect(repeated), [1, 2, 2, 3, 3, 3]);
}

#[test]
fn cycle_wraps_around() {
    assert_eq!(
        collect(ezy::take(ezy::cycle(vec![1, 2, 3]), 7)),
        [1, 2, 3, 1, 2, 3, 1]
    );
    assert_eq!(ezy::cycle(Vec::<i32>::new()).into_iter().next(), None);

    let word: String = ezy::take(ezy::repeat('x'), 3).into_iter().collect();
    assert_eq!(word, "xxx");
}

#[test]
fn chunk_partitions_fully() {
    let chunks: Vec<Vec<i32>> = ezy::chunk(1..10, 4)
        .unwrap()
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect();
    assert_eq!(chunks, [vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9]]);

    let flat = collect(ezy::flatten(ezy::chunk(1..10, 4).unwrap()));
    assert_eq!(flat, (1..10).collect::<Vec<_>>());

    assert_eq!(ezy::chunk(1..10, 0).unwrap_err(), EzyError::ZeroChunkSize);
}

#[test]
fn chunk_of_borrowed_range_refers_to_source() {
    let values = vec![1, 2, 3];
    let mut chunks = ezy::chunk(&values, 2).unwrap().into_iter();

    let mut first = chunks.next().unwrap();
    assert!(std::ptr::eq(first.next().unwrap(), &values[0]));

    // moving on keeps what is left of the first chunk
    let second = chunks.next().unwrap();
    assert!(chunks.next().is_none());
    assert_eq!(second.copied().collect::<Vec<_>>(), [3]);
    assert!(std::ptr::eq(first.next().unwrap(), &values[1]));
    assert!(first.next().is_none());
}

#[test]
fn chunks_can_be_consumed_out_of_order() {
    let chunks: Vec<_> = ezy::chunk(vec![1, 2, 3, 4, 5], 2)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(chunks.len(), 3);

    let pieces: Vec<Vec<i32>> = chunks.into_iter().rev().map(|chunk| chunk.collect()).collect();
    assert_eq!(pieces, [vec![5], vec![3, 4], vec![1, 2]]);
}

#[test]
fn chunk_and_split_compute_each_element_once() {
    let calls = Cell::new(0);
    let counting = |x: i32| {
        calls.set(calls.get() + 1);
        x * 10
    };

    let chunks = ezy::chunk(ezy::map(vec![1, 2, 3, 4, 5], counting), 2).unwrap();
    assert_eq!(collect(ezy::flatten(chunks)), [10, 20, 30, 40, 50]);
    assert_eq!(calls.get(), 5);

    calls.set(0);
    let held: Vec<_> = ezy::chunk(ezy::map(vec![1, 2, 3, 4, 5], counting), 2)
        .unwrap()
        .into_iter()
        .collect();
    let pieces: Vec<Vec<i32>> = held.into_iter().map(|chunk| chunk.collect()).collect();
    assert_eq!(pieces, [vec![10, 20], vec![30, 40], vec![50]]);
    assert_eq!(calls.get(), 5);

    let upper = Cell::new(0);
    let words: Vec<String> = ezy::split(
        ezy::map("ab cd".chars(), |c| {
            upper.set(upper.get() + 1);
            c.to_ascii_uppercase()
        }),
        ' ',
    )
    .into_iter()
    .map(|word| word.collect())
    .collect();
    assert_eq!(words, ["AB", "CD"]);
    assert_eq!(upper.get(), 5);
}

#[test]
fn filter_under_chunk_and_flatten_runs_once_per_element() {
    let checks = Cell::new(0);
    let evens = ezy::filter(1..=8, |x| {
        checks.set(checks.get() + 1);
        x % 2 == 0
    });

    let flat = collect(ezy::flatten(ezy::chunk(evens, 3).unwrap()));
    assert_eq!(flat, [2, 4, 6, 8]);
    assert_eq!(checks.get(), 8);

    let calls = Cell::new(0);
    let nested = ezy::map(vec![vec![1, 2], vec![], vec![3]], |inner| {
        calls.set(calls.get() + 1);
        inner
    });
    assert_eq!(collect(ezy::flatten(nested)), [1, 2, 3]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn dropped_chunks_are_not_buffered() {
    let calls = Cell::new(0);
    let mut chunks = ezy::chunk(
        ezy::map(1..=6, |x| {
            calls.set(calls.get() + 1);
            x
        }),
        3,
    )
    .unwrap()
    .into_iter();

    drop(chunks.next());
    let second: Vec<i32> = chunks.next().unwrap().collect();
    assert_eq!(second, [4, 5, 6]);
    assert_eq!(calls.get(), 6);
}

#[test]
fn split_collapses_empty_tokens() {
    let words: Vec<String> = ezy::split("   This  is    a   sentence.  ".chars(), ' ')
        .into_iter()
        .map(|word| word.collect())
        .collect();
    assert_eq!(words, ["This", "is", "a", "sentence."]);

    let values: Vec<i32> = vec![0, 1, 2, 0, 0, 3, 0];
    let pieces: Vec<Vec<i32>> = ezy::split(&values, 0_i32)
        .into_iter()
        .map(|piece| piece.copied().collect())
        .collect();
    assert_eq!(pieces, [vec![1, 2], vec![3]]);

    assert!(collect(ezy::split(vec![0_i32, 0], 0_i32)).is_empty());
}

#[test]
fn reverse_and_enumerate() {
    let values = vec![1, 2, 3];
    assert_eq!(collect(ezy::reverse(&values)), [&3, &2, &1]);
    assert_eq!(
        collect(ezy::enumerate(vec!['a', 'b'])),
        [(0, 'a'), (1, 'b')]
    );
    assert_eq!(
        collect(ezy::reverse(ezy::map(1..4, |x| x * x))),
        [9, 4, 1]
    );
}

#[test]
fn range_progressions() {
    assert_eq!(collect(ezy::range(5)), [0, 1, 2, 3, 4]);
    assert_eq!(collect(ezy::range_between(2, 5)), [2, 3, 4]);
    assert!(collect(ezy::range_between(5, 2)).is_empty());

    assert_eq!(collect(ezy::range_by(0, 10, 3).unwrap()), [0, 3, 6, 9]);
    assert_eq!(collect(ezy::range_by(10, 0, -4).unwrap()), [10, 6, 2]);
    assert_eq!(
        collect(ezy::range_by(0.0, 1.0, 0.25).unwrap()),
        [0.0, 0.25, 0.5, 0.75]
    );
    assert!(collect(ezy::range_by(0, 5, -1).unwrap()).is_empty());
    assert_eq!(ezy::range_by(1, 2, 0).unwrap_err(), EzyError::ZeroStep);
}

#[test]
fn range_ending_at_type_max_does_not_overflow() {
    assert_eq!(collect(ezy::range_between(253u8, 255)), [253, 254]);
    assert_eq!(collect(ezy::range_by(250u8, 255, 5).unwrap()), [250]);
}

#[test]
fn signed_range_crossing_zero() {
    let values = collect(ezy::range_between(-100i8, 100));
    assert_eq!(values.len(), 200);
    assert_eq!(values.first(), Some(&-100));
    assert_eq!(values.last(), Some(&99));

    assert_eq!(collect(ezy::range_by(-3i8, 4, 3).unwrap()), [-3, 0, 3]);
    assert_eq!(
        collect(ezy::range_by(-1.0f32, 1.0, 0.5).unwrap()),
        [-1.0, -0.5, 0.0, 0.5]
    );
}

#[test]
fn range_spanning_the_whole_type() {
    assert_eq!(
        collect(ezy::range_between(i8::MIN, i8::MAX)),
        (i8::MIN..i8::MAX).collect::<Vec<_>>()
    );
    assert_eq!(
        collect(ezy::range_by(i8::MAX, i8::MIN, -1).unwrap()),
        (-127..=127).rev().collect::<Vec<i8>>()
    );

    assert_eq!(
        collect(ezy::range_by(i32::MIN, i32::MAX, i32::MAX).unwrap()),
        [i32::MIN, -1, i32::MAX - 1]
    );
    assert_eq!(
        collect(ezy::range_by(i64::MAX, i64::MIN, -i64::MAX).unwrap()),
        [i64::MAX, 0, -i64::MAX]
    );
    assert_eq!(
        collect(ezy::range_by(0u64, u64::MAX, u64::MAX / 2).unwrap()),
        [0, u64::MAX / 2, u64::MAX - 1]
    );

    let full = ezy::range_between(i32::MIN, i32::MAX).into_iter();
    assert_eq!(full.size_hint(), (u32::MAX as usize, Some(u32::MAX as usize)));
}

#[test]
fn iterate_is_lazy() {
    let calls = Cell::new(0);
    let powers = ezy::iterate(1, |x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert_eq!(collect(ezy::take(powers, 5)), [1, 2, 4, 8, 16]);
    assert_eq!(calls.get(), 4);
}
