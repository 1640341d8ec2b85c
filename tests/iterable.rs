use ezy::{
    feature::{self, Printable},
    Chain, EzyError, Iterable, StrongType,
};
use std::cell::Cell;

struct Scores;

type Numbers = StrongType<Vec<i32>, Scores, feature::Iterable>;

#[test]
fn chain_over_shared_reference() {
    let numbers = Numbers::new(vec![1, 2, 3, 4, 5, 6]);

    let odd_squares: Vec<i32> = numbers
        .iter()
        .filter(|x| **x % 2 == 1)
        .map(|x| x * x)
        .to();
    assert_eq!(odd_squares, [1, 9, 25]);

    let pairs: Vec<(usize, &i32)> = (&numbers).enumerate().take(2).to();
    assert_eq!(pairs, [(0, &1), (1, &2)]);

    // the source is untouched
    assert_eq!(numbers.get(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn chain_over_mutable_reference_writes_back() {
    let mut numbers = Numbers::new(vec![1, 2, 3, 4, 5, 6]);

    for x in numbers.iter_mut().filter(|x| **x % 2 == 0) {
        *x *= 2;
    }
    assert_eq!(numbers.get(), &[1, 4, 3, 8, 5, 12]);

    (&mut numbers).take(2).for_each(|x| *x = 0);
    assert_eq!(numbers.into_inner(), [0, 0, 3, 8, 5, 12]);
}

#[test]
fn chain_over_value_moves_the_range() {
    let numbers = Numbers::new(vec![3, 1, 2]);
    let strings: Vec<String> = numbers.map(|x| x.to_string()).reverse().to();
    assert_eq!(strings, ["2", "1", "3"]);
}

#[test]
fn views_see_later_changes() {
    let cells: StrongType<Vec<Cell<i32>>, (), feature::Iterable> =
        StrongType::new(vec![Cell::new(1), Cell::new(2)]);

    let doubled = cells.iter().map(|cell| cell.get() * 2);
    let has_large = cells.iter().any(|cell| cell.get() > 5);
    cells.get()[0].set(5);

    assert_eq!(doubled.to::<Vec<_>>(), [10, 4]);
    assert!(!has_large);
    assert!(cells.iter().any(|cell| cell.get() > 3));
}

#[test]
fn queries() {
    let numbers = Numbers::new(vec![4, 8, 15, 16, 23, 42]);

    assert_eq!(numbers.iter().size(), 6);
    assert!(!numbers.iter().empty());
    assert!(numbers.iter().contains(&15));
    assert!(!numbers.iter().contains(&7));
    assert_eq!(numbers.iter().accumulate(0, |sum, x| sum + x), 108);
    assert!(numbers.iter().all(|x| *x > 0));
    assert!(numbers.iter().none(|x| *x > 100));
    assert_eq!(numbers.iter().find_if(|x| **x > 10), Some(&15));
    assert_eq!(numbers.iter().join(","), "4,8,15,16,23,42");
}

#[test]
fn find_follows_the_receiver() {
    let mut numbers = Numbers::new(vec![1, 2, 3]);

    if let Some(x) = (&mut numbers).find(&2) {
        *x = 20;
    }
    assert_eq!(numbers.get(), &[1, 20, 3]);

    let found: Option<i32> = numbers.find(&3);
    assert_eq!(found, Some(3));
}

#[test]
fn partition_on_shared_reference() {
    let numbers = Numbers::new(vec![1, 2, 3, 4, 5]);
    let (small, large) = numbers.iter().partition(|x| **x < 3);

    assert_eq!(small.to::<Vec<_>>(), [&1, &2]);
    assert_eq!(large.to::<Vec<_>>(), [&3, &4, &5]);
}

#[test]
fn slicing_and_stepping() {
    let numbers = Numbers::new((0..10).collect());

    let middle: Vec<&i32> = numbers.iter().slice(2, 5).unwrap().to();
    assert_eq!(middle, [&2, &3, &4]);
    assert_eq!(
        numbers.iter().slice(5, 2).unwrap_err(),
        EzyError::InvertedSlice { from: 5, until: 2 }
    );

    let stepped: Vec<&i32> = numbers.iter().step_by(4).unwrap().to();
    assert_eq!(stepped, [&0, &4, &8]);

    let tail: Vec<&i32> = numbers.iter().drop(7).to();
    assert_eq!(tail, [&7, &8, &9]);

    let head: Vec<&i32> = numbers.iter().take_while(|x| **x < 3).to();
    assert_eq!(head, [&0, &1, &2]);
}

#[test]
fn chunk_split_and_flatten() {
    let numbers = Numbers::new((1..=9).collect());
    let chunks: Vec<Vec<i32>> = numbers
        .iter()
        .chunk(4)
        .unwrap()
        .map(|chunk| chunk.copied().collect())
        .to();
    assert_eq!(chunks, [vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9]]);

    let flat: Vec<i32> = numbers.iter().chunk(4).unwrap().flatten().map(|x| *x).to();
    assert_eq!(&flat, numbers.get());

    let text: StrongType<std::str::Chars, (), feature::Iterable> =
        StrongType::new("  split  these words ".chars());
    let words: Vec<String> = text.split(' ').map(|word| word.collect()).to();
    assert_eq!(words, ["split", "these", "words"]);
}

#[test]
fn combining_ranges() {
    let left = Numbers::new(vec![1, 2, 3]);
    let right = Numbers::new(vec![10, 20]);

    let pairs: Vec<(&i32, &i32)> = left.iter().zip(right.iter()).to();
    assert_eq!(pairs, [(&1, &10), (&2, &20)]);

    let sums: Vec<i32> = left.iter().zip_with(&right, |a, b| a + b).to();
    assert_eq!(sums, [11, 22]);

    let joined: Vec<&i32> = left.iter().concatenate(right.get()).to();
    assert_eq!(joined, [&1, &2, &3, &10, &20]);

    let repeated: Vec<i32> = right.iter().flat_map(|x| vec![*x; 2]).to();
    assert_eq!(repeated, [10, 10, 20, 20]);

    let cycled: Vec<&i32> = right.iter().cycle().take(5).to();
    assert_eq!(cycled, [&10, &20, &10, &20, &10]);
}

#[test]
fn chained_values_keep_the_features() {
    type Labels = StrongType<Vec<&'static str>, (), (feature::Iterable, Printable)>;

    let labels = Labels::new(vec!["a", "b"]);
    let upper: Chain<Vec<String>, (feature::Iterable, Printable)> =
        labels.iter().map(|label| label.to_uppercase()).to_iterable();

    assert_eq!(upper.iter().join("+"), "A+B");
    assert_eq!(upper.size(), 2);
}

#[test]
fn strong_type_is_a_range() {
    let numbers = Numbers::new(vec![1, 2, 3]);

    let mut total = 0;
    for x in &numbers {
        total += x;
    }
    assert_eq!(total, 6);

    let doubled: Vec<i32> = ezy::collect(ezy::map(&numbers, |x| x * 2));
    assert_eq!(doubled, [2, 4, 6]);

    assert_eq!(numbers.into_iter().last(), Some(3));
}
