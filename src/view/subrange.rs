use crate::keeper::owned_keeper;
use std::{
    borrow::Borrow,
    cell::RefCell,
    collections::{BTreeMap, VecDeque},
    fmt,
    iter::FusedIterator,
    rc::Rc,
};

/// Rule ending the pieces of a [Subranges] iterator.
pub trait Boundary<T> {
    /// Whether `item` separates pieces. Separators belong to no piece.
    fn separates(&self, item: &T) -> bool;

    /// Whether a piece holding `len` elements is complete.
    fn is_full(&self, len: usize) -> bool;
}

/// Pieces of a fixed number of elements, used by [Chunk](super::Chunk).
#[derive(Debug, Clone, Copy)]
pub struct Count(pub(crate) usize);

impl<T> Boundary<T> for Count {
    fn separates(&self, _item: &T) -> bool {
        false
    }

    fn is_full(&self, len: usize) -> bool {
        len == self.0
    }
}

/// Pieces separated by a delimiter, used by [Split](super::Split).
#[derive(Debug, Clone)]
pub struct Delimiter<D>(pub(crate) D);

impl<T, D> Boundary<T> for Delimiter<D>
where
    T: Borrow<D>,
    D: PartialEq,
{
    fn separates(&self, item: &T) -> bool {
        <T as Borrow<D>>::borrow(item) == &self.0
    }

    fn is_full(&self, _len: usize) -> bool {
        false
    }
}

// Source iterator shared by a `Subranges` and the pieces it yielded.
//
// Elements are pulled from `inner` once. The piece being pulled is `current`;
// when the caller moves on before draining it, its remaining elements are
// parked for the `Subrange` still holding it.
struct Cursor<I, B>
where
    I: Iterator,
{
    inner: I,
    boundary: B,
    current: usize,
    open: bool,
    abandoned: bool,
    len: usize,
    head: Option<I::Item>,
    parked: BTreeMap<usize, VecDeque<I::Item>>,
    exhausted: bool,
}

impl<I, B> Cursor<I, B>
where
    I: Iterator,
    B: Boundary<I::Item>,
{
    // Next element of the open piece, straight from the source.
    fn advance(&mut self) -> Option<I::Item> {
        if let Some(head) = self.head.take() {
            return Some(head);
        }
        if self.exhausted || self.boundary.is_full(self.len) {
            self.open = false;
            return None;
        }
        match self.inner.next() {
            Some(item) if !self.boundary.separates(&item) => {
                self.len += 1;
                Some(item)
            }
            Some(_) => {
                self.open = false;
                None
            }
            None => {
                self.exhausted = true;
                self.open = false;
                None
            }
        }
    }

    fn pull(&mut self, index: usize) -> Option<I::Item> {
        if index == self.current && self.open {
            return self.advance();
        }
        let piece = self.parked.get_mut(&index)?;
        let item = piece.pop_front();
        if piece.is_empty() {
            self.parked.remove(&index);
        }
        item
    }

    // Close the open piece and position on the first element of the next one.
    fn start_next(&mut self) -> Option<usize> {
        if self.open {
            let mut rest = VecDeque::new();
            while let Some(item) = self.advance() {
                if !self.abandoned {
                    rest.push_back(item);
                }
            }
            if !rest.is_empty() {
                log::trace!("parking {} elements of piece {}", rest.len(), self.current);
                self.parked.insert(self.current, rest);
            }
        }

        while !self.exhausted {
            match self.inner.next() {
                Some(item) if self.boundary.separates(&item) => continue,
                Some(item) => {
                    self.current += 1;
                    self.head = Some(item);
                    self.len = 1;
                    self.open = true;
                    self.abandoned = false;
                    return Some(self.current);
                }
                None => self.exhausted = true,
            }
        }
        None
    }
}

impl<I, B> Cursor<I, B>
where
    I: Iterator,
{
    // The piece `index` will not be read again.
    fn release(&mut self, index: usize) {
        if index == self.current {
            self.abandoned = true;
        }
        self.parked.remove(&index);
    }
}

/// Iterator over the contiguous pieces of a range, yielded by [Chunk](super::Chunk)
/// and [Split](super::Split).
///
/// Every element of the source is computed once, whatever the order in which
/// the pieces are consumed. A piece that is still held when the next one is
/// requested keeps its remaining elements in a buffer.
pub struct Subranges<I, B>
where
    I: Iterator,
{
    cursor: Rc<RefCell<Cursor<I, B>>>,
}

impl<I, B> Subranges<I, B>
where
    I: Iterator,
{
    pub(crate) fn new(inner: I, boundary: B) -> Self {
        Self {
            cursor: Rc::new(RefCell::new(Cursor {
                inner,
                boundary,
                current: 0,
                open: false,
                abandoned: false,
                len: 0,
                head: None,
                parked: BTreeMap::new(),
                exhausted: false,
            })),
        }
    }
}

impl<I, B> Iterator for Subranges<I, B>
where
    I: Iterator,
    B: Boundary<I::Item>,
{
    type Item = Subrange<I, B>;

    fn next(&mut self) -> Option<Subrange<I, B>> {
        let index = self.cursor.borrow_mut().start_next()?;
        Some(Subrange {
            cursor: Rc::clone(&self.cursor),
            index,
        })
    }
}

impl<I, B> FusedIterator for Subranges<I, B>
where
    I: Iterator,
    B: Boundary<I::Item>,
{
}

impl<I, B> fmt::Debug for Subranges<I, B>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subranges").finish_non_exhaustive()
    }
}

/// Contiguous piece of a range.
///
/// It yields the elements of the source itself: references into a borrowed
/// source stay references.
pub struct Subrange<I, B>
where
    I: Iterator,
{
    cursor: Rc<RefCell<Cursor<I, B>>>,
    index: usize,
}

impl<I, B> Iterator for Subrange<I, B>
where
    I: Iterator,
    B: Boundary<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.cursor.borrow_mut().pull(self.index)
    }
}

impl<I, B> FusedIterator for Subrange<I, B>
where
    I: Iterator,
    B: Boundary<I::Item>,
{
}

impl<I, B> Drop for Subrange<I, B>
where
    I: Iterator,
{
    fn drop(&mut self) {
        if let Ok(mut cursor) = self.cursor.try_borrow_mut() {
            cursor.release(self.index);
        }
    }
}

impl<I, B> fmt::Debug for Subrange<I, B>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subrange")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

owned_keeper! { [I: Iterator, B] Subrange<I, B> }
