use crate::{
    error::{EzyError, EzyResult},
    keeper::{owned_keeper, Iter, Keeper},
    view::{Count, Subrange, Subranges},
};

/// View splitting its source into consecutive [Subrange]s of `size` elements.
///
/// The last chunk holds the remainder and may be shorter.
#[derive(Debug, Clone)]
pub struct Chunk<K> {
    source: K,
    size: usize,
}

impl<K> Chunk<K> {
    /// Build the view, rejecting a zero chunk size.
    pub fn new(source: K, size: usize) -> EzyResult<Self> {
        if size == 0 {
            return Err(EzyError::ZeroChunkSize);
        }
        Ok(Self { source, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Iterator of [Chunk].
pub type ChunkIter<I> = Subranges<I, Count>;

/// Element of [Chunk].
pub type ChunkOf<I> = Subrange<I, Count>;

impl<K> IntoIterator for Chunk<K>
where
    K: Keeper,
{
    type Item = ChunkOf<Iter<K>>;
    type IntoIter = ChunkIter<Iter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        Subranges::new(self.source.begin(), Count(self.size))
    }
}

owned_keeper! { [K] Chunk<K> }
