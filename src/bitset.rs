/// Growable bitset over 64-bit words.
///
/// Bits past the allocated words read as clear; `set` grows the word vector
/// on demand and `clear` never shrinks it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
}

const WORD_BITS: usize = u64::BITS as usize;

#[inline(always)]
fn split(bit: usize) -> (usize, u64) {
    (bit / WORD_BITS, 1u64 << (bit % WORD_BITS))
}

impl BitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `bit`. Returns true if it was previously clear.
    pub fn set(&mut self, bit: usize) -> bool {
        let (word, mask) = split(bit);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let w = &mut self.words[word];
        let was = *w & mask != 0;
        *w |= mask;
        !was
    }

    pub fn get(&self, bit: usize) -> bool {
        let (word, mask) = split(bit);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Clears `bit`. Returns true if it was previously set.
    pub fn clear(&mut self, bit: usize) -> bool {
        let (word, mask) = split(bit);
        match self.words.get_mut(word) {
            Some(w) => {
                let was = *w & mask != 0;
                *w &= !mask;
                was
            }
            None => false,
        }
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}
