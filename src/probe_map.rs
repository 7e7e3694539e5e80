//! Fixed-capacity open-addressed map keyed by integer fingerprints.
//!
//! Linear probing, no resizing, and a generational `clear` that retires
//! every entry by bumping a counter instead of touching the slots. The
//! beam selector clears the map once per turn, so the bulk clear must be
//! O(1).

/// Unsigned integer usable as an open-addressing key.
pub trait HashKey: Copy + Eq + Default {
    /// Home bucket for this key in a table of `buckets` slots.
    fn bucket(self, buckets: usize) -> usize;
}

macro_rules! impl_hash_key_narrow {
    ($($t:ty),* $(,)?) => {$(
        impl HashKey for $t {
            #[inline]
            fn bucket(self, buckets: usize) -> usize {
                self as usize % buckets
            }
        }
    )*};
}

impl_hash_key_narrow!(u8, u16, u32, usize);

impl HashKey for u64 {
    #[inline]
    fn bucket(self, buckets: usize) -> usize {
        (self % buckets as u64) as usize
    }
}

impl HashKey for u128 {
    #[inline]
    fn bucket(self, buckets: usize) -> usize {
        (self % buckets as u128) as usize
    }
}

/// Linear-probe hash map with generational clearing.
///
/// Capacity is fixed at construction and must stay strictly larger than
/// the number of live keys; a full table has no empty slot for a probe
/// to stop at.
pub struct ProbeMap<K, V> {
    buckets: usize,
    generation: u32,
    stamps: Vec<u32>,
    slots: Vec<(K, V)>,
}

impl<K: HashKey, V: Copy + Default> ProbeMap<K, V> {
    /// Map with `buckets` slots.
    ///
    /// # Panics
    /// Panics if `buckets == 0`.
    pub fn new(buckets: usize) -> Self {
        assert!(buckets > 0, "probe map needs at least one bucket");
        Self {
            buckets,
            generation: 1,
            stamps: vec![0; buckets],
            slots: vec![(K::default(), V::default()); buckets],
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.buckets
    }

    /// Locate `key`: `(true, slot)` if present, else `(false, slot)` for
    /// the first empty slot on its probe path.
    ///
    /// The returned slot may be passed straight to [`insert`](Self::insert)
    /// without reprobing.
    ///
    /// # Panics
    /// Panics when every slot is occupied and `key` is absent; the table
    /// was sized too small (see `hash_capacity` on the beam driver).
    pub fn probe(&self, key: K) -> (bool, usize) {
        let mut slot = key.bucket(self.buckets);
        let mut probed = 0;
        while self.stamps[slot] == self.generation {
            if self.slots[slot].0 == key {
                return (true, slot);
            }
            probed += 1;
            assert!(
                probed < self.buckets,
                "probe map is full; raise hash_capacity"
            );
            slot += 1;
            if slot == self.buckets {
                slot = 0;
            }
        }
        (false, slot)
    }

    /// Store `(key, value)` in `slot`, marking it live for the current
    /// generation. `slot` must come from [`probe`](Self::probe) for the
    /// same key in the same generation.
    pub fn insert(&mut self, slot: usize, key: K, value: V) {
        self.stamps[slot] = self.generation;
        self.slots[slot] = (key, value);
    }

    /// Value stored in an occupied `slot`.
    pub fn get(&self, slot: usize) -> V {
        self.slots[slot].1
    }

    /// Retire every entry.
    ///
    /// Amortized O(1): bumps the generation counter, re-zeroing the
    /// stamps only when the counter would wrap.
    pub fn clear(&mut self) {
        if self.generation == u32::MAX {
            self.stamps.iter_mut().for_each(|s| *s = 0);
            self.generation = 1;
        } else {
            self.generation += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProbeMap;

    #[test]
    fn probe_insert_get_roundtrip() {
        let mut map = ProbeMap::<u64, u32>::new(8);
        let (found, slot) = map.probe(21);
        assert!(!found);
        map.insert(slot, 21, 7);
        let (found, slot) = map.probe(21);
        assert!(found);
        assert_eq!(map.get(slot), 7);
    }

    #[test]
    fn colliding_keys_probe_forward() {
        let mut map = ProbeMap::<u64, u32>::new(4);
        // 1 and 5 share bucket 1.
        let (_, a) = map.probe(1);
        map.insert(a, 1, 10);
        let (found, b) = map.probe(5);
        assert!(!found);
        assert_ne!(a, b);
        map.insert(b, 5, 20);
        assert_eq!(map.get(map.probe(1).1), 10);
        assert_eq!(map.get(map.probe(5).1), 20);
    }

    #[test]
    fn clear_retires_all_entries() {
        let mut map = ProbeMap::<u64, u32>::new(4);
        for key in 0..3u64 {
            let (_, slot) = map.probe(key);
            map.insert(slot, key, key as u32);
        }
        map.clear();
        for key in 0..3u64 {
            assert!(!map.probe(key).0);
        }
        let (_, slot) = map.probe(2);
        map.insert(slot, 2, 9);
        assert_eq!(map.get(map.probe(2).1), 9);
    }

    #[test]
    fn generation_wrap_rezeroes_stamps() {
        let mut map = ProbeMap::<u64, u32>::new(4);
        map.generation = u32::MAX - 1;
        let (_, slot) = map.probe(3);
        map.insert(slot, 3, 1);
        map.clear(); // MAX - 1 -> MAX
        assert!(!map.probe(3).0);
        let (_, slot) = map.probe(3);
        map.insert(slot, 3, 2);
        map.clear(); // wrap: stamps re-zeroed, generation back to 1
        assert_eq!(map.generation, 1);
        assert!(map.stamps.iter().all(|&s| s == 0));
        assert!(!map.probe(3).0);
    }

    #[test]
    #[should_panic(expected = "probe map is full")]
    fn full_table_probe_aborts() {
        let mut map = ProbeMap::<u64, u32>::new(2);
        for key in 0..2u64 {
            let (_, slot) = map.probe(key);
            map.insert(slot, key, 0);
        }
        let _ = map.probe(7);
    }
}
