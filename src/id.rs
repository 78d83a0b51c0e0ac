/// Opaque identifier naming one UI element instance across frames.
///
/// The toolkit never derives ids on its own; callers usually hash a label
/// with [`Id::new`] or [`Id::new_index`], or pass the id their layout engine
/// already computed. `0` is reserved and means "no element".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Id(pub u32);

impl Id {
    pub const NONE: Id = Id(0);

    /// Creates an id by hashing `label`.
    #[inline]
    pub fn new(label: &str) -> Id {
        Self::new_index(label, 0)
    }

    /// Creates an id by hashing `label` together with `index`, for repeated
    /// elements sharing one label.
    #[inline]
    pub fn new_index(label: &str, index: u32) -> Id {
        Id(hash_label(label, index, 0))
    }

    /// Same as [`Id::new_index`] but seeded with a parent id, so children of
    /// different parents can reuse labels.
    #[inline]
    pub fn new_index_local(label: &str, index: u32, parent: Id) -> Id {
        Id(hash_label(label, index, parent.0))
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Id {
    fn from(id: u32) -> Self {
        Id(id)
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> Self {
        id.0
    }
}

/// One-at-a-time style hash of `label`, mixed with `offset` and `seed`.
/// Never returns 0.
pub fn hash_label(label: &str, offset: u32, seed: u32) -> u32 {
    let mut hash: u32 = seed;
    for b in label.bytes() {
        hash = hash.wrapping_add(b as u32);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(offset);
    hash = hash.wrapping_add(hash << 10);
    hash ^= hash >> 6;

    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);
    match hash.wrapping_add(1) {
        0 => 1,
        id => id,
    }
}
