//! Scoring strategies for rendezvous placement.

/// Deterministic score for a (node, item) identifier pair.
///
/// [`NodeSet`](crate::NodeSet) hands each item to the member scoring
/// greatest. Implementations must be pure functions of their arguments;
/// seeded hashers (`RandomState` and friends) would place the same item
/// differently across processes and must not be used here.
pub trait Scorer<I> {
    /// Totally ordered score domain.
    type Score: Ord;

    /// Score `node` as a placement target for `item`.
    ///
    /// Must depend only on the two arguments, so that every caller, on every
    /// host, ranks the same members the same way.
    fn score(&self, node: &I, item: &I) -> Self::Score;
}

/// Plain functions and closures score directly.
impl<I, F, O> Scorer<I> for F
where
    F: Fn(&I, &I) -> O,
    O: Ord,
{
    type Score = O;

    fn score(&self, node: &I, item: &I) -> O {
        self(node, item)
    }
}

/// 32-bit integer scorer built on Thomas Wang's mix function.
///
/// Node and item ids are combined by wrapping addition and pushed through an
/// xorshift-multiply avalanche, so close-together ids still spread across the
/// full `u32` range. The transform is invertible: distinct inputs can never
/// collide, which keeps ties out of small integer key spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mix32;

impl Mix32 {
    /// The raw avalanche, exposed so callers can reproduce scores by hand.
    pub fn mix(mut a: u32) -> u32 {
        a = (a ^ 61) ^ (a >> 16);
        a = a.wrapping_add(a << 3);
        a ^= a >> 4;
        a = a.wrapping_mul(0x27d4_eb2d);
        a ^= a >> 15;
        a
    }
}

impl Scorer<u32> for Mix32 {
    type Score = u32;

    fn score(&self, node: &u32, item: &u32) -> u32 {
        Self::mix(node.wrapping_add(*item))
    }
}

/// 64-bit integer scorer built on the MurmurHash3 finalizer (fmix64).
///
/// The default strategy for `u64` node ids. Same shape as [`Mix32`] with a
/// wider state: invertible, so distinct combined inputs never tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mix64;

impl Mix64 {
    /// The raw finalizer, exposed so callers can reproduce scores by hand.
    pub fn mix(mut a: u64) -> u64 {
        a ^= a >> 33;
        a = a.wrapping_mul(0xff51_afd7_ed55_8ccd);
        a ^= a >> 33;
        a = a.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        a ^= a >> 33;
        a
    }
}

impl Scorer<u64> for Mix64 {
    type Score = u64;

    fn score(&self, node: &u64, item: &u64) -> u64 {
        Self::mix(node.wrapping_add(*item))
    }
}

/// Cryptographic scorer for byte-oriented identifiers.
///
/// Hashes `node` followed by `item` with BLAKE3 and takes the first eight
/// bytes of the digest as a little-endian `u64`. Use this when ids are
/// strings or content hashes rather than machine integers, or when score
/// prediction by an outside party matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3;

impl<I> Scorer<I> for Blake3
where
    I: AsRef<[u8]>,
{
    type Score = u64;

    fn score(&self, node: &I, item: &I) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(node.as_ref());
        hasher.update(item.as_ref());
        let digest = hasher.finalize();
        let bytes: [u8; 8] = digest.as_bytes()[..8].try_into().expect("8 bytes");
        u64::from_le_bytes(bytes)
    }
}
