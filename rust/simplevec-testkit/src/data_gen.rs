//! Seeded data generators for container tests and benchmarks.

/// A single mutation applied to a vector under test.
///
/// Positions are raw random numbers; consumers reduce them modulo the current
/// length (or skip the op) so that every generated sequence is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecOp {
    PushBack(i64),
    PopBack,
    Insert(usize, i64),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
}

/// Generates `count` values in `-1000..1000` from the given seed.
pub fn random_values(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count).map(|_| rng.i64(-1000..1000)).collect()
}

/// Generates `count` mutations from the given seed.
///
/// Appends and inserts dominate so the generated sequences build up non-trivial
/// contents; `Clear` is rare.
pub fn random_ops(seed: u64, count: usize, max_len: usize) -> Vec<VecOp> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let max_len = max_len.max(1);
    (0..count)
        .map(|_| match rng.u8(0..100) {
            0..=34 => VecOp::PushBack(rng.i64(-1000..1000)),
            35..=49 => VecOp::PopBack,
            50..=69 => VecOp::Insert(rng.usize(..), rng.i64(-1000..1000)),
            70..=84 => VecOp::Erase(rng.usize(..)),
            85..=92 => VecOp::Resize(rng.usize(0..=max_len)),
            93..=98 => VecOp::Reserve(rng.usize(0..=max_len * 2)),
            _ => VecOp::Clear,
        })
        .collect()
}
