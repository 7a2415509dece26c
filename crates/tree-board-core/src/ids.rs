//! Id Generation
//!
//! New nodes and cards need ids unique across their whole snapshot.
//! The UI generates them from the clock plus randomness; tests use a counter.

/// Source of fresh entity ids
pub trait IdGenerator {
    /// Produce a new id starting with `prefix` (e.g. "node" or "card")
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Deterministic ids: `<prefix>-<n>`
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting at `start`, useful when sample data already uses low numbers
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{}-{}", prefix, self.next)
    }
}

/// Format `value` in base 36 (lowercase), as used in timestamp-random ids
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Compose `<prefix>-<millis>-<suffix>` from a timestamp and a random draw
pub fn timestamped_id(prefix: &str, millis: u64, random: u64) -> String {
    let suffix = to_base36(random);
    let suffix = &suffix[..suffix.len().min(9)];
    format!("{}-{}-{}", prefix, millis, suffix)
}
