/// Outcome of the escape-time iteration for a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IterationResult {
    /// |z|² exceeded the bound (or stopped being finite) after the given
    /// 0-based step, always less than the iteration limit. The count is one
    /// lower than a 1-based step counter, so (2, 0) reports 1 rather than 2.
    Escaped(u32),
    /// The orbit stayed bounded for every allowed step; treated as inside the set.
    Bounded,
}

impl IterationResult {
    /// Reads the packed integer encoding where `max_iterations` marks a bounded
    /// orbit. Counts at or above the limit are treated as bounded.
    #[must_use]
    pub fn from_count(count: u32, max_iterations: u32) -> Self {
        if count >= max_iterations {
            Self::Bounded
        } else {
            Self::Escaped(count)
        }
    }

    #[must_use]
    pub fn count_or_max(self, max_iterations: u32) -> u32 {
        match self {
            Self::Escaped(count) => count,
            Self::Bounded => max_iterations,
        }
    }
}
