/// Vertical bounds of the samples currently on screen.
///
/// The range starts (and resets to) an unset state where `min > max`; it only
/// becomes meaningful after a rescan over a non-empty buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub fn unset() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
        }
    }

    pub fn is_set(&self) -> bool {
        self.min <= self.max
    }

    pub fn span(&self) -> i32 {
        self.max - self.min
    }

    /// Recompute the bounds from scratch over the full sample set. No
    /// incremental tracking: eviction can drop the previous extremum, so the
    /// whole buffer is scanned on every mutation.
    pub fn rescan<'a>(samples: impl Iterator<Item = &'a i32>) -> Self {
        let mut range = Self::unset();
        for &v in samples {
            range.min = range.min.min(v);
            range.max = range.max.max(v);
        }
        range
    }

    /// Enforce a minimum span so near-flat signals stay visible. When the
    /// natural span falls short, the full deficit is added on both sides,
    /// which doubles the floor instead of exactly meeting it. That widening
    /// is the established display policy; keep it bit-for-bit.
    pub fn apply_floor(&mut self, min_span: i32) {
        let span = self.span();
        if span < min_span {
            let delta = min_span - span;
            self.min -= delta;
            self.max += delta;
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescan_finds_bounds() {
        let samples = [3, -7, 12, 0];
        let range = ValueRange::rescan(samples.iter());
        assert_eq!(range.min, -7);
        assert_eq!(range.max, 12);
    }

    #[test]
    fn rescan_of_nothing_stays_unset() {
        let empty: [i32; 0] = [];
        let range = ValueRange::rescan(empty.iter());
        assert!(!range.is_set());
    }

    #[test]
    fn floor_widens_by_the_full_deficit_on_both_sides() {
        // Natural span 4, floor 10: deficit 6 added to each bound, so the
        // resulting span is 2 * 10 - 4 = 16, not 10.
        let mut range = ValueRange { min: 10, max: 14 };
        range.apply_floor(10);
        assert_eq!(range.min, 4);
        assert_eq!(range.max, 20);
        assert_eq!(range.span(), 16);
    }

    #[test]
    fn floor_leaves_wide_ranges_alone() {
        let mut range = ValueRange { min: 0, max: 25 };
        range.apply_floor(10);
        assert_eq!(range, ValueRange { min: 0, max: 25 });
    }
}
