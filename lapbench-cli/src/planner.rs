//! Doubling Planner
//!
//! Produces the sequence of problem sizes for a doubling experiment:
//! `initial_size, 2·initial_size, … , initial_size·2^doublings`.

/// Problem-size plan for a doubling run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoublingPlan {
    /// First problem size
    pub initial_size: usize,
    /// Number of doublings after the first size
    pub doublings: u32,
}

impl DoublingPlan {
    /// Create a plan
    pub fn new(initial_size: usize, doublings: u32) -> Self {
        Self {
            initial_size,
            doublings,
        }
    }

    /// Problem sizes in increasing order.
    ///
    /// A zero initial size yields nothing; sizes that would overflow `usize`
    /// are dropped.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..=self.doublings)
            .map_while(move |k| {
                let factor = 1usize.checked_shl(k)?;
                self.initial_size.checked_mul(factor)
            })
            .filter(|&size| size > 0)
    }

    /// Number of sizes in the plan
    pub fn len(&self) -> usize {
        self.sizes().count()
    }

    /// Whether the plan has no sizes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_doubling_sizes() {
        let plan = DoublingPlan::new(200, 6);
        let sizes: Vec<_> = plan.sizes().collect();
        assert_eq!(sizes, vec![200, 400, 800, 1600, 3200, 6400, 12800]);
        assert_eq!(plan.len(), 7);
    }

    #[test]
    fn test_no_doublings() {
        let sizes: Vec<_> = DoublingPlan::new(50, 0).sizes().collect();
        assert_eq!(sizes, vec![50]);
    }

    #[test]
    fn test_zero_initial_size() {
        let plan = DoublingPlan::new(0, 4);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_overflow_stops_sequence() {
        let plan = DoublingPlan::new(usize::MAX / 2 + 1, 3);
        let sizes: Vec<_> = plan.sizes().collect();
        assert_eq!(sizes, vec![usize::MAX / 2 + 1]);
    }
}
