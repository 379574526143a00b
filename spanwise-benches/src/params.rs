//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion benchmark id.

use std::fmt;

use spanwise_core::ClaimPolicy;

/// Parameters for an MST benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for an animation benchmark run.
#[derive(Clone, Debug)]
pub struct AnimationBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Claim policy used by the animator.
    pub policy: ClaimPolicy,
}

impl fmt::Display for AnimationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = match self.policy {
            ClaimPolicy::Atomic => "atomic",
            ClaimPolicy::CheckThenSet => "check_then_set",
        };
        write!(f, "n={},policy={policy}", self.point_count)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ClaimPolicy::Atomic, "n=10,policy=atomic")]
    #[case(ClaimPolicy::CheckThenSet, "n=10,policy=check_then_set")]
    fn animation_params_render_as_ids(#[case] policy: ClaimPolicy, #[case] expected: &str) {
        let params = AnimationBenchParams {
            point_count: 10,
            policy,
        };
        assert_eq!(params.to_string(), expected);
    }

    #[test]
    fn mst_params_render_as_ids() {
        assert_eq!(MstBenchParams { point_count: 500 }.to_string(), "n=500");
    }
}
