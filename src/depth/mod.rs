//! Back-to-front depth ordering for painter's-algorithm compositing.
//!
//! A stable bucket pass over a fixed z range does the bulk of the work in
//! O(N). An insertion pass then fixes whatever is still out of order inside
//! a bucket; the input is nearly sorted at that point, so it costs
//! O(N + inversions) and the final order is exact.

use crate::constants::depth::DEPTH_BUCKETS;
use crate::frame::PointTransform;

/// Reusable counters for the bucket pass
#[derive(Debug, Clone)]
pub struct DepthSortScratch {
    pub bucket_count: usize,
    /// Half-width of the z range the buckets span
    pub depth_range: f32,
    pub offsets: Vec<usize>,
}

pub fn create_depth_scratch(depth_range: f32) -> DepthSortScratch {
    DepthSortScratch {
        bucket_count: DEPTH_BUCKETS,
        depth_range,
        offsets: vec![0; DEPTH_BUCKETS + 1],
    }
}

/// Bucket for a depth; bucket 0 holds the farthest (largest z) points.
/// Values outside the range land in the end buckets.
#[inline]
pub fn depth_bucket(z: f32, depth_range: f32, bucket_count: usize) -> usize {
    let last = bucket_count.saturating_sub(1);
    if !z.is_finite() || depth_range <= 0.0 {
        return 0;
    }
    // 0 at z = +range, 1 at z = -range
    let t = ((depth_range - z) / (2.0 * depth_range)).clamp(0.0, 1.0);
    ((t * bucket_count as f32) as usize).min(last)
}

/// Write `input` into `out` ordered back to front (larger z first)
pub fn sort_back_to_front(
    input: &[PointTransform],
    scratch: &mut DepthSortScratch,
    out: &mut Vec<PointTransform>,
) {
    out.clear();
    if input.is_empty() {
        return;
    }

    let buckets = scratch.bucket_count.max(1);
    scratch.offsets.clear();
    scratch.offsets.resize(buckets + 1, 0);

    for t in input {
        scratch.offsets[depth_bucket(t.z, scratch.depth_range, buckets) + 1] += 1;
    }
    for b in 0..buckets {
        scratch.offsets[b + 1] += scratch.offsets[b];
    }

    out.resize(input.len(), PointTransform::default());
    for t in input {
        let bucket = depth_bucket(t.z, scratch.depth_range, buckets);
        out[scratch.offsets[bucket]] = *t;
        scratch.offsets[bucket] += 1;
    }

    // Fix residual intra-bucket inversions; stable for equal z
    for i in 1..out.len() {
        let mut j = i;
        while j > 0 && out[j - 1].z < out[j].z {
            out.swap(j - 1, j);
            j -= 1;
        }
    }
}
