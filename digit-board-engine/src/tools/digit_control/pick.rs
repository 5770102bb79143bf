use bevy::prelude::*;

use super::ray::ray_obb_intersection;
use crate::engine::digits::{DigitSegment, SegmentSize};

/// Resolves a cursor ray against every digit segment and returns the
/// owning digit of the nearest hit. Equal distances resolve to the first
/// candidate seen; a miss is the normal clicked-empty-space case.
pub fn resolve_digit_pick<'a>(
    ray: &Ray3d,
    segments: impl IntoIterator<Item = (&'a DigitSegment, &'a GlobalTransform, &'a SegmentSize)>,
) -> Option<u8> {
    let mut best: Option<(u8, f32)> = None;
    for (segment, transform, SegmentSize(size)) in segments {
        let Some(t) = ray_obb_intersection(ray, transform, *size) else {
            continue;
        };
        if t > 0.0 && best.map_or(true, |(_, best_t)| t < best_t) {
            best = Some((segment.owner, t));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_at(owner: u8, z: f32) -> (DigitSegment, GlobalTransform, SegmentSize) {
        (
            DigitSegment { owner },
            GlobalTransform::from(Transform::from_xyz(0.0, 0.0, z)),
            SegmentSize(Vec3::splat(1.0)),
        )
    }

    fn toward_neg_z() -> Ray3d {
        Ray3d::new(Vec3::new(0.0, 0.0, 10.0), Dir3::NEG_Z)
    }

    #[test]
    fn nearest_segment_wins() {
        let far = segment_at(3, -5.0);
        let near = segment_at(8, 2.0);
        let picked = resolve_digit_pick(
            &toward_neg_z(),
            [(&far.0, &far.1, &far.2), (&near.0, &near.1, &near.2)],
        );
        assert_eq!(picked, Some(8));
    }

    #[test]
    fn exact_ties_go_to_the_first_candidate() {
        let a = segment_at(1, 0.0);
        let b = segment_at(2, 0.0);
        let picked =
            resolve_digit_pick(&toward_neg_z(), [(&a.0, &a.1, &a.2), (&b.0, &b.1, &b.2)]);
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn empty_space_is_a_clean_miss() {
        let a = segment_at(4, 0.0);
        let miss = Ray3d::new(Vec3::new(50.0, 0.0, 10.0), Dir3::NEG_Z);
        assert_eq!(resolve_digit_pick(&miss, [(&a.0, &a.1, &a.2)]), None);
    }
}
