use bevy::prelude::*;

/// Ray against an oriented box: the ray is taken into the box's local
/// frame through the inverse transform, then slab-tested against the half
/// extents. Returns the entry distance, or the exit distance when the ray
/// starts inside.
pub fn ray_obb_intersection(ray: &Ray3d, transform: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inverse = transform.compute_matrix().inverse();
    let origin = inverse.transform_point3(ray.origin);
    let direction = inverse.transform_vector3(ray.direction.as_vec3());
    let half = size * 0.5;

    // recip() turns axis-parallel components into infinities, which the
    // slab comparisons handle without branching.
    let inv_dir = direction.recip();
    let t_lower = (-half - origin) * inv_dir;
    let t_upper = (half - origin) * inv_dir;
    let t_near = t_lower.min(t_upper).max_element();
    let t_far = t_lower.max(t_upper).min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Ray against an infinite plane. Near-parallel rays and hits behind the
/// origin count as misses.
pub fn ray_plane_intersection(ray: &Ray3d, plane_origin: Vec3, plane_normal: Vec3) -> Option<Vec3> {
    let direction = ray.direction.as_vec3();
    let denom = plane_normal.dot(direction);
    if denom.abs() < 1e-4 {
        return None;
    }
    let t = plane_normal.dot(plane_origin - ray.origin) / denom;
    if t <= 0.0 {
        return None;
    }
    Some(ray.origin + direction * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, direction: Vec3) -> Ray3d {
        Ray3d::new(origin, Dir3::new(direction).unwrap())
    }

    #[test]
    fn hits_an_axis_aligned_box_head_on() {
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = ray_obb_intersection(&r, &GlobalTransform::IDENTITY, Vec3::splat(2.0));
        assert!((t.unwrap() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn misses_a_box_off_to_the_side() {
        let r = ray(Vec3::new(5.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(ray_obb_intersection(&r, &GlobalTransform::IDENTITY, Vec3::splat(2.0)).is_none());
    }

    #[test]
    fn box_behind_the_ray_is_a_miss() {
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(ray_obb_intersection(&r, &GlobalTransform::IDENTITY, Vec3::splat(2.0)).is_none());
    }

    #[test]
    fn respects_the_box_transform() {
        let transform = GlobalTransform::from(Transform::from_xyz(10.0, 0.0, 0.0));
        let r = ray(Vec3::new(10.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(ray_obb_intersection(&r, &transform, Vec3::splat(1.0)).is_some());
        let r_origin = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(ray_obb_intersection(&r_origin, &transform, Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn plane_intersection_lands_on_the_plane() {
        let r = ray(Vec3::new(1.0, 5.0, 1.0), Vec3::NEG_Y);
        let hit = ray_plane_intersection(&r, Vec3::new(0.0, 0.25, 0.0), Vec3::Y).unwrap();
        assert!((hit.y - 0.25).abs() < 1e-4);
        assert!((hit.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn parallel_ray_misses_the_plane() {
        let r = ray(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        assert!(ray_plane_intersection(&r, Vec3::ZERO, Vec3::Y).is_none());
    }
}
