use rapier2d::prelude::*;

const GRAVITY_Y: Real = -9.8;
const GROUND_Y: Real = -10.0;
const GROUND_HALF_EXTENTS: (Real, Real) = (50.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsReport {
    pub gravity_y: f32,
    pub body_count: usize,
    pub collider_count: usize,
    pub ground_y: f32,
}

/// Builds a world holding a single fixed ground box. The world is not stepped.
pub fn build_ground_world() -> PhysicsReport {
    let gravity = vector![0.0, GRAVITY_Y];
    let mut bodies = RigidBodySet::new();
    let mut colliders = ColliderSet::new();

    let ground = RigidBodyBuilder::fixed()
        .translation(vector![0.0, GROUND_Y])
        .build();
    let ground_handle = bodies.insert(ground);
    let (half_width, half_height) = GROUND_HALF_EXTENTS;
    let ground_box = ColliderBuilder::cuboid(half_width, half_height).build();
    colliders.insert_with_parent(ground_box, ground_handle, &mut bodies);

    let ground_y = bodies
        .get(ground_handle)
        .map(|body| body.translation().y)
        .unwrap_or(GROUND_Y);

    PhysicsReport {
        gravity_y: gravity.y,
        body_count: bodies.len(),
        collider_count: colliders.len(),
        ground_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_world_has_one_body_and_collider() {
        let report = build_ground_world();

        assert_eq!(report.body_count, 1);
        assert_eq!(report.collider_count, 1);
        assert!((report.ground_y - GROUND_Y).abs() < f32::EPSILON);
        assert!((report.gravity_y - GRAVITY_Y).abs() < f32::EPSILON);
    }
}
