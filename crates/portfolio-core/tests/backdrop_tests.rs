// Tests for the star scatter and the about-page cursor-follow math.

use glam::{Vec2, Vec3};
use portfolio_core::{
    cursor, starfield, Camera, CursorFollower, CURSOR_PLANE_Z, STAR_COUNT, STAR_SPREAD,
};
use std::time::Duration;

const FRAME: Duration = Duration::from_nanos(16_666_667);

#[test]
fn star_scatter_is_deterministic_per_seed() {
    let a = starfield::scatter(STAR_COUNT, STAR_SPREAD, 42);
    let b = starfield::scatter(STAR_COUNT, STAR_SPREAD, 42);
    let c = starfield::scatter(STAR_COUNT, STAR_SPREAD, 43);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn star_scatter_stays_within_the_spread() {
    let stars = starfield::scatter(STAR_COUNT, STAR_SPREAD, 7);
    assert_eq!(stars.len(), STAR_COUNT);
    let half = STAR_SPREAD / 2.0;
    for star in stars {
        assert!(star.x.abs() <= half && star.y.abs() <= half && star.z.abs() <= half);
    }
}

#[test]
fn screen_center_maps_to_ndc_origin() {
    let ndc = cursor::ndc_from_client(400.0, 300.0, 800.0, 600.0);
    assert!(ndc.length() < 1e-6);
    let corner = cursor::ndc_from_client(0.0, 0.0, 800.0, 600.0);
    assert!((corner - Vec2::new(-1.0, 1.0)).length() < 1e-6);
}

#[test]
fn center_ray_hits_the_cursor_plane_on_axis() {
    let camera = Camera::scene_default(800.0 / 600.0);
    let (origin, dir) = cursor::screen_ray(&camera, Vec2::ZERO);
    let hit = cursor::ray_plane_z(origin, dir, CURSOR_PLANE_Z).expect("hit");
    assert!(hit.x.abs() < 1e-3 && hit.y.abs() < 1e-3);
    assert!((hit.z - CURSOR_PLANE_Z).abs() < 1e-3);
}

#[test]
fn parallel_ray_misses_the_plane() {
    let hit = cursor::ray_plane_z(Vec3::ZERO, Vec3::X, CURSOR_PLANE_Z);
    assert!(hit.is_none());
}

#[test]
fn follower_turns_toward_the_tracked_point_and_stays_unit() {
    let mut follower = CursorFollower::new(Vec3::ZERO);
    let point = Vec3::new(10.0, 0.0, -10.0);
    let target_dir = point.normalize();
    for _ in 0..240 {
        follower.track(point, FRAME);
        assert!((follower.facing.length() - 1.0).abs() < 1e-4);
    }
    // After a few seconds of tracking the facing has swung onto the target.
    assert!(
        follower.facing.dot(target_dir) > 0.99,
        "facing {:?}",
        follower.facing
    );
    assert!((follower.look_target() - (Vec3::ZERO + follower.facing)).length() < 1e-6);
}
