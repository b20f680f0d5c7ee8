// Tests for portal bounding volumes and section mapping.

use glam::Vec3;
use portfolio_core::{Aabb, Portal, PortalAction, Section, PORTAL_RADIUS, PORTAL_TUBE};

#[test]
fn ring_bounds_span_radius_plus_tube_in_plane_and_tube_in_depth() {
    let center = Vec3::new(10.0, -5.0, -20.0);
    let bounds = Aabb::from_ring(center, 10.0, 3.0);
    assert_eq!(bounds.min, Vec3::new(-3.0, -18.0, -23.0));
    assert_eq!(bounds.max, Vec3::new(23.0, 8.0, -17.0));
}

#[test]
fn containment_is_inclusive_of_the_faces() {
    let bounds = Aabb::from_ring(Vec3::ZERO, 10.0, 3.0);
    assert!(bounds.contains(Vec3::ZERO));
    assert!(bounds.contains(Vec3::new(13.0, 0.0, 0.0))); // on the +x face
    assert!(bounds.contains(Vec3::new(0.0, -13.0, 3.0))); // corner-ish
    assert!(!bounds.contains(Vec3::new(13.01, 0.0, 0.0)));
    assert!(!bounds.contains(Vec3::new(0.0, 0.0, 3.01)));
    assert!(!bounds.contains(Vec3::new(0.0, 0.0, -3.01)));
}

#[test]
fn portal_derives_bounds_from_its_ring() {
    let portal = Portal::new(
        "Contact",
        Vec3::new(30.0, 0.0, -30.0),
        [0.0, 0.0, 1.0],
        PortalAction::Navigate(Section::Contact),
    );
    assert_eq!(portal.radius, PORTAL_RADIUS);
    assert_eq!(portal.tube, PORTAL_TUBE);
    assert!(portal.contains(Vec3::new(30.0, 0.0, -30.0)));
    assert!(portal.contains(Vec3::new(30.0 + PORTAL_RADIUS, 0.0, -30.0)));
    assert!(!portal.contains(Vec3::new(30.0, 0.0, -30.0 + PORTAL_TUBE + 0.1)));
}

#[test]
fn sections_map_to_their_pages() {
    assert_eq!(Section::About.page(), "about.html");
    assert_eq!(Section::Projects.page(), "projects.html");
    assert_eq!(Section::Contact.page(), "contact.html");
}
