//! Portal trigger volumes and the actions they fire.

use crate::constants::{PORTAL_RADIUS, PORTAL_TUBE};
use glam::Vec3;

/// A navigable section of the site, each backed by a static page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    /// The static page fetched (and then navigated to) for this section.
    pub fn page(self) -> &'static str {
        match self {
            Self::About => "about.html",
            Self::Projects => "projects.html",
            Self::Contact => "contact.html",
        }
    }
}

/// What entering a portal does once its transition animation completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortalAction {
    /// Switch the scene from the intro phase to the menu phase.
    EnterMenu,
    /// Leave the scene for a section page.
    Navigate(Section),
}

/// Axis-aligned bounding box with inclusive containment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The box enclosing a z-facing ring (torus) mesh: the ring spans
    /// radius + tube in x/y and the tube thickness in z.
    pub fn from_ring(center: Vec3, radius: f32, tube: f32) -> Self {
        let half = Vec3::new(radius + tube, radius + tube, tube);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// A labeled ring in the scene whose bounding volume triggers a transition
/// when the player enters it. Created once at scene initialization and
/// immutable afterwards except for visibility.
#[derive(Clone, Debug)]
pub struct Portal {
    pub label: &'static str,
    pub center: Vec3,
    pub radius: f32,
    pub tube: f32,
    pub color: [f32; 3],
    pub action: PortalAction,
    pub visible: bool,
    bounds: Aabb,
}

impl Portal {
    pub fn new(label: &'static str, center: Vec3, color: [f32; 3], action: PortalAction) -> Self {
        let (radius, tube) = (PORTAL_RADIUS, PORTAL_TUBE);
        Self {
            label,
            center,
            radius,
            tube,
            color,
            action,
            visible: true,
            bounds: Aabb::from_ring(center, radius, tube),
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        self.bounds.contains(point)
    }
}
