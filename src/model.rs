use crate::turtle::{direction, displacement};
use bevy_math::primitives::{Cylinder, Sphere};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Ratio between a branch's length and its cylinder radius.
pub const BRANCH_RADIUS_RATIO: f32 = 0.2;

/// The complete, engine-agnostic output of a tree interpretation.
///
/// Both lists keep emission order. The rendering layer groups, names and
/// shades them; nothing here knows about appearance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeModel {
    /// Every branch emitted by `F`, in order.
    pub branches: Vec<BranchSegment>,

    /// Every leaf emitted by `L`, `D` or `S`, in order.
    pub leaves: Vec<LeafPlacement>,
}

impl TreeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_branch(&mut self, branch: BranchSegment) {
        self.branches.push(branch);
    }

    pub fn add_leaf(&mut self, leaf: LeafPlacement) {
        self.leaves.push(leaf);
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty() && self.leaves.is_empty()
    }

    /// Axis-aligned `(min, max)` over branch endpoints and leaf centres.
    ///
    /// Returns `None` for an empty model.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let points = self
            .branches
            .iter()
            .flat_map(|b| [b.start, b.end()])
            .chain(self.leaves.iter().map(|l| l.position));

        points.fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((min, max)) => Some((min.min(p), max.max(p))),
        })
    }
}

/// One straight piece of wood, grown by a single `F`.
///
/// Start, length and the two heading angles fully determine the cylinder;
/// everything else is derived.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchSegment {
    /// Base of the branch.
    pub start: Vec3,
    pub length: f32,
    /// Heading angle about the first axis, in degrees.
    pub angle_x: f32,
    /// Heading angle about the second axis, in degrees.
    pub angle_z: f32,
}

impl BranchSegment {
    /// Unit vector along the cylinder's long axis.
    pub fn direction(&self) -> Vec3 {
        direction(self.angle_x, self.angle_z)
    }

    /// Vector from `start` to `end`. This is exactly how far the turtle moved.
    pub fn displacement(&self) -> Vec3 {
        displacement(self.length, self.angle_x, self.angle_z)
    }

    pub fn end(&self) -> Vec3 {
        self.start + self.displacement()
    }

    /// Midpoint of the branch, where a centred cylinder must be placed.
    pub fn center(&self) -> Vec3 {
        self.start + self.displacement() * 0.5
    }

    pub fn radius(&self) -> f32 {
        self.length * BRANCH_RADIUS_RATIO
    }

    /// Rotation carrying a Y-aligned primitive onto [`direction`](Self::direction).
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Y, self.direction())
    }

    /// Y-aligned cylinder matching this branch; place it with
    /// [`center`](Self::center) and [`rotation`](Self::rotation).
    pub fn to_cylinder(&self) -> Cylinder {
        Cylinder::new(self.radius(), self.length)
    }
}

/// Leaf size classes, selected by the leaf symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeafSize {
    /// `L`
    Small,
    /// `D`
    Medium,
    /// `S`
    Large,
}

impl LeafSize {
    /// Sphere radius used for this size class.
    pub fn radius(self) -> f32 {
        match self {
            Self::Small => 0.5,
            Self::Medium => 1.0,
            Self::Large => 1.5,
        }
    }
}

/// A leaf attached at a point of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeafPlacement {
    pub position: Vec3,
    pub size: LeafSize,
}

impl LeafPlacement {
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }

    /// Sphere matching this leaf, centred on [`position`](Self::position).
    pub fn to_sphere(&self) -> Sphere {
        Sphere::new(self.radius())
    }
}
