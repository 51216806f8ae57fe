//! Boundary to the geometry kernel that owns the aircraft parts.
//!
//! The morphing code never builds geometry itself. It looks parts up by uid,
//! reads and writes section and wing parameters through these traits and asks
//! the kernel for bounding boxes and lofts.

pub mod wireframe;

use std::path::Path;

use nalgebra::{Point3, Vector3};

use crate::{bounding_box::BoundingBox, misc::FloatingPoint};

/// A single profile of a part, positioned in the part's frame.
pub trait CrossSection<T: FloatingPoint> {
    fn center(&self) -> Point3<T>;
    fn set_center(&mut self, center: Point3<T>);
    fn width(&self) -> T;
    fn set_width(&mut self, width: T);
    fn height(&self) -> T;
    fn set_height(&mut self, height: T);
    /// Enclosed area of the profile
    fn area(&self) -> T;
    /// Scale the profile so that it encloses `area`.
    fn set_area(&mut self, area: T);
    /// Perimeter of the profile
    fn circumference(&self) -> T;
    /// Euler angles in degrees
    fn rotation(&self) -> Vector3<T>;
    fn set_rotation(&mut self, rotation: Vector3<T>);
}

/// A part built by lofting an ordered list of cross sections.
pub trait SectionedPart<T: FloatingPoint> {
    type Section: CrossSection<T>;
    type Loft;

    fn uid(&self) -> &str;
    fn section_count(&self) -> usize;
    /// Section at the 0-based `index`, root (or nose) first.
    fn section(&self, index: usize) -> Option<&Self::Section>;
    fn section_mut(&mut self, index: usize) -> Option<&mut Self::Section>;
    /// Bounding box of the part's loft in world coordinates.
    fn bounding_box(&self) -> anyhow::Result<BoundingBox<T>>;
    /// Build the loft from the current parameters.
    fn loft(&self) -> anyhow::Result<Self::Loft>;
}

/// A lifting surface: main wing or tailplane.
pub trait WingPart<T: FloatingPoint>: SectionedPart<T> {
    fn root_leposition(&self) -> Point3<T>;
    fn set_root_leposition(&mut self, position: Point3<T>);
    /// Scale the whole wing by `factor` around its root.
    fn scale(&mut self, factor: T) -> anyhow::Result<()>;
    /// Stretch the wing to `half_span`, shrinking the chords to keep the planform area.
    fn set_half_span_keep_area(&mut self, half_span: T) -> anyhow::Result<()>;
    /// Sweep angle in degrees
    fn set_sweep(&mut self, sweep: T) -> anyhow::Result<()>;
    /// Dihedral angle in degrees
    fn set_dihedral(&mut self, dihedral: T) -> anyhow::Result<()>;
    /// Euler angles of the whole wing in degrees
    fn set_rotation(&mut self, rotation: Vector3<T>);
    /// Mirror the wing in the x-z plane.
    fn set_symmetric(&mut self, symmetric: bool);
    /// Loft of the mirrored half, `None` for a wing without symmetry.
    fn mirrored_loft(&self) -> anyhow::Result<Option<Self::Loft>>;
}

/// The aircraft configuration owned by the geometry kernel.
pub trait AircraftModel<T: FloatingPoint> {
    type Loft;
    type Fuselage: SectionedPart<T, Loft = Self::Loft>;
    type Wing: WingPart<T, Loft = Self::Loft>;

    /// Identifier of the configuration root
    fn uid(&self) -> &str;
    fn fuselage(&self, uid: &str) -> Option<&Self::Fuselage>;
    fn fuselage_mut(&mut self, uid: &str) -> Option<&mut Self::Fuselage>;
    fn wing(&self, uid: &str) -> Option<&Self::Wing>;
    fn wing_mut(&mut self, uid: &str) -> Option<&mut Self::Wing>;
    /// Add a fuselage with `section_count` default sections.
    fn create_fuselage(
        &mut self,
        uid: &str,
        section_count: usize,
    ) -> anyhow::Result<&mut Self::Fuselage>;
    /// Add a wing with `section_count` default sections.
    fn create_wing(&mut self, uid: &str, section_count: usize) -> anyhow::Result<&mut Self::Wing>;
    /// Persist the configuration in the kernel's native document format.
    fn write_configuration(&self, path: &Path) -> anyhow::Result<()>;
}
