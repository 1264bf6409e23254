//! Voxel field storage.

/// A binary solid/void voxel field on a cubic grid.
///
/// The grid has `resolution + 1` sample points per axis, spanning
/// `[-size/2, +size/2]` in millimetres at a step of `size / resolution`.
/// Values are stored x-fastest: `i = x + y·n + z·n²` with
/// `n = resolution + 1`.
///
/// The polygoniser reads the field through [`SolidField::sample`], which
/// maps solid to `-1.0` (inside the material) and void to `+1.0`.
#[derive(Debug, Clone)]
pub struct SolidField {
    /// Solid flags, one byte per grid point.
    data: Vec<u8>,
    /// Voxels per axis (one less than the sample count).
    resolution: usize,
    /// Cube edge length in mm.
    size_mm: f64,
    /// Effective (snapped) gyroid period in mm.
    cell_size_mm: f64,
}

impl SolidField {
    /// Creates an all-void field.
    ///
    /// # Arguments
    ///
    /// * `resolution` - Voxels per axis; the grid has `resolution + 1`
    ///   sample points per axis
    /// * `size_mm` - Cube edge length in mm
    /// * `cell_size_mm` - Effective gyroid period in mm (already snapped)
    #[must_use]
    pub fn new(resolution: usize, size_mm: f64, cell_size_mm: f64) -> Self {
        let n = resolution + 1;
        Self {
            data: vec![0; n * n * n],
            resolution,
            size_mm,
            cell_size_mm,
        }
    }

    /// Voxels per axis.
    #[inline]
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Sample points per axis (`resolution + 1`).
    #[inline]
    #[must_use]
    pub fn points_per_axis(&self) -> usize {
        self.resolution + 1
    }

    /// Total number of grid points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cube edge length in mm.
    #[inline]
    #[must_use]
    pub fn size_mm(&self) -> f64 {
        self.size_mm
    }

    /// Effective (snapped) gyroid period in mm.
    #[inline]
    #[must_use]
    pub fn cell_size_mm(&self) -> f64 {
        self.cell_size_mm
    }

    /// Grid step in mm.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: resolutions stay far below 2^52 voxels per axis
    pub fn step_mm(&self) -> f64 {
        self.size_mm / self.resolution as f64
    }

    /// Half the cube edge length in mm.
    #[inline]
    #[must_use]
    pub fn half_size_mm(&self) -> f64 {
        self.size_mm / 2.0
    }

    /// Linear index of grid point `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        let n = self.resolution + 1;
        x + y * n + z * n * n
    }

    /// Linear stride along an axis (0 = X, 1 = Y, 2 = Z).
    #[inline]
    #[must_use]
    pub fn stride(&self, axis: usize) -> usize {
        let n = self.resolution + 1;
        match axis {
            0 => 1,
            1 => n,
            _ => n * n,
        }
    }

    /// Whether grid point `(x, y, z)` is solid.
    #[inline]
    #[must_use]
    pub fn is_solid(&self, x: usize, y: usize, z: usize) -> bool {
        self.data[self.index(x, y, z)] != 0
    }

    /// Marks grid point `(x, y, z)` solid or void.
    #[inline]
    pub fn set_solid(&mut self, x: usize, y: usize, z: usize, solid: bool) {
        let i = self.index(x, y, z);
        self.data[i] = u8::from(solid);
    }

    /// Signed sample at a linear index: `-1.0` solid, `+1.0` void.
    ///
    /// The sign convention feeds the polygoniser: material is the
    /// negative side of the isosurface.
    #[inline]
    #[must_use]
    pub fn sample(&self, i: usize) -> f32 {
        if self.data[i] != 0 { -1.0 } else { 1.0 }
    }

    /// Forces the outermost grid shell to void.
    ///
    /// The polygoniser only creates surface at solid/void transitions
    /// *inside* the grid; a solid sample on the extreme row has no
    /// further neighbour and would leave the enclosure open there.
    /// Voiding one layer closes every outer face of the enclosure and
    /// caps the gyroid wall at the cube boundary.
    pub fn void_boundary(&mut self) {
        let r = self.resolution;
        let n = r + 1;

        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    if x == 0 || x == r || y == 0 || y == r || z == 0 || z == r {
                        let i = self.index(x, y, z);
                        self.data[i] = 0;
                    }
                }
            }
        }
    }

    /// Millimetre coordinate of grid index `i` along any axis.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: resolutions stay far below 2^52 voxels per axis
    pub fn axis_mm(&self, i: usize) -> f64 {
        (i as f64).mul_add(self.step_mm(), -self.half_size_mm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_field_is_void() {
        let field = SolidField::new(4, 10.0, 10.0);
        assert_eq!(field.points_per_axis(), 5);
        assert_eq!(field.len(), 125);
        assert!(!field.is_solid(2, 2, 2));
    }

    #[test]
    fn set_and_get() {
        let mut field = SolidField::new(4, 10.0, 10.0);
        field.set_solid(1, 2, 3, true);
        assert!(field.is_solid(1, 2, 3));
        assert!(!field.is_solid(3, 2, 1));

        field.set_solid(1, 2, 3, false);
        assert!(!field.is_solid(1, 2, 3));
    }

    #[test]
    fn sample_sign_convention() {
        let mut field = SolidField::new(2, 10.0, 10.0);
        field.set_solid(1, 1, 1, true);
        let solid_idx = field.index(1, 1, 1);
        let void_idx = field.index(0, 1, 1);
        assert_relative_eq!(field.sample(solid_idx), -1.0);
        assert_relative_eq!(field.sample(void_idx), 1.0);
    }

    #[test]
    fn index_is_x_fastest() {
        let field = SolidField::new(3, 10.0, 10.0);
        assert_eq!(field.index(1, 0, 0), 1);
        assert_eq!(field.index(0, 1, 0), 4);
        assert_eq!(field.index(0, 0, 1), 16);
        assert_eq!(field.stride(0), 1);
        assert_eq!(field.stride(1), 4);
        assert_eq!(field.stride(2), 16);
    }

    #[test]
    fn void_boundary_clears_extremes_only() {
        let mut field = SolidField::new(4, 10.0, 10.0);
        let n = field.points_per_axis();
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    field.set_solid(x, y, z, true);
                }
            }
        }

        field.void_boundary();

        assert!(!field.is_solid(0, 2, 2));
        assert!(!field.is_solid(4, 2, 2));
        assert!(!field.is_solid(2, 0, 2));
        assert!(!field.is_solid(2, 2, 4));
        assert!(field.is_solid(2, 2, 2));
        assert!(field.is_solid(1, 3, 1));
    }

    #[test]
    fn axis_positions_span_the_cube() {
        let field = SolidField::new(4, 100.0, 25.0);
        assert_relative_eq!(field.axis_mm(0), -50.0);
        assert_relative_eq!(field.axis_mm(2), 0.0);
        assert_relative_eq!(field.axis_mm(4), 50.0);
        assert_relative_eq!(field.step_mm(), 25.0);
    }
}
