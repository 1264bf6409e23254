//! Generation parameters.

use crate::ParamError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Style of structural enclosure around the gyroid core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnclosureMode {
    /// Hollow box with port openings on four faces.
    ///
    /// Channel A exits through the Z± faces, channel B through the X±
    /// faces; the Y± faces stay sealed.
    #[default]
    Shell,

    /// Open frame of 12 edge beams and 8 corner blocks.
    ///
    /// All six faces stay open, exposing both channels.
    Frame,
}

impl std::fmt::Display for EnclosureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shell => write!(f, "shell"),
            Self::Frame => write!(f, "frame"),
        }
    }
}

/// Configuration parameters for core generation.
///
/// Use the preset constructors [`CoreParams::shell`] / [`CoreParams::frame`]
/// or start from [`CoreParams::default`] and chain the `with_*` builders.
///
/// # Examples
///
/// ```
/// use gyrex_types::CoreParams;
///
/// // 100mm shell core with 3mm walls
/// let params = CoreParams::shell(100.0, 3.0);
///
/// // Open frame with custom gyroid period
/// let params = CoreParams::frame(80.0, 8.0)
///     .with_cell_size(20.0)
///     .with_wall_threshold(0.5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreParams {
    /// Cube edge length in mm.
    pub size_mm: f64,

    /// Target gyroid period in mm.
    ///
    /// Snapped during generation so a whole number of cells spans the
    /// cube; see the field builder for the snapping rule.
    pub cell_size_mm: f64,

    /// Gyroid isovalue τ (unitless) controlling wall thickness.
    ///
    /// The wall occupies `|G| <= τ`. Typical values are 0.10 to 0.80.
    pub wall_threshold: f64,

    /// Structural enclosure style.
    pub mode: EnclosureMode,

    /// Shell wall thickness in mm. Only used in [`EnclosureMode::Shell`].
    pub shell_thickness_mm: f64,

    /// Edge beam width in mm. Only used in [`EnclosureMode::Frame`].
    pub frame_beam_width_mm: f64,

    /// Voxel resolution per axis (the grid has `resolution + 1` samples).
    pub resolution: usize,

    /// Number of Taubin smoothing iterations applied to the mesh.
    pub smoothing_iterations: u32,

    /// Seal the port openings for a watertight outer shell.
    ///
    /// Only meaningful in [`EnclosureMode::Shell`]; with ports sealed the
    /// channels no longer exit the cube.
    pub seal_ports: bool,
}

impl Default for CoreParams {
    fn default() -> Self {
        Self {
            size_mm: 100.0,
            cell_size_mm: 25.0,
            wall_threshold: 0.35,
            mode: EnclosureMode::Shell,
            shell_thickness_mm: 3.0,
            frame_beam_width_mm: 10.0,
            resolution: 60,
            smoothing_iterations: 8,
            seal_ports: false,
        }
    }
}

impl CoreParams {
    /// Creates parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates parameters for a shell-enclosed core.
    ///
    /// # Arguments
    ///
    /// * `size_mm` - Cube edge length in mm
    /// * `shell_thickness_mm` - Shell wall thickness in mm
    ///
    /// # Examples
    ///
    /// ```
    /// use gyrex_types::{CoreParams, EnclosureMode};
    ///
    /// let params = CoreParams::shell(100.0, 3.0);
    /// assert_eq!(params.mode, EnclosureMode::Shell);
    /// ```
    #[must_use]
    pub fn shell(size_mm: f64, shell_thickness_mm: f64) -> Self {
        Self {
            size_mm,
            mode: EnclosureMode::Shell,
            shell_thickness_mm,
            ..Default::default()
        }
    }

    /// Creates parameters for a frame-enclosed core.
    ///
    /// # Arguments
    ///
    /// * `size_mm` - Cube edge length in mm
    /// * `frame_beam_width_mm` - Edge beam width in mm
    ///
    /// # Examples
    ///
    /// ```
    /// use gyrex_types::{CoreParams, EnclosureMode};
    ///
    /// let params = CoreParams::frame(100.0, 10.0);
    /// assert_eq!(params.mode, EnclosureMode::Frame);
    /// ```
    #[must_use]
    pub fn frame(size_mm: f64, frame_beam_width_mm: f64) -> Self {
        Self {
            size_mm,
            mode: EnclosureMode::Frame,
            frame_beam_width_mm,
            ..Default::default()
        }
    }

    /// Sets the cube edge length.
    #[must_use]
    pub const fn with_size(mut self, size_mm: f64) -> Self {
        self.size_mm = size_mm;
        self
    }

    /// Sets the target gyroid period.
    #[must_use]
    pub const fn with_cell_size(mut self, cell_size_mm: f64) -> Self {
        self.cell_size_mm = cell_size_mm;
        self
    }

    /// Sets the gyroid isovalue τ.
    #[must_use]
    pub const fn with_wall_threshold(mut self, tau: f64) -> Self {
        self.wall_threshold = tau;
        self
    }

    /// Sets the enclosure mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: EnclosureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the shell wall thickness.
    #[must_use]
    pub const fn with_shell_thickness(mut self, thickness_mm: f64) -> Self {
        self.shell_thickness_mm = thickness_mm;
        self
    }

    /// Sets the frame beam width.
    #[must_use]
    pub const fn with_beam_width(mut self, width_mm: f64) -> Self {
        self.frame_beam_width_mm = width_mm;
        self
    }

    /// Sets the voxel resolution per axis.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the number of Taubin smoothing iterations.
    #[must_use]
    pub const fn with_smoothing(mut self, iterations: u32) -> Self {
        self.smoothing_iterations = iterations;
        self
    }

    /// Enables or disables port sealing.
    #[must_use]
    pub const fn with_sealed_ports(mut self, seal: bool) -> Self {
        self.seal_ports = seal;
        self
    }

    /// Half the cube edge length in mm.
    #[must_use]
    pub fn half_size(&self) -> f64 {
        self.size_mm / 2.0
    }

    /// The voxel step in mm (`size / resolution`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision loss: resolutions stay far below 2^52 voxels per axis
    pub fn step_mm(&self) -> f64 {
        self.size_mm / self.resolution as f64
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] describing the first invalid parameter:
    /// non-positive size, cell size, or resolution; negative shell
    /// thickness; or a beam width outside `(0, size/2)`.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.size_mm <= 0.0 {
            return Err(ParamError::InvalidSize(self.size_mm));
        }

        if self.cell_size_mm <= 0.0 {
            return Err(ParamError::InvalidCellSize(self.cell_size_mm));
        }

        if self.resolution == 0 {
            return Err(ParamError::InvalidResolution);
        }

        match self.mode {
            EnclosureMode::Shell => {
                if self.shell_thickness_mm < 0.0 {
                    return Err(ParamError::InvalidShellThickness(self.shell_thickness_mm));
                }
            }
            EnclosureMode::Frame => {
                if self.frame_beam_width_mm <= 0.0
                    || self.frame_beam_width_mm >= self.size_mm / 2.0
                {
                    return Err(ParamError::InvalidBeamWidth {
                        width: self.frame_beam_width_mm,
                        size: self.size_mm,
                    });
                }
            }
        }

        Ok(())
    }
}
