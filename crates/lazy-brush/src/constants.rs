/// Catch radius used when none is configured.
pub const DEFAULT_RADIUS: f64 = lazy_brush_config::DEFAULT_RADIUS;

/// Catch circle is off unless requested.
pub const DEFAULT_ENABLED: bool = lazy_brush_config::DEFAULT_ENABLED;

/// Boundary check granularity (10 = one decimal place).
pub const BOUNDARY_PRECISION: f64 = 10.0;

/// Rotation applied to angles before moving, for a top-left origin.
pub const SCREEN_ANGLE_OFFSET: f64 = std::f64::consts::FRAC_PI_2;
