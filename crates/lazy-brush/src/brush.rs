//! Lazy brush: a pointer and a brush joined by a catch radius
//!
//! The pointer follows raw input. The brush only moves once the pointer
//! leaves the catch circle around it, and then only far enough to sit back
//! on the circle's edge. This turns jittery input into smooth strokes.

use lazy_brush_config::BrushConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{BOUNDARY_PRECISION, DEFAULT_ENABLED, DEFAULT_RADIUS};
use crate::point::{Point, effective_friction};
use crate::validation::{ValidationError, validate_point, validate_radius};

/// Construction options for [`LazyBrush`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyBrushOptions {
    /// Catch radius in coordinate units
    pub radius: f64,
    /// Whether the catch circle is active
    pub enabled: bool,
    /// Where pointer and brush start
    pub initial_point: Point,
}

impl Default for LazyBrushOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            enabled: DEFAULT_ENABLED,
            initial_point: Point::ORIGIN,
        }
    }
}

impl LazyBrushOptions {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_initial_point(mut self, point: impl Into<Point>) -> Self {
        self.initial_point = point.into();
        self
    }

    /// Check that radius and initial point are usable
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_radius(self.radius)?;
        validate_point(&self.initial_point)
    }
}

impl From<&BrushConfig> for LazyBrushOptions {
    fn from(config: &BrushConfig) -> Self {
        Self {
            radius: config.radius,
            enabled: config.enabled,
            initial_point: config.initial_point.into(),
        }
    }
}

/// Per-call options for [`LazyBrush::update`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateOptions {
    /// Move pointer and brush together, collapsing the catch circle
    pub both: bool,
    /// Fraction of the catch-up distance withheld, valid in (0, 1)
    pub friction: Option<f64>,
}

impl UpdateOptions {
    /// Options that snap the brush onto the pointer
    pub fn both() -> Self {
        Self {
            both: true,
            friction: None,
        }
    }

    pub fn with_friction(friction: f64) -> Self {
        Self {
            both: false,
            friction: Some(friction),
        }
    }

    /// Whether these options force an update when the pointer has not moved
    fn forces_update(&self) -> bool {
        self.both || self.friction.is_some_and(|f| f != 0.0 && !f.is_nan())
    }
}

/// Pointer/brush pair with a catch radius
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct LazyBrush {
    /// Whether the catch circle constraint is active
    enabled: bool,
    /// Whether the brush moved in the last update
    has_moved: bool,
    radius: f64,
    /// Last raw input position
    pointer: Point,
    /// Smoothed output position
    brush: Point,
    /// Angle from brush towards pointer in the last update
    angle: f64,
    /// Distance between pointer and brush in the last update
    distance: f64,
}

impl Default for LazyBrush {
    fn default() -> Self {
        Self::new(LazyBrushOptions::default())
    }
}

impl LazyBrush {
    /// Create a brush with pointer and brush at the initial point
    pub fn new(options: LazyBrushOptions) -> Self {
        Self {
            enabled: options.enabled,
            has_moved: false,
            radius: options.radius,
            pointer: options.initial_point,
            brush: options.initial_point,
            angle: 0.0,
            distance: 0.0,
        }
    }

    /// Like [`LazyBrush::new`] but rejects negative or non-finite input
    pub fn try_new(options: LazyBrushOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn from_config(config: &BrushConfig) -> Result<Self, ValidationError> {
        Self::try_new(config.into())
    }

    pub fn enable(&mut self) {
        debug!("LazyBrush: enabled (radius={:.1})", self.radius);
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        debug!("LazyBrush: disabled");
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Change the catch radius. The brush stays put until the next update.
    pub fn set_radius(&mut self, radius: f64) {
        debug!("LazyBrush: radius {:.1} -> {:.1}", self.radius, radius);
        self.radius = radius;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Snapshot of the brush position
    pub fn brush_coordinates(&self) -> Point {
        self.brush
    }

    /// Snapshot of the pointer position
    pub fn pointer_coordinates(&self) -> Point {
        self.pointer
    }

    pub fn brush(&self) -> &Point {
        &self.brush
    }

    pub fn pointer(&self) -> &Point {
        &self.pointer
    }

    /// Angle in radians between pointer and brush as of the last update
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Distance between pointer and brush as of the last update
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn brush_has_moved(&self) -> bool {
        self.has_moved
    }

    /// Feed a new pointer position and recompute the brush.
    ///
    /// Returns `false` without touching any state when the pointer did not
    /// move, unless `both` or a nonzero friction forces the update.
    pub fn update(&mut self, new_pointer: Point, options: UpdateOptions) -> bool {
        self.has_moved = false;

        if self.pointer.equals_to(&new_pointer) && !options.forces_update() {
            return false;
        }

        self.pointer.update(new_pointer);

        if options.both {
            self.has_moved = true;
            self.brush.update(new_pointer);
            return true;
        }

        if self.enabled {
            self.distance = self.pointer.distance_to(&self.brush);
            self.angle = self.pointer.angle_to(&self.brush);

            // Rounded to one decimal so the brush does not jitter on the edge
            let excess = self.distance - self.radius;
            let is_outside = (excess * BOUNDARY_PRECISION).round() / BOUNDARY_PRECISION > 0.0;

            if is_outside {
                self.brush
                    .move_by_angle(self.angle, excess, effective_friction(options.friction));
                self.has_moved = true;
                trace!(
                    "LazyBrush::update: pointer=({:.2}, {:.2}) brush=({:.2}, {:.2}) distance={:.2} angle={:.3}",
                    self.pointer.x, self.pointer.y, self.brush.x, self.brush.y, self.distance, self.angle
                );
            }
        } else {
            self.distance = 0.0;
            self.angle = 0.0;
            self.has_moved = !self.brush.equals_to(&new_pointer);
            self.brush.update(new_pointer);
        }

        true
    }
}
