//! Stroke capture on top of the lazy brush
//!
//! Drives a [`LazyBrush`] through a press/move/release lifecycle and records
//! the smoothed brush positions:
//! - `begin` collapses the catch circle onto the press position, so the
//!   pointer can pull away from a co-located brush
//! - `move_to` feeds pointer samples and records the brush whenever it moves
//! - `end` snaps the pointer back onto the brush and hands out the path
//!
//! Only geometry is produced here. Drawing the path is up to the caller.

mod path;

use lazy_brush_config::BrushConfig;
use thiserror::Error;
use tracing::debug;

use crate::brush::{LazyBrush, UpdateOptions};
use crate::point::Point;
use crate::validation::{ValidationError, validate_friction};

pub use path::{PathSegment, StrokePath, midpoint};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrokeError {
    #[error("Stroke not started - call begin() first")]
    NotStarted,
    #[error("Stroke already started - call end() or cancel() first")]
    AlreadyStarted,
}

/// Lazy brush plus the path of the stroke in progress
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Resource))]
pub struct LazyStroke {
    brush: LazyBrush,
    /// Friction applied to every pointer sample
    friction: Option<f64>,
    /// Path of the active stroke (None if not stroking)
    current: Option<StrokePath>,
}

impl LazyStroke {
    pub fn new(brush: LazyBrush) -> Self {
        Self {
            brush,
            friction: None,
            current: None,
        }
    }

    /// Build brush and stroke friction from a config
    pub fn from_config(config: &BrushConfig) -> Result<Self, ValidationError> {
        validate_friction(config.friction)?;
        Ok(Self::new(LazyBrush::from_config(config)?).with_friction(config.friction))
    }

    pub fn with_friction(mut self, friction: Option<f64>) -> Self {
        self.friction = friction;
        self
    }

    pub fn friction(&self) -> Option<f64> {
        self.friction
    }

    pub fn set_friction(&mut self, friction: Option<f64>) {
        self.friction = friction;
    }

    pub fn brush(&self) -> &LazyBrush {
        &self.brush
    }

    /// Mutable access for enable/disable and radius changes
    pub fn brush_mut(&mut self) -> &mut LazyBrush {
        &mut self.brush
    }

    pub fn is_stroking(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_path(&self) -> Option<&StrokePath> {
        self.current.as_ref()
    }

    /// Start a stroke at `point`
    pub fn begin(&mut self, point: Point) -> Result<(), StrokeError> {
        if self.current.is_some() {
            return Err(StrokeError::AlreadyStarted);
        }

        self.brush.update(point, UpdateOptions::both());

        let mut path = StrokePath::new();
        path.push(self.brush.brush_coordinates());
        self.current = Some(path);

        debug!("LazyStroke::begin at ({:.1}, {:.1})", point.x, point.y);
        Ok(())
    }

    /// Feed a pointer sample into the active stroke.
    ///
    /// Returns whether the brush moved (and a point was recorded).
    pub fn move_to(&mut self, point: Point) -> Result<bool, StrokeError> {
        let options = self.update_options();
        let Some(path) = self.current.as_mut() else {
            return Err(StrokeError::NotStarted);
        };

        self.brush.update(point, options);
        let moved = self.brush.brush_has_moved();
        if moved {
            path.push(self.brush.brush_coordinates());
        }
        Ok(moved)
    }

    /// Feed a pointer sample without recording anything
    pub fn hover(&mut self, point: Point) -> bool {
        self.brush.update(point, self.update_options());
        self.brush.brush_has_moved()
    }

    /// Finish the active stroke and return its path
    pub fn end(&mut self) -> Result<StrokePath, StrokeError> {
        let path = self.current.take().ok_or(StrokeError::NotStarted)?;

        // Pointer rejoins the brush so the next press starts collapsed
        let brush = self.brush.brush_coordinates();
        self.brush.update(brush, UpdateOptions::both());

        debug!(
            "LazyStroke::end at ({:.1}, {:.1}), {} points",
            brush.x,
            brush.y,
            path.len()
        );
        Ok(path)
    }

    /// Drop the active stroke. The brush stays where it is.
    pub fn cancel(&mut self) {
        if let Some(path) = self.current.take() {
            debug!("LazyStroke::cancel, discarded {} points", path.len());
        }
    }

    fn update_options(&self) -> UpdateOptions {
        UpdateOptions {
            both: false,
            friction: self.friction,
        }
    }
}
