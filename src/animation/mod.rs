use tracing::{debug, trace};

use crate::display::{DisplaySnapshot, Viewer};
use crate::error::Result;
use crate::topology::MeshGraph;

/// Sweep driven by [`RotationAnimation`].
///
/// Frame `k` rotates the working copy by
/// `(pitch_start + k * pitch_step, yaw, roll)` on top of all earlier frames.
/// Frames stop once the pitch reaches `pitch_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    pub pitch_start: f64,
    pub pitch_end: f64,
    pub pitch_step: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            pitch_start: 0.0,
            pitch_end: 3.0,
            pitch_step: 0.005,
            yaw: 0.0,
            roll: 0.01,
        }
    }
}

impl AnimationParams {
    /// Pitch of frame `k`, or `None` once the sweep is over.
    ///
    /// A non-positive or non-finite step yields no frames at all.
    #[must_use]
    pub fn pitch_at(&self, k: u32) -> Option<f64> {
        if !(self.pitch_step.is_finite() && self.pitch_step > 0.0 && self.pitch_start.is_finite()) {
            return None;
        }
        let pitch = self.pitch_start + f64::from(k) * self.pitch_step;
        (pitch < self.pitch_end).then_some(pitch)
    }
}

/// Produces the frames of an animated rotation of a mesh.
///
/// The source graph is copied once on construction; every frame is a fresh,
/// independent copy of the rotated working graph, so neither the source nor
/// earlier frames change as the animation advances.
#[derive(Debug, Clone)]
pub struct RotationAnimation {
    source_id: String,
    working: MeshGraph,
    params: AnimationParams,
    frame: u32,
}

impl RotationAnimation {
    #[must_use]
    pub fn new(source: &MeshGraph, params: AnimationParams) -> Self {
        Self {
            source_id: source.id().to_owned(),
            working: source.duplicate(),
            params,
            frame: 0,
        }
    }

    /// Feeds the snapshot of every remaining frame to `viewer`.
    ///
    /// Returns the number of frames shown. Frame pacing is left to the viewer.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error reported by the viewer.
    pub fn play<V: Viewer + ?Sized>(self, viewer: &mut V) -> Result<usize> {
        let mut shown = 0;
        for frame in self {
            viewer.show(&DisplaySnapshot::capture(&frame))?;
            shown += 1;
        }
        debug!(frames = shown, "animation finished");
        Ok(shown)
    }
}

impl Iterator for RotationAnimation {
    type Item = MeshGraph;

    fn next(&mut self) -> Option<MeshGraph> {
        let pitch = self.params.pitch_at(self.frame)?;
        let next = self.frame.checked_add(1)?;
        self.working.rotate_by(pitch, self.params.yaw, self.params.roll);
        let frame = self
            .working
            .duplicate_as(format!("{}-frame{}", self.source_id, self.frame));
        trace!(frame = self.frame, pitch, "animation frame");
        self.frame = next;
        Some(frame)
    }
}
