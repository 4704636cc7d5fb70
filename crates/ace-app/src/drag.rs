//! Drag coordinator for canvas elements
//!
//! Tracks at most one pointer-drag gesture and turns its end into a single
//! scale-corrected position delta.

use glam::DVec2;
use uuid::Uuid;

/// An in-flight drag of one element. Pointer positions are client pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pub uuid: Uuid,
    pub start: DVec2,
    pub current: DVec2,
    /// Viewport scale at gesture start
    pub scale: f64,
}

impl DragGesture {
    /// Pointer movement so far, in client pixels
    pub fn delta(&self) -> DVec2 {
        self.current - self.start
    }

    /// Pointer movement so far, in surface units
    pub fn surface_delta(&self) -> DVec2 {
        self.delta() / self.scale
    }
}

/// Position change committed at the end of a drag, in surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionUpdate {
    pub uuid: Uuid,
    pub dx: f64,
    pub dy: f64,
}

/// Owner of the single active drag gesture
#[derive(Debug, Default)]
pub struct DragCoordinator {
    active: Option<DragGesture>,
}

impl DragCoordinator {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&DragGesture> {
        self.active.as_ref()
    }

    /// Surface offset to draw `uuid` with while it is being dragged
    pub fn preview_offset(&self, uuid: Uuid) -> Option<DVec2> {
        self.active
            .as_ref()
            .filter(|gesture| gesture.uuid == uuid)
            .map(DragGesture::surface_delta)
    }

    /// Start a gesture. Returns `false` if one is already in progress.
    ///
    /// A missing or unusable scale counts as 1.0.
    pub fn begin(&mut self, uuid: Uuid, pointer: DVec2, scale: Option<f64>) -> bool {
        if self.active.is_some() {
            return false;
        }

        let scale = scale
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(1.0);
        self.active = Some(DragGesture {
            uuid,
            start: pointer,
            current: pointer,
            scale,
        });
        true
    }

    pub fn update(&mut self, pointer: DVec2) {
        if let Some(gesture) = self.active.as_mut() {
            gesture.current = pointer;
        }
    }

    /// Finish the gesture. Only a drop over a droppable target yields an update.
    pub fn end(&mut self, over_droppable: bool) -> Option<PositionUpdate> {
        let gesture = self.active.take()?;
        if !over_droppable {
            return None;
        }

        let delta = gesture.surface_delta();
        Some(PositionUpdate {
            uuid: gesture.uuid,
            dx: delta.x,
            dy: delta.y,
        })
    }

    /// Abandon the gesture without committing anything
    pub fn cancel(&mut self) -> Option<DragGesture> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_divides_delta_by_scale() {
        let mut drag = DragCoordinator::default();
        let uuid = Uuid::new_v4();

        assert!(drag.begin(uuid, DVec2::new(100.0, 100.0), Some(0.5)));
        drag.update(DVec2::new(150.0, 80.0));

        let update = drag.end(true).unwrap();
        assert_eq!(update.uuid, uuid);
        assert_eq!(update.dx, 100.0);
        assert_eq!(update.dy, -40.0);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_missing_scale_defaults_to_one() {
        let mut drag = DragCoordinator::default();
        drag.begin(Uuid::new_v4(), DVec2::ZERO, None);
        drag.update(DVec2::new(12.0, 7.0));

        let update = drag.end(true).unwrap();
        assert_eq!((update.dx, update.dy), (12.0, 7.0));
    }

    #[test]
    fn test_zero_scale_defaults_to_one() {
        let mut drag = DragCoordinator::default();
        drag.begin(Uuid::new_v4(), DVec2::ZERO, Some(0.0));
        assert_eq!(drag.active().unwrap().scale, 1.0);
    }

    #[test]
    fn test_end_outside_droppable_commits_nothing() {
        let mut drag = DragCoordinator::default();
        drag.begin(Uuid::new_v4(), DVec2::ZERO, Some(1.0));
        drag.update(DVec2::new(50.0, 50.0));

        assert_eq!(drag.end(false), None);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_second_gesture_refused_while_active() {
        let mut drag = DragCoordinator::default();
        let first = Uuid::new_v4();
        assert!(drag.begin(first, DVec2::ZERO, None));
        assert!(!drag.begin(Uuid::new_v4(), DVec2::ZERO, None));
        assert_eq!(drag.active().unwrap().uuid, first);
    }

    #[test]
    fn test_end_commits_exactly_once() {
        let mut drag = DragCoordinator::default();
        drag.begin(Uuid::new_v4(), DVec2::ZERO, None);
        assert!(drag.end(true).is_some());
        assert!(drag.end(true).is_none());
    }

    #[test]
    fn test_preview_offset_only_for_dragged_element() {
        let mut drag = DragCoordinator::default();
        let uuid = Uuid::new_v4();
        drag.begin(uuid, DVec2::ZERO, Some(0.25));
        drag.update(DVec2::new(8.0, 16.0));

        assert_eq!(drag.preview_offset(uuid), Some(DVec2::new(32.0, 64.0)));
        assert_eq!(drag.preview_offset(Uuid::new_v4()), None);
    }
}
