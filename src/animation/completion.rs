//! Fan-in of the camera and viewpoint-animation settled signals.

/// Two-flag latch that reports "all animation activity settled" once per
/// episode, regardless of which upstream signal arrives first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionCoordinator {
    camera_settled: bool,
    parts_settled: bool,
}

impl CompletionCoordinator {
    /// Latch with both flags clear.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A camera move ran to completion. `parts_pending` is whether
    /// viewpoint-bound animations are still stepping.
    ///
    /// Returns `true` when the settled notification must fire now.
    pub fn camera_finished(&mut self, parts_pending: bool) -> bool {
        self.camera_settled = true;
        if parts_pending {
            return false;
        }
        self.reset();
        true
    }

    /// The viewpoint-bound animation set just emptied.
    ///
    /// Returns `true` when the settled notification must fire now.
    pub fn parts_settled(&mut self) -> bool {
        self.parts_settled = true;
        if self.camera_settled {
            self.reset();
            return true;
        }
        false
    }

    /// A new viewpoint-bound set replaced the old one.
    ///
    /// Any earlier parts-settled flag is dropped. A camera that already
    /// landed keeps waiting if the new set is non-empty, and fires now if
    /// it is empty. Returns `true` when the settled notification must fire.
    pub fn animation_set_loaded(&mut self, parts_pending: bool) -> bool {
        self.parts_settled = false;
        if self.camera_settled && !parts_pending {
            self.reset();
            return true;
        }
        false
    }

    /// Whether the camera half of the current episode has arrived.
    #[must_use]
    pub fn is_camera_settled(&self) -> bool {
        self.camera_settled
    }

    /// Whether the animation half of the current episode has arrived.
    #[must_use]
    pub fn is_parts_settled(&self) -> bool {
        self.parts_settled
    }

    /// Clear both flags.
    pub fn reset(&mut self) {
        self.camera_settled = false;
        self.parts_settled = false;
    }
}
