// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Identifies an overlay registered with an [`OverlayManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u32);

/// Keeps track of the single open overlay of a form. Opening another overlay closes the current
/// one.
#[derive(Debug, Default)]
pub struct OverlayManager {
    next: u32,
    open: Option<OverlayId>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> OverlayId {
        let id = OverlayId(self.next);
        self.next += 1;
        id
    }

    /// Opens `id`, returning the overlay it displaced.
    pub fn open(&mut self, id: OverlayId) -> Option<OverlayId> {
        let displaced = self.open.replace(id).filter(|old| *old != id);
        if let Some(old) = displaced {
            tracing::debug!(?old, new = ?id, "overlay displaced");
        }
        displaced
    }

    /// Closes `id` if it is the open overlay.
    pub fn close(&mut self, id: OverlayId) -> bool {
        if self.open == Some(id) {
            self.open = None;
            true
        } else {
            false
        }
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.open == Some(id)
    }

    pub fn current(&self) -> Option<OverlayId> {
        self.open
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_displaces_the_open_overlay() {
        let mut overlays = OverlayManager::new();
        let date = overlays.register();
        let time = overlays.register();
        assert_ne!(date, time);

        assert_eq!(overlays.open(date), None);
        assert_eq!(overlays.open(time), Some(date));
        assert!(!overlays.is_open(date));
        assert!(overlays.is_open(time));
        assert_eq!(overlays.open(time), None);
    }

    #[test]
    fn close_only_affects_the_open_overlay() {
        let mut overlays = OverlayManager::new();
        let date = overlays.register();
        let time = overlays.register();

        overlays.open(date);
        assert!(!overlays.close(time));
        assert_eq!(overlays.current(), Some(date));
        assert!(overlays.close(date));
        assert_eq!(overlays.current(), None);

        overlays.open(time);
        overlays.close_all();
        assert!(!overlays.is_open(time));
    }
}
