//! # Carousel State
//!
//! Index into the fixed visualization list, advanced by a timer while the
//! landing view is mounted.
//!
//! Each mount gets a new [`MountId`]. Ticks carry the id of the mount that
//! produced them, so a tick that was already queued when the view unmounted
//! (or remounted) is rejected instead of advancing the index.

use std::num::NonZeroUsize;

use crate::catalog::{VisualizationDescriptor, VISUALIZATIONS};

/// Identifies one mount of the carousel's hosting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    active: usize,
    len: NonZeroUsize,
    mounts: u64,
    mounted: Option<MountId>,
}

impl CarouselState {
    /// Carousel over `len` slots, not yet mounted.
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            active: 0,
            len,
            mounts: 0,
            mounted: None,
        }
    }

    /// Carousel over [`VISUALIZATIONS`].
    pub fn for_catalog() -> Self {
        Self::new(NonZeroUsize::new(VISUALIZATIONS.len()).unwrap_or(NonZeroUsize::MIN))
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn current_mount(&self) -> Option<MountId> {
        self.mounted
    }

    /// Descriptor at the active index (catalog-backed carousels only).
    pub fn active_descriptor(&self) -> Option<&'static VisualizationDescriptor> {
        VISUALIZATIONS.get(self.active)
    }

    /// Mount the hosting view: index resets to 0 and a new mount id is issued.
    pub fn mount(&mut self) -> MountId {
        self.mounts += 1;
        let id = MountId(self.mounts);
        self.active = 0;
        self.mounted = Some(id);
        id
    }

    /// Tear down the hosting view; later ticks are rejected.
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    /// Apply a timer tick from `mount`. Returns false when the tick is stale.
    pub fn tick(&mut self, mount: MountId) -> bool {
        if self.mounted != Some(mount) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        self.active = (self.active + 1) % self.len.get();
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::for_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_ticks_is_k_mod_n() {
        let mut carousel = CarouselState::for_catalog();
        let mount = carousel.mount();
        assert_eq!(carousel.len(), 3);
        assert_eq!(carousel.active(), 0);

        for k in 1..=10 {
            assert!(carousel.tick(mount));
            assert_eq!(carousel.active(), k % 3);
        }
    }

    #[test]
    fn test_unmounted_ticks_are_rejected() {
        let mut carousel = CarouselState::for_catalog();
        let mount = carousel.mount();
        carousel.tick(mount);
        carousel.unmount();

        assert!(!carousel.tick(mount));
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn test_remount_resets_and_rejects_old_mount() {
        let mut carousel = CarouselState::for_catalog();
        let first = carousel.mount();
        carousel.tick(first);
        carousel.tick(first);
        carousel.unmount();

        let second = carousel.mount();
        assert_ne!(first, second);
        assert_eq!(carousel.active(), 0);
        assert!(!carousel.tick(first));
        assert!(carousel.tick(second));
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn test_ticks_before_mount_do_nothing() {
        let mut carousel = CarouselState::new(NonZeroUsize::new(4).unwrap());
        assert!(!carousel.is_mounted());
        assert!(!carousel.tick(MountId(1)));
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn test_active_descriptor_follows_index() {
        let mut carousel = CarouselState::for_catalog();
        let mount = carousel.mount();
        carousel.tick(mount);
        assert_eq!(carousel.active_descriptor().map(|d| d.title), Some("Molecular Structures"));
        assert!(carousel.is_active(1));
    }
}
