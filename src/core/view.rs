use super::episodes::{episode_at, Episode};
use super::journey::JourneyLayout;
use super::progress::ProgressController;

/// What the DOM overlay shows; re-rendered only when it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiSnapshot {
    pub active: Option<usize>,
    pub selected: Option<usize>,
    pub moving: bool,
    pub hint_visible: bool,
}

/// In-memory view state for the lifetime of the tab.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub progress: ProgressController,
    active: Option<usize>,
    selected: Option<usize>,
    pub hovered: Option<usize>,
    pub coarse_pointer: bool,
}

impl ViewState {
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_episode(&self) -> Option<&'static Episode> {
        self.selected.and_then(episode_at)
    }

    /// Recompute the active episode from the current progress.
    /// Arriving at an episode also selects it. Returns true when the active stop changed.
    pub fn sync_active(&mut self, layout: &JourneyLayout) -> bool {
        let next = layout.active_episode(self.progress.current());
        if next == self.active {
            return false;
        }
        self.active = next;
        if let Some(i) = next {
            self.selected = Some(i);
        }
        log::debug!("[journey] active={:?}", next);
        true
    }

    /// Jump to an episode's stop and open its panel.
    pub fn select_episode(&mut self, index: usize, layout: &JourneyLayout) {
        let Some(stop) = layout.stop_for_episode(index) else {
            return;
        };
        self.progress.jump_to(stop);
        if let Some(ep) = layout.active_episode(self.progress.target()) {
            self.selected = Some(ep);
        }
    }

    pub fn close_panel(&mut self) {
        self.selected = None;
    }

    /// Labels show on hover or on the active stop, never on touch devices.
    #[inline]
    pub fn tooltip_visible(&self, index: usize) -> bool {
        !self.coarse_pointer && (self.active == Some(index) || self.hovered == Some(index))
    }

    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            active: self.active,
            selected: self.selected,
            moving: self.progress.is_moving(),
            hint_visible: self.progress.hint_visible(),
        }
    }
}
