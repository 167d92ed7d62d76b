use crate::Route;

/// Delay between the corner-rounding change and the dropdown reveal, so the
/// border-radius transition is visible before the menu content appears.
pub const OPEN_DELAY_MS: u32 = 300;

/// One entry in the fixed navigation list, shared by the desktop and mobile
/// layouts.
#[derive(Clone, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: Route,
    pub icon: &'static str,
}

pub fn menu_entries() -> [MenuEntry; 5] {
    [
        MenuEntry {
            label: "首頁",
            target: Route::Home {},
            icon: "uil:home",
        },
        MenuEntry {
            label: "社團課程",
            target: Route::Course {},
            icon: "akar-icons:book",
        },
        MenuEntry {
            label: "社團活動",
            target: Route::ClubActivities {},
            icon: "uil:calender",
        },
        MenuEntry {
            label: "社團相簿",
            target: Route::GalleryList {},
            icon: "uil:image",
        },
        MenuEntry {
            label: "教學資源",
            target: Route::SwiftResources {},
            icon: "uil:image",
        },
    ]
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum MenuPhase {
    Closed,
    Opening,
    Open,
}

/// What the owner of a [`MenuToggle`] must do with its one-shot timer after
/// a toggle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MenuEffect {
    /// Schedule a delayed [`MenuToggle::open_elapsed`] call.
    ScheduleOpen,
    /// Cancel any pending delayed call; the menu closed synchronously.
    CancelPending,
}

/// Open/close choreography for the mobile dropdown.
///
/// Opening happens in two steps: the corner rounding relaxes immediately,
/// and the dropdown content follows once the [`OPEN_DELAY_MS`] timer fires.
/// Closing is a single synchronous step with no delay.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MenuToggle {
    phase: MenuPhase,
}

impl MenuToggle {
    pub fn new() -> Self {
        MenuToggle {
            phase: MenuPhase::Closed,
        }
    }

    /// The dropdown content is visible.
    pub fn menu_open(&self) -> bool {
        self.phase == MenuPhase::Open
    }

    /// Full corner rounding applies only while fully closed; the rounding
    /// relaxes as soon as an open starts.
    pub fn corners_rounded(&self) -> bool {
        self.phase == MenuPhase::Closed
    }

    pub fn toggle(&mut self) -> MenuEffect {
        match self.phase {
            MenuPhase::Closed => {
                self.phase = MenuPhase::Opening;
                MenuEffect::ScheduleOpen
            }
            MenuPhase::Opening | MenuPhase::Open => {
                self.phase = MenuPhase::Closed;
                MenuEffect::CancelPending
            }
        }
    }

    /// Called when the open delay elapses. A stale timer that fires after
    /// the menu has already been closed again must not reopen it, so this
    /// only acts mid-open.
    pub fn open_elapsed(&mut self) {
        if self.phase == MenuPhase::Opening {
            self.phase = MenuPhase::Open;
        }
    }
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let menu = MenuToggle::new();
        assert!(!menu.menu_open());
        assert!(menu.corners_rounded());
    }

    #[test]
    fn test_open_waits_for_delay() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.toggle(), MenuEffect::ScheduleOpen);

        // corners relax immediately, the dropdown waits for the timer
        assert!(!menu.corners_rounded());
        assert!(!menu.menu_open());

        menu.open_elapsed();
        assert!(menu.menu_open());
        assert!(!menu.corners_rounded());
    }

    #[test]
    fn test_close_is_synchronous() {
        let mut menu = MenuToggle::new();
        menu.toggle();
        menu.open_elapsed();

        assert_eq!(menu.toggle(), MenuEffect::CancelPending);
        assert!(!menu.menu_open());
        assert!(menu.corners_rounded());
    }

    #[test]
    fn test_close_during_opening_discards_stale_timer() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.toggle(), MenuEffect::ScheduleOpen);
        assert_eq!(menu.toggle(), MenuEffect::CancelPending);

        // the superseded timer fires anyway; nothing may change
        menu.open_elapsed();
        assert!(!menu.menu_open());
        assert!(menu.corners_rounded());
    }

    #[test]
    fn test_open_mirrors_rounding_once_settled() {
        let mut menu = MenuToggle::new();
        for _ in 0..7 {
            if menu.toggle() == MenuEffect::ScheduleOpen {
                menu.open_elapsed();
            }
            assert_eq!(menu.menu_open(), !menu.corners_rounded());
        }
    }

    #[test]
    fn test_stale_timer_is_noop_in_every_phase() {
        let mut closed = MenuToggle::new();
        closed.open_elapsed();
        assert!(!closed.menu_open());

        let mut open = MenuToggle::new();
        open.toggle();
        open.open_elapsed();
        open.open_elapsed();
        assert!(open.menu_open());
        assert!(!open.corners_rounded());
    }

    #[test]
    fn test_menu_entries_fixed_order() {
        let entries = menu_entries();
        assert_eq!(entries.len(), 5);

        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["首頁", "社團課程", "社團活動", "社團相簿", "教學資源"]
        );

        let paths: Vec<_> = entries.iter().map(|e| e.target.to_string()).collect();
        assert_eq!(
            paths,
            [
                "/",
                "/course",
                "/club_activities",
                "/gallery_list",
                "/swift_res"
            ]
        );
    }
}
