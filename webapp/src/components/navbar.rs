use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;
use wasm_bindgen::{JsCast, closure::Closure};

use crate::Route;
use crate::components::icon::Icon;
use crate::components::image::ImageWithPlaceholder;
use crate::components::menu::{MenuEffect, MenuToggle, OPEN_DELAY_MS, menu_entries};

const JOIN_FORM_URL: &str = "https://forms.gle/uJSNB8ccYRu5SZQ59";

/// Scroll offset, in pixels, past which the shell switches to the
/// "scrolled" glass treatment.
const SCROLL_THRESHOLD_PX: f64 = 8.0;

fn scrolled_past(offset_px: f64) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

#[component]
fn NavBarInner() -> Element {
    let mut menu = use_signal(MenuToggle::new);
    let mut scrolled = use_signal(|| false);

    // The pending open timer. At most one may exist; a close or an unmount
    // supersedes it. Cancelling a fired or absent handle is a no-op.
    let open_timer = use_hook(|| Rc::new(RefCell::new(None::<Timeout>)));

    // Window-level listener; dioxus only dispatches events from its own
    // tree, so the scroll subscription goes through web-sys directly.
    let scroll_callback = use_hook(|| {
        let callback = Closure::<dyn FnMut()>::new(move || {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            scrolled.set(scrolled_past(offset));
        });

        if let Some(window) = web_sys::window() {
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            );
        }

        Rc::new(callback)
    });

    use_drop({
        let open_timer = open_timer.clone();
        let scroll_callback = scroll_callback.clone();
        move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().as_ref().unchecked_ref(),
                );
            }
            if let Some(timer) = open_timer.borrow_mut().take() {
                timer.cancel();
            }
        }
    });

    let on_toggle = {
        let open_timer = open_timer.clone();
        move |_| {
            let effect = menu.write().toggle();
            match effect {
                MenuEffect::ScheduleOpen => {
                    debug!("menu opening, corner transition started");
                    let timer = Timeout::new(OPEN_DELAY_MS, move || {
                        menu.write().open_elapsed();
                    });
                    if let Some(stale) = open_timer.borrow_mut().replace(timer) {
                        stale.cancel();
                    }
                }
                MenuEffect::CancelPending => {
                    debug!("menu closed");
                    if let Some(timer) = open_timer.borrow_mut().take() {
                        timer.cancel();
                    }
                }
            }
        }
    };

    let menu_open = menu.read().menu_open();
    let rounded = menu.read().corners_rounded();

    let glass = if scrolled() {
        "navbar-glass-scrolled"
    } else {
        "navbar-glass"
    };
    let mobile_glass = if menu_open {
        "navbar-glass-mobile-open"
    } else {
        glass
    };
    let radius = if rounded {
        "navbar-rounded-full"
    } else {
        "navbar-rounded-soft"
    };

    let toggle_label = if menu_open {
        "關閉選單"
    } else {
        "開啟選單"
    };
    let toggle_icon = if menu_open {
        "akar-icons:cross"
    } else {
        "bx:menu"
    };

    // Both layouts are always constructed; the 768px media query picks the
    // visible one. Conditional construction would flash while the viewport
    // crosses the breakpoint.
    rsx! {
        div { class: "navbar-mobile",
            nav { class: "navbar-shell navbar-shell-mobile {radius} {mobile_glass}",
                div { class: "navbar-row",
                    NavBarBrand {}
                    button {
                        class: "navbar-toggle",
                        aria_label: "{toggle_label}",
                        aria_expanded: "{menu_open}",
                        aria_controls: "mobile-menu",
                        onclick: on_toggle,
                        Icon { name: "{toggle_icon}", class: "navbar-toggle-icon" }
                    }
                }
                if menu_open {
                    div { id: "mobile-menu", class: "navbar-dropdown",
                        ul { class: "navbar-dropdown-list",
                            for entry in menu_entries() {
                                li { key: "{entry.label}", class: "navbar-dropdown-item",
                                    Link {
                                        class: "navbar-dropdown-link",
                                        to: entry.target,
                                        "{entry.label}"
                                    }
                                }
                            }
                        }
                        JoinUsButton { full_width: true }
                    }
                }
            }
        }
        div { class: "navbar-desktop",
            nav { class: "navbar-shell navbar-shell-desktop navbar-rounded-full {glass}",
                NavBarBrand {}
                ul { class: "navbar-links",
                    for entry in menu_entries() {
                        li { key: "{entry.label}", class: "navbar-link-item",
                            Link { class: "navbar-link", to: entry.target,
                                Icon { name: "{entry.icon}", class: "navbar-link-icon" }
                                "{entry.label}"
                            }
                        }
                    }
                }
                JoinUsButton { full_width: false }
            }
        }
    }
}

#[component]
fn NavBarBrand() -> Element {
    rsx! {
        Link { class: "navbar-brand", to: Route::Home {},
            div { class: "navbar-logo-chip",
                ImageWithPlaceholder {
                    src: "/assets/ios_club_logo.svg",
                    alt: "iOS Club Logo",
                    class: "navbar-logo",
                }
            }
            span { class: "navbar-wordmark", "iOS Club" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct JoinUsButtonProps {
    #[props(default = false)]
    full_width: bool,
}

/// External call to action: opens the signup form in a new browsing
/// context. The component has no way to observe a failure here, so the
/// result is ignored.
#[component]
fn JoinUsButton(props: JoinUsButtonProps) -> Element {
    rsx! {
        button {
            class: if props.full_width { "join-us-btn join-us-btn-block" } else { "join-us-btn" },
            onclick: move |_| {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(JOIN_FORM_URL, "_blank");
                }
            },
            "Join Us"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!scrolled_past(0.0));
        assert!(!scrolled_past(8.0));
        assert!(scrolled_past(9.0));
    }
}
