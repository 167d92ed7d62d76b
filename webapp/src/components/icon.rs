use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    /// Symbolic identifier, e.g. "uil:home".
    pub name: String,
    #[props(default)]
    pub class: String,
}

/// Inline-SVG icon set covering the symbolic names the site uses.
#[component]
pub fn Icon(props: IconProps) -> Element {
    let path = icon_path(&props.name);

    rsx! {
        svg {
            class: "{props.class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "{path}" }
        }
    }
}

fn icon_path(name: &str) -> &'static str {
    match name {
        "uil:home" => "M3 9.5 12 3l9 6.5V21a1 1 0 0 1-1 1h-5v-7h-6v7H4a1 1 0 0 1-1-1z",
        "akar-icons:book" => {
            "M4 19.5A2.5 2.5 0 0 1 6.5 17H20V2H6.5A2.5 2.5 0 0 0 4 4.5zM4 19.5A2.5 2.5 0 0 0 6.5 22H20v-5"
        }
        "uil:calender" => {
            "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z"
        }
        "uil:image" => {
            "M3 5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2zM8.5 10a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3zM21 15l-5-5L5 21"
        }
        "bx:menu" => "M4 6h16M4 12h16M4 18h16",
        "akar-icons:cross" => "M6 6l12 12M18 6L6 18",
        // unknown name: neutral circle rather than nothing
        _ => "M12 12m-9 0a9 9 0 1 0 18 0a9 9 0 1 0-18 0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons_resolve() {
        let fallback = icon_path("no-such-icon");
        for name in [
            "uil:home",
            "akar-icons:book",
            "uil:calender",
            "uil:image",
            "bx:menu",
            "akar-icons:cross",
        ] {
            assert_ne!(icon_path(name), fallback, "missing icon for {name}");
        }
    }
}
