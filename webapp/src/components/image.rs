use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ImageWithPlaceholderProps {
    pub src: String,
    pub alt: String,
    #[props(default)]
    pub class: String,
}

/// Image that keeps a skeleton treatment until the browser reports the load
/// event.
#[component]
pub fn ImageWithPlaceholder(props: ImageWithPlaceholderProps) -> Element {
    let mut loaded = use_signal(|| false);

    let state_class = if loaded() {
        "img-loaded"
    } else {
        "img-loading skeleton"
    };

    rsx! {
        img {
            class: "{props.class} {state_class}",
            src: "{props.src}",
            alt: "{props.alt}",
            onload: move |_| loaded.set(true),
        }
    }
}
