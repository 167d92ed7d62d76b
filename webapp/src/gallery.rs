use dioxus::prelude::*;

#[component]
pub fn GalleryList() -> Element {
    rsx! {
        div { class: "page",
            div { class: "container",
                section { class: "page-header",
                    h1 { class: "section-title", "社團相簿" }
                    p { class: "page-intro", "社課與活動的照片紀錄，依學期整理。" }
                }
                ul { class: "entry-list",
                    li { "2025 秋季社課花絮" }
                    li { "2025 iOS Club 黑客松" }
                    li { "2024 期末成果發表會" }
                }
            }
        }
    }
}
