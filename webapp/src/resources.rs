use dioxus::prelude::*;

#[component]
pub fn SwiftResources() -> Element {
    rsx! {
        div { class: "page",
            div { class: "container",
                section { class: "page-header",
                    h1 { class: "section-title", "教學資源" }
                    p { class: "page-intro", "歷年社課講義與範例程式碼，歡迎自由取用。" }
                }
                ul { class: "entry-list",
                    li { "Swift 入門講義（PDF）" }
                    li { "SwiftUI 範例專案原始碼" }
                    li { "App 上架檢查清單" }
                }
            }
        }
    }
}
