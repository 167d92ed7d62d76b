use dioxus::prelude::*;

#[component]
pub fn Course() -> Element {
    rsx! {
        div { class: "page",
            div { class: "container",
                section { class: "page-header",
                    h1 { class: "section-title", "社團課程" }
                    p { class: "page-intro",
                        "本學期社課以 Swift 與 SwiftUI 為主軸，從零開始帶到能獨立完成一個小 App。"
                    }
                }
                ul { class: "entry-list",
                    li { "第 1-3 週：Swift 基礎語法與 Playgrounds" }
                    li { "第 4-7 週：SwiftUI 版面與狀態管理" }
                    li { "第 8-12 週：專題實作與 App 上架流程" }
                }
            }
        }
    }
}
