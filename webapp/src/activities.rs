use dioxus::prelude::*;

#[component]
pub fn ClubActivities() -> Element {
    rsx! {
        div { class: "page",
            div { class: "container",
                section { class: "page-header",
                    h1 { class: "section-title", "社團活動" }
                    p { class: "page-intro", "社課之外的大小活動都在這裡。" }
                }
                ul { class: "entry-list",
                    li { "期初茶會：認識幹部與本學期規劃" }
                    li { "校內黑客松：48 小時做出你的點子" }
                    li { "業界講座：邀請 iOS 工程師分享開發日常" }
                }
            }
        }
    }
}
