use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            section { class: "hero",
                div { class: "container",
                    h1 { class: "hero-title", "iOS Club" }
                    p { class: "hero-subtitle", "一起學習 Swift、打造你的第一個 App" }
                    div { class: "hero-actions",
                        Link {
                            to: Route::Course {},
                            class: "btn btn-primary btn-lg",
                            "看看社團課程"
                        }
                        Link {
                            to: Route::ClubActivities {},
                            class: "btn btn-secondary btn-lg",
                            "近期活動"
                        }
                    }
                }
            }

            section { class: "features-section",
                div { class: "container",
                    h2 { class: "section-title", "我們在做什麼" }

                    div { class: "features-grid",
                        div { class: "feature-card",
                            h3 { class: "feature-title", "每週社課" }
                            p { class: "feature-desc",
                                "從 Swift 語法到 SwiftUI 介面，循序漸進的實作課程。"
                            }
                        }
                        div { class: "feature-card",
                            h3 { class: "feature-title", "社團活動" }
                            p { class: "feature-desc",
                                "黑客松、講座與跨校交流，把課堂上學到的東西派上用場。"
                            }
                        }
                        div { class: "feature-card",
                            h3 { class: "feature-title", "教學資源" }
                            p { class: "feature-desc",
                                "歷年講義與範例程式碼全部公開，隨時都能複習。"
                            }
                        }
                    }
                }
            }

            footer { class: "home-footer",
                div { class: "container",
                    p { "iOS Club" }
                }
            }
        }
    }
}
