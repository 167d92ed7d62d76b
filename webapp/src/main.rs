#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navbar::NavBar;

mod home;
use home::Home;

mod course;
use course::Course;

mod activities;
use activities::ClubActivities;

mod gallery;
use gallery::GalleryList;

mod resources;
use resources::SwiftResources;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/course")]
        Course {},
        #[route("/club_activities")]
        ClubActivities {},
        #[route("/gallery_list")]
        GalleryList {},
        #[route("/swift_res")]
        SwiftResources {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::NAVBAR_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
