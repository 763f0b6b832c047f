use crate::Route;
use dioxus::prelude::*;
use ui::views::SignupView;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    rsx! {
        SignupView {
            on_success: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
