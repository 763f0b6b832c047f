use crate::Route;
use dioxus::prelude::*;
use ui::views::LoginView;

/// Login page; continues to the report form once signed in.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_success: move |_| {
                nav.push(Route::ReportForm {});
            },
        }
    }
}
