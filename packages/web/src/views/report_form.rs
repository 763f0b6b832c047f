use crate::Route;
use dioxus::prelude::*;
use ui::views::ReportFormView;

#[component]
pub fn ReportForm() -> Element {
    let nav = use_navigator();
    rsx! {
        ReportFormView {
            on_submitted: move |_| {
                nav.push(Route::Reports {});
            },
        }
    }
}
