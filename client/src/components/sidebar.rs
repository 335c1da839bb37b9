//! Slide-out navigation panel listing the dashboard views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the dashboard shell. Selecting an entry reports the view and
//! then asks for dismissal; the backdrop and close button only dismiss.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::shell::View;

fn overlay_class(open: bool) -> &'static str {
    if open { "sidebar-overlay visible" } else { "sidebar-overlay" }
}

fn panel_class(open: bool) -> &'static str {
    if open { "sidebar open" } else { "sidebar" }
}

/// The highlight is visual only.
fn nav_item_class(view: View, current: View) -> &'static str {
    if view == current { "nav-item active" } else { "nav-item" }
}

#[component]
pub fn Sidebar(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] current_view: Signal<View>,
    on_select: Callback<View>,
    on_close: Callback<()>,
) -> impl IntoView {
    let navigate_to = move |view: View| {
        on_select.run(view);
        on_close.run(());
    };

    view! {
        <div class=move || overlay_class(open.get()) on:click=move |_| on_close.run(())></div>
        <div class=move || panel_class(open.get())>
            <div class="sidebar-header">
                <div class="sidebar-title">"Menu"</div>
                <button class="close-btn" on:click=move |_| on_close.run(()) title="Close menu">
                    "×"
                </button>
            </div>
            <nav class="sidebar-nav">
                {View::ALL
                    .into_iter()
                    .map(move |view| {
                        view! {
                            <div
                                class=move || nav_item_class(view, current_view.get())
                                data-view=view.id()
                                on:click=move |_| navigate_to(view)
                            >
                                {view.label()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
