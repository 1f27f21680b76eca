//! Tab management
//!
//! - `registry` — mapping tab.key → view (single source of truth)
//! - `tab_labels` — single source of truth for tab titles

pub mod registry;
pub mod tab_labels;

pub use tab_labels::tab_label_for_key;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

/// Wrapper for one opened tab. The content is created once per open and
/// kept mounted; visibility is toggled with CSS so list state survives
/// switching away and back.
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("TabPage destroyed: '{}'", tab_key_for_cleanup);
    });

    let content = registry::render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        let key_for_click = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        let key_for_active = tab.key.clone();
                        view! {
                            <div
                                class="tabs-bar__tab"
                                class:tabs-bar__tab--active=move || {
                                    tabs_store.active.get().as_deref() == Some(key_for_active.as_str())
                                }
                                on:click=move |_| tabs_store.activate_tab(&key_for_click)
                            >
                                <span>{tab.title.clone()}</span>
                                <span
                                    class="tabs-bar__close"
                                    on:click=move |e| {
                                        e.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    {crate::shared::icons::icon("x")}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! {
                            <TabPage tab=tab tabs_store=tabs_store />
                        }
                    }
                />
            </div>
        </div>
    }
}
