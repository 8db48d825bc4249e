//! Protected charts view.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. It renders nothing until the status
//! lookup resolves, and on denial defers to the installed gate handler
//! (login prompt under local mode, blocking alert under provider mode).

use leptos::prelude::*;

use crate::components::chart_card::ChartCard;
use crate::state::session::SessionState;
use crate::util::guard::{self, RouteDecision};

/// Charts page — filters panel plus the three analysis cards.
#[component]
pub fn ChartsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    guard::install_denial_handler(session, guard::APP);

    view! {
        <Show
            when=move || guard::decide(&session.get(), &guard::APP) == RouteDecision::Render
            fallback=|| ()
        >
            <div class="charts-page">
                <aside class="charts-page__filters card-panel">
                    <h5>"Filters"</h5>
                    <div class="divider"></div>
                    <h6>"Demographics"</h6>
                </aside>
                <section class="charts-page__cards" id="charts">
                    <ChartCard id="reactions" title="Reactions"/>
                    <ChartCard id="therapy" title="Therapy"/>
                    <ChartCard id="risk" title="Risk Assessment"/>
                </section>
            </div>
        </Show>
    }
}
