//! Titled card chrome around a chart mount point.

use leptos::prelude::*;

/// Card wrapper for one chart.
///
/// The inner mount `<div>` is the hand-off point to the charting surface;
/// nothing in this crate draws into it.
#[component]
pub fn ChartCard(id: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="chart-card card-panel" id=id>
            <h5 class="chart-card__title">{title}</h5>
            <div class="chart-card__mount"></div>
        </div>
    }
}
