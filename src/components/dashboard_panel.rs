//! Analytics dashboard overlay.

use leptos::prelude::*;

use crate::components::chart_canvas::ChartCanvas;
use crate::components::widget_view::render_view;
use crate::dashboard::charts::ChartId;
use crate::dashboard::widgets::Widget;
use crate::state::ViewSession;
use crate::state::dashboard::DashboardState;

/// Full-screen panel toggled by the keyboard chord or the close button.
#[component]
pub fn DashboardPanel() -> impl IntoView {
    let dashboard = expect_context::<ViewSession>().dashboard;

    let panel_class = move || {
        if dashboard.with(|d| d.active) { "dashboard-panel active" } else { "dashboard-panel" }
    };
    let on_close = move |_| dashboard.update(DashboardState::close);

    view! {
        <div id="dashboardPanel" class=panel_class>
            <div class="dashboard-header">
                <h2 class="dashboard-title">"Conversation Intelligence"</h2>
                <span class="dashboard-hint">"Ctrl+Shift+X"</span>
                <button class="dashboard-close" title="Close" on:click=on_close>"✕"</button>
            </div>
            <div class="dashboard-charts">
                {ChartId::ALL.into_iter().map(|id| view! { <ChartCanvas id=id /> }).collect_view()}
            </div>
            <div class="dashboard-grid">
                {Widget::ALL.into_iter().map(|widget| view! { <WidgetCard widget=widget /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn WidgetCard(widget: Widget) -> impl IntoView {
    let dashboard = expect_context::<ViewSession>().dashboard;

    view! {
        <section class="widget-card">
            <h3 class="widget-title">{widget.title()}</h3>
            <div class="widget-body">{move || render_view(dashboard.with(|d| d.view(widget)))}</div>
        </section>
    }
}
