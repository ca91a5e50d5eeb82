pub mod chart_canvas;
pub mod chat_panel;
pub mod dashboard_panel;
pub mod join_modal;
pub mod status_bar;
pub mod theme_toggle;
pub mod widget_view;
