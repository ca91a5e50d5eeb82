//! Analytics dashboard: snapshot model and field-to-widget projection.
//!
//! DESIGN
//! ======
//! A `dashboard_update` snapshot is a wide record of optional fields. Each
//! field is projected independently through the [`widgets::Widget`]
//! enumeration into a [`view::WidgetView`]; absent fields leave the widget's
//! previous view in place. Everything here is pure so it runs under native
//! tests; `state::dashboard` owns the mutable side and `components` draw it.

pub mod alerts;
pub mod charts;
pub mod geometry;
pub mod levels;
pub mod rolling;
pub mod snapshot;
pub mod view;
pub mod widgets;
