pub mod app;
pub mod controls_panel;
pub mod diagram_view;
pub mod info_panel;
