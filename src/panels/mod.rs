mod central_panel;
mod header;
mod palette_panel;
mod status_bar;
mod toolbar;

pub use central_panel::central_panel;
pub use header::header_panel;
pub use palette_panel::palette_panel;
pub use status_bar::status_bar;
pub use toolbar::toolbar_panel;

/// Border color shared by the light panels.
pub(crate) const PANEL_BORDER: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
/// Fill of the toolbar, palette and status bar.
pub(crate) const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
