use eframe::egui;

use roster_lookup::AppState;

use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RosterLookupApp {
    pub state: AppState,
    /// Text bound to the search box; pushed into `state` when it changes.
    pub search_text: String,
    /// Whether the flush confirmation dialog is open.
    pub confirm_flush: bool,
}

impl RosterLookupApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            search_text: String::new(),
            confirm_flush: false,
        }
    }
}

impl eframe::App for RosterLookupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: buttons + search ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, self);
        });

        // ---- Bottom panel: selected student ----
        egui::TopBottomPanel::bottom("details")
            .min_height(110.0)
            .show(ctx, |ui| {
                panels::details_panel(ui, &self.state);
            });

        // ---- Central panel: match list ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::match_list(ui, &mut self.state);
        });

        if self.confirm_flush {
            panels::confirm_flush_window(ctx, self);
        }
    }
}
