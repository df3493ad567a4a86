use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use roster_lookup::{AppState, MAX_ROSTER_FILES};

use crate::app::RosterLookupApp;

// ---------------------------------------------------------------------------
// Top bar – load / flush buttons, status, search box
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, app: &mut RosterLookupApp) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Load Rosters").clicked() {
            open_roster_dialog(app);
        }
        if ui.button("Flush Data").clicked() {
            app.confirm_flush = true;
        }

        ui.separator();

        ui.label(format!(
            "{} roster(s), {} students",
            app.state.file_count(),
            app.state.record_count()
        ));
    });

    if let Some(msg) = app.state.status_message() {
        ui.label(msg);
    }
    for warning in app.state.warnings() {
        ui.label(RichText::new(warning).color(Color32::RED));
    }

    if !app.state.loaded_files().is_empty() {
        egui::CollapsingHeader::new("Loaded rosters")
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                for file in app.state.loaded_files() {
                    let failed = app.state.failed().contains(&file.file_name);
                    let text = format!(
                        "{}  ({} {} {})",
                        file.file_name, file.info.course, file.info.course_number, file.info.section
                    );
                    if failed {
                        ui.label(RichText::new(text).color(Color32::RED));
                    } else {
                        ui.label(text);
                    }
                }
            });
    }

    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search Student Name:");
        let response = ui.text_edit_singleline(&mut app.search_text);
        if response.changed() {
            app.state.on_query_changed(&app.search_text);
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Match list (central panel)
// ---------------------------------------------------------------------------

/// Render the current matches; clicking one selects it.
pub fn match_list(ui: &mut Ui, state: &mut AppState) {
    if state.matches().is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.record_count() == 0 {
                ui.label("Load rosters to begin.");
            } else if state.query().is_empty() {
                ui.label("Type a name to search.");
            } else {
                ui.label("No matching students.");
            }
        });
        return;
    }

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, record) in state.matches().iter().enumerate() {
                let is_selected = state.selected() == Some(record);
                if ui
                    .selectable_label(is_selected, &record.student_name)
                    .clicked()
                {
                    clicked = Some(idx);
                }
            }
        });

    if let Some(idx) = clicked {
        state.select_match(idx);
    }
}

// ---------------------------------------------------------------------------
// Detail pane
// ---------------------------------------------------------------------------

pub fn details_panel(ui: &mut Ui, state: &AppState) {
    ui.add_space(6.0);
    match state.selected() {
        Some(record) => {
            ui.label(record.details());
        }
        None => {
            ui.label("Selected student details will appear here.");
        }
    }
}

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

pub fn confirm_flush_window(ctx: &egui::Context, app: &mut RosterLookupApp) {
    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label("Are you sure you want to flush all data?");
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Yes").clicked() {
                    app.state.flush();
                    app.search_text.clear();
                    app.confirm_flush = false;
                }
                if ui.button("No").clicked() {
                    app.confirm_flush = false;
                }
            });
        });
}

pub fn open_roster_dialog(app: &mut RosterLookupApp) {
    let files = rfd::FileDialog::new()
        .set_title(format!("Select up to {MAX_ROSTER_FILES} roster CSV files"))
        .add_filter("CSV Files", &["csv"])
        .pick_files();

    if let Some(paths) = files {
        app.state.load_rosters(&paths);
        app.search_text.clear();
        log::info!(
            "{} students loaded from {} roster(s)",
            app.state.record_count(),
            app.state.succeeded().len()
        );
    }
}
