//! egui renderer for the application UI.

use std::time::Instant;

use eframe::egui::{self, Color32, RichText, Sense, Ui, Vec2};

use crate::controller::{ScrollCommand, SelectionController};
use crate::list_position;

use super::helpers::{self, ListRow};
use super::scrollbar;

/// Renders the egui UI using the shared controller state.
pub struct NameVoxApp {
    controller: SelectionController,
    query_buf: String,
    visuals_set: bool,
    /// Visible range last reported to the controller, so the notification
    /// only fires when the virtualized range actually changes.
    last_range: Option<(usize, usize)>,
    list_content_height: f32,
    list_viewport_height: f32,
}

impl NameVoxApp {
    pub fn new(controller: SelectionController) -> Self {
        Self {
            controller,
            query_buf: String::new(),
            visuals_set: false,
            last_range: None,
            list_content_height: 0.0,
            list_viewport_height: 0.0,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Color32::from_rgb(12, 12, 12);
        visuals.panel_fill = Color32::from_rgb(16, 16, 16);
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(16, 16, 16);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_search_bar(&mut self, ctx: &egui::Context, now: Instant) {
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("NameVox").color(Color32::WHITE).strong());
                ui.add_space(8.0);
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.query_buf)
                        .hint_text("Type a name...")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    self.controller.set_query(&self.query_buf, now);
                }
            });
            ui.add_space(6.0);
        });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} names", self.controller.filtered_len()))
                        .color(Color32::GRAY),
                );
                if let Some(selection) = self.controller.selection() {
                    ui.separator();
                    ui.label(RichText::new(&selection.name).color(Color32::WHITE));
                }
            });
        });
    }

    fn render_row(&mut self, ui: &mut Ui, row: usize, row_height: f32) {
        let Some(name) = self.controller.written_at(row).map(str::to_string) else {
            return;
        };
        let is_selected = self
            .controller
            .selection()
            .is_some_and(|selection| selection.name == name);
        let response = helpers::render_list_row(
            ui,
            ListRow {
                label: &name,
                row_width: ui.available_width(),
                row_height,
                bg: is_selected.then(helpers::selected_row_fill),
                text_color: if is_selected {
                    Color32::BLACK
                } else {
                    Color32::WHITE
                },
                sense: Sense::click(),
            },
        );
        if response.clicked() {
            self.controller.click_row(row);
        }
    }

    fn render_name_list(&mut self, ui: &mut Ui) {
        let row_height = ui.spacing().interact_size.y;
        let row_pitch = row_height + ui.spacing().item_spacing.y;
        let total_rows = self.controller.filtered_len();

        let scroll = egui::ScrollArea::vertical()
            .id_salt("name_list")
            .auto_shrink([false, false])
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden);
        let output = if total_rows == 0 {
            scroll.show(ui, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No matches").color(Color32::GRAY));
                });
                (0, 0)
            })
        } else {
            scroll.show_rows(ui, row_height, total_rows, |ui, row_range| {
                let range = (row_range.start, row_range.len());
                for row in row_range {
                    self.render_row(ui, row, row_height);
                }
                range
            })
        };

        let viewport_height = output.inner_rect.height();
        let content_height = output.content_size.y;
        let max_offset = (content_height - viewport_height).max(0.0);

        let mut state = output.state;
        match self.controller.take_scroll_command() {
            Some(ScrollCommand::ToIndex(row)) => {
                state.offset.y = list_position::offset_to_center_row(
                    row,
                    row_pitch,
                    viewport_height,
                    content_height,
                );
            }
            Some(ScrollCommand::ToOffset(offset)) => {
                state.offset.y = offset.clamp(0.0, max_offset);
            }
            None => {}
        }
        state.store(ui.ctx(), output.id);

        // The realized range is the asynchronous feedback the controller
        // expects; it only counts as a notification when it changes.
        let range = output.inner;
        if self.last_range != Some(range) {
            self.last_range = Some(range);
            self.controller.on_visible_range(range.0, range.1);
        }

        self.list_content_height = content_height;
        self.list_viewport_height = viewport_height;
    }
}

impl eframe::App for NameVoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let now = Instant::now();
        self.controller.tick(now);

        self.render_search_bar(ctx, now);
        self.render_status(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let gap = ui.spacing().item_spacing.x;
                let list_size = Vec2::new(
                    (ui.available_width() - scrollbar::TRACK_WIDTH - gap).max(0.0),
                    ui.available_height(),
                );
                let track_height = list_size.y;
                ui.allocate_ui(list_size, |ui| {
                    self.render_name_list(ui);
                });
                let travel = self.controller.travel_percentage();
                let response = scrollbar::scrollbar(ui, track_height, travel);
                if let Some(fraction) = response.pointer_fraction {
                    self.controller.on_scrollbar_fraction(
                        fraction,
                        self.list_content_height,
                        self.list_viewport_height,
                    );
                }
            });
        });

        if let Some(deadline) = self.controller.next_commit_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
