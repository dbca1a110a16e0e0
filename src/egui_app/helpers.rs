//! Row painting helpers shared by the name list.

use eframe::egui::{self, Align2, Color32, TextStyle, Ui};

/// Background used for the selected row.
pub(super) fn selected_row_fill() -> Color32 {
    Color32::from_rgb(248, 183, 216)
}

fn row_hover_fill() -> Color32 {
    Color32::from_gray(40)
}

fn row_divider() -> egui::Stroke {
    egui::Stroke::new(1.0, Color32::from_gray(26))
}

pub(super) struct ListRow<'a> {
    pub label: &'a str,
    pub row_width: f32,
    pub row_height: f32,
    pub bg: Option<Color32>,
    pub text_color: Color32,
    pub sense: egui::Sense,
}

pub(super) fn render_list_row(ui: &mut Ui, row: ListRow<'_>) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(row.row_width, row.row_height), row.sense);
    if let Some(color) = row.bg {
        ui.painter().rect_filled(rect, 0.0, color);
    }
    if response.hovered() && row.bg.is_none() {
        ui.painter().rect_filled(rect, 0.0, row_hover_fill());
    }
    // Single divider to avoid stacking strokes between rows.
    ui.painter()
        .line_segment([rect.left_bottom(), rect.right_bottom()], row_divider());
    let font_id = TextStyle::Button.resolve(ui.style());
    let padding = ui.spacing().button_padding.x;
    ui.painter().text(
        egui::pos2(rect.left() + padding, rect.center().y),
        Align2::LEFT_CENTER,
        row.label,
        font_id,
        row.text_color,
    );
    response
}
