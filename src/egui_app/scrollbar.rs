//! Custom scrollbar: a painted track whose thumb is placed from the travel
//! percentage, reporting pointer fractions back to the caller instead of
//! owning any scroll state itself.

use eframe::egui::{self, Color32, Rect, Sense, Ui, Vec2};

/// Width reserved for the scrollbar track.
pub const TRACK_WIDTH: f32 = 18.0;
const THUMB_HEIGHT: f32 = 24.0;

/// Outcome of rendering the scrollbar for one frame.
pub struct ScrollbarResponse {
    /// Normalized track fraction the user clicked or dragged to, if any.
    pub pointer_fraction: Option<f32>,
}

/// Paint the track and thumb; `travel` places the thumb in `[0, 1]`.
pub fn scrollbar(ui: &mut Ui, height: f32, travel: f32) -> ScrollbarResponse {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(TRACK_WIDTH, height), Sense::click_and_drag());

    let thumb_height = THUMB_HEIGHT.min(rect.height());
    let travel_height = (rect.height() - thumb_height).max(0.0);
    let thumb_top = rect.top() + travel.clamp(0.0, 1.0) * travel_height;
    let thumb_rect = Rect::from_min_size(
        egui::pos2(rect.left(), thumb_top),
        Vec2::new(rect.width(), thumb_height),
    );

    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, Color32::from_gray(28));
    let thumb_color = if response.hovered() || response.dragged() {
        Color32::from_gray(140)
    } else {
        Color32::from_gray(100)
    };
    painter.rect_filled(thumb_rect, 4.0, thumb_color);

    let pointer_fraction = if response.clicked() || response.dragged() {
        response.interact_pointer_pos().map(|pos| {
            if travel_height <= 0.0 {
                0.0
            } else {
                ((pos.y - rect.top() - thumb_height * 0.5) / travel_height).clamp(0.0, 1.0)
            }
        })
    } else {
        None
    };

    ScrollbarResponse { pointer_fraction }
}
