//! Game control buttons and interactions

use egui::{Align2, Color32, FontId, Rect, Rounding, Sense, Ui, Vec2, WidgetInfo, WidgetType};

use crate::ui_config::ColorScheme;

const RESET_LABEL: &str = "Reset Game";
const BUTTON_SIZE: Vec2 = Vec2::new(140.0, 40.0);

/// Game control buttons
pub struct GameControls;

impl GameControls {
    /// Button rectangle centered on `center`
    pub fn reset_rect(center: egui::Pos2) -> Rect {
        Rect::from_center_size(center, BUTTON_SIZE)
    }

    /// Render the reset button; returns whether it was clicked
    pub fn render(ui: &mut Ui, rect: Rect, colors: &ColorScheme) -> bool {
        let response = ui.interact(rect, ui.id().with("reset"), Sense::click());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, RESET_LABEL));

        if ui.is_rect_visible(rect) {
            let fill: Color32 = if response.hovered() {
                colors.button_hover.into()
            } else {
                colors.button.into()
            };

            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(4.0), fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                RESET_LABEL,
                FontId::proportional(16.0),
                colors.text.into(),
            );
        }

        response.clicked()
    }
}
