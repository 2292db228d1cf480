// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deep-space theme: gradient backdrop and light-on-dark widget styling

use egui::{epaint::Mesh, Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::ui_config::ColorScheme;

/// Apply the theme to the egui context
pub fn apply_space_theme(ctx: &egui::Context, colors: &ColorScheme) {
    let text: Color32 = colors.text.into();
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = Color32::TRANSPARENT;
    style.visuals.override_text_color = Some(text);

    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, text);
    style.visuals.widgets.active.fg_stroke = Stroke::new(2.0, text);

    style.visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    ctx.set_style(style);
}

/// Diagonal three-stop gradient from the top-left to the bottom-right corner
pub fn gradient_mesh(rect: Rect, colors: &ColorScheme) -> Mesh {
    let start: Color32 = colors.background_start.into();
    let middle: Color32 = colors.background_middle.into();
    let end: Color32 = colors.background_end.into();

    let mut mesh = Mesh::default();
    // Corner order: top-left, top-right, bottom-right, bottom-left, with the
    // off-diagonal corners sitting halfway along the gradient
    mesh.colored_vertex(rect.left_top(), start);
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), end);
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.colored_vertex(rect.center(), middle);

    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        mesh.add_triangle(a, b, 4);
    }
    mesh
}

pub fn paint_background(painter: &Painter, rect: Rect, colors: &ColorScheme) {
    painter.add(Shape::mesh(gradient_mesh(rect, colors)));
}

/// Rotate `point` around `center` by `angle` radians
pub fn rotate_around(point: Pos2, center: Pos2, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Pos2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}
