//! SVG snapshot of the board
//!
//! One element per form, in board order, on a canvas-sized gray background.

use std::fmt::Write;

use crate::consts::BACKGROUND_COLOR;
use crate::sim::{Form, FormKind, GameState};

/// Color by size: big forms are calm blue, the small valuable ones go red
fn size_color(width: f32, max_width: f32) -> [u8; 3] {
    let t = (1.0 - width / max_width.max(1.0)).clamp(0.0, 1.0);

    let (r, g, b) = if t < 0.5 {
        // Blue to green
        let u = t / 0.5;
        (0.2, 0.4 + 0.4 * u, 1.0 - 0.6 * u)
    } else {
        // Green to red
        let u = (t - 0.5) / 0.5;
        (0.2 + 0.8 * u, 0.8 - 0.5 * u, 0.4 - 0.2 * u)
    };

    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

fn hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// A single form as an SVG element
pub fn form_element(form: &Form, max_width: f32) -> String {
    let fill = hex(size_color(form.width(), max_width));
    match form.kind {
        FormKind::Circle { radius } => {
            let c = form.center();
            format!(
                r#"<circle data-id="{}" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                form.id, c.x, c.y, radius, fill
            )
        }
        FormKind::Square { side } => format!(
            r#"<rect data-id="{}" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            form.id, form.pos.x, form.pos.y, side, side, fill
        ),
    }
}

/// Render the whole board with the score underneath the forms
pub fn render_svg(state: &GameState) -> String {
    let canvas = state.canvas;
    let tuning = &state.service.tuning;
    let max_width = (tuning.max_circle_radius * 2.0).max(tuning.max_square_side);

    let mut out = String::with_capacity(128 + state.forms.len() * 96);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
    let _ = write!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        BACKGROUND_COLOR
    );
    for form in &state.forms {
        out.push_str(&form_element(form, max_width));
    }
    let _ = write!(
        out,
        r#"<text x="8" y="{:.0}" fill="white" font-family="sans-serif">Score : {}</text>"#,
        canvas.height - 8.0,
        state.score
    );
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    #[test]
    fn test_form_elements() {
        let circle = Form::circle(4, Vec2::new(50.0, 60.0), 10.0, Vec2::ZERO);
        let el = form_element(&circle, 120.0);
        assert!(el.starts_with(r#"<circle data-id="4" cx="50.00" cy="60.00" r="10.00""#));

        let square = Form::square(5, Vec2::new(1.0, 2.0), 30.0, Vec2::ZERO);
        let el = form_element(&square, 120.0);
        assert!(el.starts_with(r#"<rect data-id="5" x="1.00" y="2.00" width="30.00""#));
    }

    #[test]
    fn test_size_color_extremes() {
        assert_eq!(size_color(120.0, 120.0), [51, 102, 255]);
        let small = size_color(1.0, 120.0);
        assert!(small[0] > small[2]);
    }

    #[test]
    fn test_render_svg_document() {
        let mut state = GameState::new(&Settings::with_canvas(320.0, 200.0), 1).unwrap();
        state.forms.push(Form::circle(1, Vec2::new(50.0, 50.0), 10.0, Vec2::ZERO));
        state.forms.push(Form::square(2, Vec2::new(100.0, 100.0), 20.0, Vec2::ZERO));
        state.score = 17;

        let svg = render_svg(&state);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="200""#));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"fill="gray""#));
        assert!(svg.contains("Score : 17"));
        // Board order
        let circle_at = svg.find("<circle").unwrap();
        let rect_at = svg.find(r#"<rect data-id="2""#).unwrap();
        assert!(circle_at < rect_at);
    }
}
