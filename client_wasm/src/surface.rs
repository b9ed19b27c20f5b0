//! Immediate-mode 2D drawing surface

/// The drawing primitives the renderer needs. Coordinates are logical pixels.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    /// Fill a rectangle with a top-to-bottom gradient
    fn vertical_gradient(&mut self, x: f64, y: f64, w: f64, h: f64, top: &str, bottom: &str);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn circle(&mut self, cx: f64, cy: f64, r: f64, color: &str);
    /// Horizontally centred text
    fn text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str);
}

#[cfg(target_arch = "wasm32")]
impl Surface for web_sys::CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn vertical_gradient(&mut self, x: f64, y: f64, w: f64, h: f64, top: &str, bottom: &str) {
        let gradient = self.create_linear_gradient(x, y, x, y + h);
        let _ = gradient.add_color_stop(0.0, top);
        let _ = gradient.add_color_stop(1.0, bottom);
        self.set_fill_style_canvas_gradient(&gradient);
        self.fill_rect(x, y, w, h);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        self.fill_rect(x, y, w, h);
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        // Only fails for a negative radius
        let _ = self.arc(cx, cy, r, 0.0, std::f64::consts::TAU);
        self.fill();
    }

    fn text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str) {
        self.set_fill_style_str(color);
        self.set_font(font);
        self.set_text_align("center");
        let _ = self.fill_text(text, x, y);
    }
}

/// Records draw calls so tests can inspect a frame
#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCmd {
        Clear,
        Gradient { top: String, bottom: String },
        Rect { x: f64, y: f64, w: f64, h: f64, color: String },
        Circle { cx: f64, cy: f64, r: f64, color: String },
        Text { text: String, x: f64, y: f64, font: String },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub cmds: Vec<DrawCmd>,
    }

    impl RecordingSurface {
        pub fn texts(&self) -> Vec<&str> {
            self.cmds
                .iter()
                .filter_map(|cmd| match cmd {
                    DrawCmd::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn font_of(&self, wanted: &str) -> Option<&str> {
            self.cmds.iter().find_map(|cmd| match cmd {
                DrawCmd::Text { text, font, .. } if text == wanted => Some(font.as_str()),
                _ => None,
            })
        }

        pub fn rects_with_color(&self, wanted: &str) -> Vec<(f64, f64, f64, f64)> {
            self.cmds
                .iter()
                .filter_map(|cmd| match cmd {
                    DrawCmd::Rect { x, y, w, h, color } if color == wanted => Some((*x, *y, *w, *h)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.cmds.push(DrawCmd::Clear);
        }

        fn vertical_gradient(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, top: &str, bottom: &str) {
            self.cmds.push(DrawCmd::Gradient {
                top: top.to_string(),
                bottom: bottom.to_string(),
            });
        }

        fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
            self.cmds.push(DrawCmd::Rect {
                x,
                y,
                w,
                h,
                color: color.to_string(),
            });
        }

        fn circle(&mut self, cx: f64, cy: f64, r: f64, color: &str) {
            self.cmds.push(DrawCmd::Circle {
                cx,
                cy,
                r,
                color: color.to_string(),
            });
        }

        fn text(&mut self, text: &str, x: f64, y: f64, font: &str, _color: &str) {
            self.cmds.push(DrawCmd::Text {
                text: text.to_string(),
                x,
                y,
                font: font.to_string(),
            });
        }
    }
}
