//! Small library to render a scene as svg.
//!
//! Only used by the binary and not exposed.

use std::fmt::{Display, Formatter};

use chaikin::bounding_box::BoundingBox;
use chaikin::draw::svg::path_data;
use chaikin::{Color, Scene};

type Rect = (f64, f64, f64, f64);

/// Space around the figures
const MARGIN: f64 = 25.0;

/// Height of one overlay text line
const LINE_HEIGHT: f64 = 20.0;

pub struct SVG {
    pub view_box: Rect,
    pub background: Color,
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (x, y, w, h) = self.view_box;
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            x, y, w, h
        )?;
        writeln!(
            f,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            x, y, w, h, self.background
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        Ok(())
    }
}

pub struct Path {
    pub stroke_color: Color,
    pub fill_color: Option<Color>,
    pub width: f64,
    pub d: String,
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<path stroke=\"{}\" fill=\"", self.stroke_color)?;
        match self.fill_color {
            Some(color) => write!(f, "{}", color)?,
            None => write!(f, "none")?,
        }
        writeln!(f, "\" stroke-width=\"{}\" d=\"{}\"/>", self.width, self.d)
    }
}

pub struct Text {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub content: String,
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"monospace\" font-size=\"{}\">{}</text>",
            self.x, self.y, self.color, LINE_HEIGHT, self.content
        )
    }
}

/* Methods actually processing the scene */
impl SVG {
    /// Draws every figure in order followed by the iteration and corner counters.
    pub fn from_scene(scene: &Scene) -> SVG {
        let view_box = match scene.bounding_box() {
            Some(bb) => {
                let BoundingBox { min, max } = bb.padded(MARGIN);
                // Room for the counters above the figures
                let top = min.y - 2.0 * LINE_HEIGHT;
                (min.x, top, max.x - min.x, max.y - top)
            }
            None => (0.0, 0.0, 100.0, 100.0),
        };

        let mut svg = SVG {
            view_box,
            background: Color::BLACK,
            elements: Vec::with_capacity(scene.figures().len() + 2),
        };

        for figure in scene.figures() {
            svg.add_elem(Path {
                stroke_color: figure.style.color,
                fill_color: figure.is_filled().then_some(figure.style.color),
                width: figure.style.width,
                d: path_data(&figure.shape),
            });
        }

        let counters = [
            format!("iterations: {}", scene.iterations()),
            format!("corners: {}", scene.corner_count()),
        ];
        for (i, content) in counters.into_iter().enumerate() {
            svg.add_elem(Text {
                x: view_box.0 + 5.0,
                y: view_box.1 + (i + 1) as f64 * LINE_HEIGHT,
                color: Color::WHITE,
                content,
            });
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chaikin::Settings;

    #[test]
    fn demo_document() {
        let scene = Scene::demo(Settings::default()).unwrap();
        let document = SVG::from_scene(&scene).to_string();
        assert!(document.starts_with("<svg viewBox=\"20 -40 1155 815\""));
        assert_eq!(document.matches("<path ").count(), 8);
        assert_eq!(document.matches("fill=\"rgb(200,200,200)\"").count(), 2);
        assert!(document.contains(">iterations: 0</text>"));
        assert!(document.contains(">corners: 36</text>"));
        assert!(document.trim_end().ends_with("</svg>"));
    }
}
