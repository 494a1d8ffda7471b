//! The legend box under the heading.
//!
//! Three sections side by side: what a single arrow means, what a double
//! arrow means, and how to read chronology inside a panel. The chronology
//! section depends on the model, since only the timeline model pins nodes to
//! layers and distinguishes events from processes by shape.

use std::rc::Rc;

use interactions_core::{
    color::Color,
    draw::{
        Arrow, ArrowDefinition, ArrowDirection, Canvas, CircleDefinition, Drawable,
        RectangleDefinition, Shape, Text, TextDefinition,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{config::Palette, scenario::Model};

const PADDING: i32 = 10;
const SAMPLE_ARROW_LENGTH: i32 = 60;
const SAMPLE_RADIUS: f32 = 6.0;

pub(super) fn draw_legend(
    canvas: &mut Canvas,
    bounds: Bounds,
    model: Model,
    palette: &Palette,
    arrow: &Rc<ArrowDefinition>,
) {
    canvas.fill_rect(bounds, palette.legend);
    canvas.draw_rect_border(bounds, palette.legend_border);

    let (min_x, min_y) = bounds.min_point().to_pixel();
    let x0 = min_x + PADDING;
    let y0 = min_y + PADDING;
    let section_width = (bounds.width() as i32 - 2 * PADDING) / 3;

    label(canvas, "Legend", x0, y0 + 12, palette.legend_heading);

    let sections_y = y0 + 30;
    let mut legend = Legend {
        canvas,
        palette,
        arrow,
        y: sections_y,
    };
    legend.influence(x0);
    legend.mutualism(x0 + section_width);
    legend.chronology(x0 + 2 * section_width, model);
}

struct Legend<'a> {
    canvas: &'a mut Canvas,
    palette: &'a Palette,
    arrow: &'a Rc<ArrowDefinition>,
    y: i32,
}

impl Legend<'_> {
    fn influence(&mut self, x: i32) {
        self.heading("Influence", x);

        let start = x + 10;
        let end = start + SAMPLE_ARROW_LENGTH;
        self.sample_arrow((start, self.y), (end, self.y));
        self.text("Single arrow: influence (e.g. C → A)", end + 10, self.y + 4);
    }

    fn mutualism(&mut self, x: i32) {
        self.heading("Mutualism", x);

        let start = x + 10;
        let end = start + SAMPLE_ARROW_LENGTH;
        self.sample_arrow((start, self.y - 3), (end, self.y - 3));
        self.sample_arrow((end, self.y + 3), (start, self.y + 3));
        self.text("Double arrow: mutualism (A ↔ B)", end + 10, self.y + 4);
    }

    fn chronology(&mut self, x: i32, model: Model) {
        self.heading("Chronology", x);

        let x = x + 10;
        let y = self.y;
        let detail = self.palette.attribution;
        self.text("Within each panel:", x, y + 10);
        match model {
            Model::Basic => {
                label(self.canvas, "Upper row = earlier (no incoming arrows)", x, y + 30, detail);
                label(self.canvas, "Lower row = later (influenced by others)", x, y + 46, detail);
            }
            Model::Timeline => {
                label(self.canvas, "Top row = C and D (external causes)", x, y + 26, detail);
                label(self.canvas, "Rows below = A and B in time order", x, y + 42, detail);
                self.shape_samples(x, y + 56);
            }
        }
    }

    /// Draws a circle labeled as an event next to a rectangle labeled as a
    /// process, centered on row `y`.
    fn shape_samples(&mut self, x: i32, y: i32) {
        let fill = self.palette.node_fill;
        let border = self.palette.node_border;

        let circle = Shape::new(Rc::new(CircleDefinition::new(SAMPLE_RADIUS, fill, border)));
        circle.draw(self.canvas, Point::new((x + 6) as f32, y as f32));
        let event = "Event (instant)";
        self.text(event, x + 18, y + 4);

        let size = Size::new(SAMPLE_RADIUS * 3.0, SAMPLE_RADIUS * 1.8);
        let rectangle = Shape::new(Rc::new(RectangleDefinition::new(size, fill, border)));
        let rectangle_x = x + 18 + TextDefinition::default().measure(event) + 20;
        rectangle.draw(self.canvas, Point::new(rectangle_x as f32, y as f32));
        self.text("Process (duration)", rectangle_x + 15, y + 4);
    }

    fn heading(&mut self, content: &str, x: i32) {
        label(self.canvas, content, x, self.y - 8, self.palette.section_heading);
    }

    fn text(&mut self, content: &str, x: i32, baseline: i32) {
        label(self.canvas, content, x, baseline, self.palette.node_label);
    }

    /// Sample arrows are drawn at their full length, without shapes to clip to.
    fn sample_arrow(&mut self, from: (i32, i32), to: (i32, i32)) {
        let point = |(x, y): (i32, i32)| Point::new(x as f32, y as f32);
        Arrow::new(Rc::clone(self.arrow), ArrowDirection::Forward).draw(
            self.canvas,
            point(from),
            point(to),
        );
    }
}

fn label(canvas: &mut Canvas, content: &str, x: i32, baseline: i32, color: Color) {
    let style = TextDefinition::new(color);
    Text::new(&style, content).draw_at(canvas, x, baseline);
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u32 = 3060;

    fn legend_canvas(model: Model) -> (Canvas, Bounds) {
        let bounds = Bounds::new_from_top_left(Point::new(20.0, 70.0), Size::new(3020.0, 120.0));
        let palette = Palette::default();
        let arrow = Rc::new(ArrowDefinition::new(palette.edge));

        let mut canvas = Canvas::new(WIDTH, 200);
        canvas.fill(palette.background);
        draw_legend(&mut canvas, bounds, model, &palette, &arrow);
        (canvas, bounds)
    }

    fn count_in(canvas: &Canvas, color: Color) -> usize {
        canvas
            .image()
            .pixels()
            .filter(|pixel| Color::from(**pixel) == color)
            .count()
    }

    #[test]
    fn test_box_and_border() {
        let (canvas, _) = legend_canvas(Model::Basic);
        let palette = Palette::default();

        assert_eq!(canvas.pixel(20, 70), Some(palette.legend_border));
        assert_eq!(canvas.pixel(3039, 189), Some(palette.legend_border));
        assert_eq!(canvas.pixel(3030, 180), Some(palette.legend));
        assert_eq!(canvas.pixel(19, 70), Some(palette.background));
    }

    #[test]
    fn test_influence_arrow_is_unclipped() {
        let (canvas, _) = legend_canvas(Model::Basic);
        let edge = Palette::default().edge;

        // Sections start at y = 110; the arrow runs from x = 40 to x = 100
        assert_eq!(canvas.pixel(40, 110), Some(edge));
        assert_eq!(canvas.pixel(70, 110), Some(edge));
        assert_eq!(canvas.pixel(100, 110), Some(edge));
        assert_ne!(canvas.pixel(101, 110), Some(edge));
    }

    #[test]
    fn test_mutualism_has_two_arrows() {
        let (canvas, _) = legend_canvas(Model::Basic);
        let edge = Palette::default().edge;

        // Second section starts at x = 30 + 1000
        let x = 1030 + 40;
        assert_eq!(canvas.pixel(x, 107), Some(edge));
        assert_eq!(canvas.pixel(x, 113), Some(edge));
        assert_ne!(canvas.pixel(x, 110), Some(edge));
    }

    #[test]
    fn test_only_timeline_has_shape_samples() {
        let node_fill = Palette::default().node_fill;

        let (basic, _) = legend_canvas(Model::Basic);
        assert_eq!(count_in(&basic, node_fill), 0);

        let (timeline, _) = legend_canvas(Model::Timeline);
        assert!(count_in(&timeline, node_fill) > 0);
    }
}
