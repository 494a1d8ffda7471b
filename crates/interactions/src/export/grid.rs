//! Renders a whole grid: heading, legend and one panel per scenario.

use std::rc::Rc;

use indexmap::IndexMap;
use log::{debug, trace};

use interactions_core::{
    draw::{
        Arrow, ArrowDefinition, ArrowDirection, Canvas, CircleDefinition, Drawable,
        RectangleDefinition, Shape, ShapeWithText, Text, TextDefinition,
    },
    geometry::Point,
};

use super::legend;
use crate::{
    config::Palette,
    layout::{GridLayout, PanelLayout, PlacedNode},
    scenario::{Entity, Model, NodeShape, Scenario},
};

const ATTRIBUTION: &str = "Source: github.com/arran4/interactions";

/// Scale of the heading when it fits the image width.
const HEADING_SCALE: i32 = 2;

/// Draws scenarios onto a canvas sized by a [`GridLayout`].
#[derive(Debug)]
pub struct GridRenderer {
    layout: GridLayout,
    palette: Palette,
    model: Model,
    arrow: Rc<ArrowDefinition>,
}

impl GridRenderer {
    pub fn new(layout: GridLayout, palette: Palette, model: Model) -> Self {
        let arrow = Rc::new(ArrowDefinition::new(palette.edge));
        Self {
            layout,
            palette,
            model,
            arrow,
        }
    }

    /// Draws the full grid for `scenarios`, in order.
    pub fn render(&self, scenarios: &[Scenario]) -> Canvas {
        let mut canvas = Canvas::new(self.layout.width(), self.layout.height());
        canvas.fill(self.palette.background);

        self.draw_heading(&mut canvas);
        legend::draw_legend(
            &mut canvas,
            self.layout.legend_bounds(),
            self.model,
            &self.palette,
            &self.arrow,
        );

        let body = TextDefinition::new(self.palette.title);
        for (index, scenario) in scenarios.iter().enumerate() {
            let panel = PanelLayout::new(self.layout.panel_bounds(index), scenario, &body);
            self.draw_panel(&mut canvas, scenario, &panel);
        }

        debug!(panels = scenarios.len(); "Grid drawn");
        canvas
    }

    fn draw_heading(&self, canvas: &mut Canvas) {
        let center_x = (self.layout.width() / 2) as i32;
        let heading = self.model.heading();

        // Fall back to the small font when the large one would be clipped
        let available = (self.layout.width() - 2 * self.layout.margin()) as i32;
        let mut style = TextDefinition::new(self.palette.heading).with_scale(HEADING_SCALE);
        if style.measure(heading) > available {
            style = TextDefinition::new(self.palette.heading);
        }
        Text::new(&style, heading).draw_centered(canvas, center_x, self.layout.heading_baseline());

        let attribution = TextDefinition::new(self.palette.attribution);
        Text::new(&attribution, ATTRIBUTION).draw_centered(
            canvas,
            center_x,
            self.layout.attribution_baseline(),
        );
    }

    fn draw_panel(&self, canvas: &mut Canvas, scenario: &Scenario, panel: &PanelLayout) {
        trace!(title = scenario.title(); "Drawing panel");

        let bounds = panel.bounds();
        canvas.fill_rect(bounds, self.palette.panel);
        canvas.draw_rect_border(bounds, self.palette.panel_border);

        let title = TextDefinition::new(self.palette.title);
        let subtitle = TextDefinition::new(self.palette.subtitle);
        draw_lines(
            canvas,
            panel.title_lines(),
            &title,
            panel.text_x(),
            panel.title_baseline(),
            panel.line_height(),
        );
        draw_lines(
            canvas,
            panel.subtitle_lines(),
            &subtitle,
            panel.text_x(),
            panel.subtitle_baseline(),
            panel.line_height(),
        );

        let label = TextDefinition::new(self.palette.node_label);
        let nodes: IndexMap<Entity, (Point, ShapeWithText<'_>)> = panel
            .nodes()
            .map(|placed| {
                let node = ShapeWithText::new(
                    self.node_shape(placed),
                    Text::new(&label, placed.entity().name()),
                );
                (placed.entity(), (placed.center(), node))
            })
            .collect();

        // Edges first so nodes cover the arrow tails
        for edge in scenario.edges() {
            let (Some((from, from_node)), Some((to, to_node))) =
                (nodes.get(&edge.from()), nodes.get(&edge.to()))
            else {
                debug!(
                    from = edge.from().name(),
                    to = edge.to().name();
                    "Skipping edge to absent node"
                );
                continue;
            };

            let direction = if edge.is_bidirectional() {
                ArrowDirection::Bidirectional
            } else {
                ArrowDirection::Forward
            };
            trace!(
                from = edge.from().name(),
                direction = direction.to_string(),
                to = edge.to().name();
                "Drawing edge"
            );
            Arrow::new(Rc::clone(&self.arrow), direction).draw_between(
                canvas,
                (*from, from_node.shape()),
                (*to, to_node.shape()),
            );
        }

        for (center, node) in nodes.values() {
            node.draw(canvas, *center);
        }
    }

    fn node_shape(&self, placed: &PlacedNode) -> Shape {
        let fill = self.palette.node_fill;
        let border = self.palette.node_border;
        match placed.shape() {
            NodeShape::Circle => {
                Shape::new(Rc::new(CircleDefinition::new(placed.radius(), fill, border)))
            }
            NodeShape::Rectangle => {
                Shape::new(Rc::new(RectangleDefinition::new(placed.size(), fill, border)))
            }
        }
    }
}

fn draw_lines(
    canvas: &mut Canvas,
    lines: &[String],
    style: &TextDefinition,
    x: i32,
    baseline: i32,
    line_height: i32,
) {
    for (index, line) in lines.iter().enumerate() {
        Text::new(style, line.as_str()).draw_at(canvas, x, baseline + index as i32 * line_height);
    }
}
