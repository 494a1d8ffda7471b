//! Placement of text and nodes within one scenario panel.
//!
//! The panel's top holds the wrapped title and subtitle. Below them are two
//! node rows, pushed down by however many extra text lines wrapping produced.
//! Nodes go into rows either by their explicit layer or, when no node has
//! one, by counting incoming edges:
//!
//! - a node with no incoming edge is early and sits on the upper row
//! - every other node is later and sits on the lower row
//! - if no node is early (every node is influenced), all share the upper row
//!
//! A bidirectional edge counts as incoming for both of its ends.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use log::trace;

use interactions_core::{
    draw::{TextDefinition, wrap_lines},
    geometry::{Bounds, Point, Size},
};

use crate::scenario::{Entity, NodeShape, Scenario};

/// Horizontal inset of the title and subtitle.
const TEXT_INSET: i32 = 10;
/// Baseline of the first title line, from the panel top.
const TITLE_BASELINE: i32 = 22;
/// Gap between the last title line and the first subtitle baseline.
const SUBTITLE_GAP: i32 = 6;
/// Horizontal inset of the first and last node in a row.
const ROW_INSET: i32 = 40;
/// Upper row center, from the panel top, before text overflow.
const UPPER_ROW: i32 = 90;
/// Lower row center, from the panel top, before text overflow.
const LOWER_ROW: i32 = 170;
/// Space kept free below the lower row.
const BOTTOM_CLEARANCE: i32 = 30;
/// Node radius when at most two rows are used.
const NODE_RADIUS: f32 = 20.0;

/// A node with its final position and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedNode {
    entity: Entity,
    shape: NodeShape,
    center: Point,
    radius: f32,
}

impl PlacedNode {
    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the radius of a circle node. Rectangles are sized from it.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the outer size of the node.
    pub fn size(&self) -> Size {
        match self.shape {
            NodeShape::Circle => Size::new(self.radius * 2.0, self.radius * 2.0),
            NodeShape::Rectangle => Size::new(self.radius * 3.0, self.radius * 1.8),
        }
    }
}

/// The computed layout of one panel.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    bounds: Bounds,
    title_lines: Vec<String>,
    subtitle_lines: Vec<String>,
    line_height: i32,
    upper_row: i32,
    lower_row: i32,
    nodes: IndexMap<Entity, PlacedNode>,
}

impl PanelLayout {
    /// Lays out `scenario` inside `bounds`, measuring text with `text`.
    pub fn new(bounds: Bounds, scenario: &Scenario, text: &TextDefinition) -> Self {
        let (min_x, min_y) = bounds.min_point().to_pixel();
        let max_x = bounds.max_x() as i32;
        let max_y = bounds.max_y() as i32;

        let text_width = bounds.width() as i32 - 2 * TEXT_INSET;
        let title_lines = wrap_lines(scenario.title(), text_width, text);
        let subtitle_lines = wrap_lines(scenario.subtitle(), text_width, text);
        let line_height = text.line_height();

        let title_height = title_lines.len() as i32 * line_height;
        let subtitle_height = subtitle_lines.len() as i32 * line_height;
        let extra = ((title_height - line_height) + (subtitle_height - line_height)).max(0);

        let lower_row = (min_y + LOWER_ROW + extra).min(max_y - BOTTOM_CLEARANCE);
        let upper_row = (min_y + UPPER_ROW + extra).min(lower_row);

        let mut layout = Self {
            bounds,
            title_lines,
            subtitle_lines,
            line_height,
            upper_row,
            lower_row,
            nodes: IndexMap::with_capacity(scenario.nodes().len()),
        };
        layout.place_nodes(scenario, min_x + ROW_INSET, max_x - ROW_INSET);

        trace!(
            title = scenario.title(),
            extra,
            upper_row = layout.upper_row,
            lower_row = layout.lower_row;
            "Panel laid out"
        );

        layout
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the x coordinate where title and subtitle lines start.
    pub fn text_x(&self) -> i32 {
        self.bounds.min_x() as i32 + TEXT_INSET
    }

    pub fn title_lines(&self) -> &[String] {
        &self.title_lines
    }

    pub fn subtitle_lines(&self) -> &[String] {
        &self.subtitle_lines
    }

    /// Returns the baseline of the first title line.
    pub fn title_baseline(&self) -> i32 {
        self.bounds.min_y() as i32 + TITLE_BASELINE
    }

    /// Returns the baseline of the first subtitle line.
    pub fn subtitle_baseline(&self) -> i32 {
        self.title_baseline() + self.title_lines.len() as i32 * self.line_height + SUBTITLE_GAP
    }

    /// Returns the distance between wrapped text baselines.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Returns the y coordinate of the upper node row.
    pub fn upper_row(&self) -> i32 {
        self.upper_row
    }

    /// Returns the y coordinate of the lower node row.
    pub fn lower_row(&self) -> i32 {
        self.lower_row
    }

    /// Returns the placed nodes in the scenario's node order.
    pub fn nodes(&self) -> impl Iterator<Item = &PlacedNode> {
        self.nodes.values()
    }

    /// Returns the placed node for `entity`.
    pub fn node(&self, entity: Entity) -> Option<&PlacedNode> {
        self.nodes.get(&entity)
    }

    fn place_nodes(&mut self, scenario: &Scenario, left: i32, right: i32) {
        let rows = if scenario.is_layered() {
            self.layered_rows(scenario)
        } else {
            self.inferred_rows(scenario)
        };

        let radius = node_radius(&rows);
        let mut positions: IndexMap<Entity, Point> = IndexMap::new();
        for (y, entities) in &rows {
            for (x, entity) in spread(left, right, entities.len()).zip(entities) {
                positions.insert(*entity, Point::new(x as f32, *y as f32));
            }
        }

        let fallback = Point::new(
            ((left + right) / 2) as f32,
            ((self.upper_row + self.lower_row) / 2) as f32,
        );
        for node in scenario.nodes() {
            let center = positions
                .get(&node.entity())
                .copied()
                .unwrap_or(fallback);
            self.nodes.insert(
                node.entity(),
                PlacedNode {
                    entity: node.entity(),
                    shape: node.shape(),
                    center,
                    radius,
                },
            );
        }
    }

    /// Groups nodes by layer, spreading the layers evenly between the rows.
    fn layered_rows(&self, scenario: &Scenario) -> Vec<(i32, Vec<Entity>)> {
        let mut layers: BTreeMap<u32, Vec<Entity>> = BTreeMap::new();
        for node in scenario.nodes() {
            if let Some(layer) = node.layer() {
                layers.entry(layer).or_default().push(node.entity());
            }
        }

        let count = layers.len() as i32;
        layers
            .into_values()
            .enumerate()
            .map(|(index, entities)| {
                let y = if count > 1 {
                    self.upper_row + (self.lower_row - self.upper_row) * index as i32 / (count - 1)
                } else {
                    self.upper_row
                };
                (y, entities)
            })
            .collect()
    }

    /// Splits nodes into early and late rows by counting incoming edges.
    fn inferred_rows(&self, scenario: &Scenario) -> Vec<(i32, Vec<Entity>)> {
        let mut incoming: IndexMap<Entity, usize> = scenario
            .nodes()
            .iter()
            .map(|node| (node.entity(), 0))
            .collect();
        for edge in scenario.edges() {
            *incoming.entry(edge.to()).or_default() += 1;
            if edge.is_bidirectional() {
                *incoming.entry(edge.from()).or_default() += 1;
            }
        }

        let (early, late): (Vec<Entity>, Vec<Entity>) = scenario
            .nodes()
            .iter()
            .map(|node| node.entity())
            .partition(|entity| incoming.get(entity).copied().unwrap_or_default() == 0);

        if early.is_empty() {
            return vec![(self.upper_row, late)];
        }
        vec![(self.upper_row, early), (self.lower_row, late)]
    }
}

/// Returns `count` x coordinates: a single node is centered, more are
/// spread evenly from `left` to `right`.
fn spread(left: i32, right: i32, count: usize) -> impl Iterator<Item = i32> {
    let last = count.saturating_sub(1) as i32;
    (0..count as i32).map(move |index| {
        if last == 0 {
            (left + right) / 2
        } else {
            left + (right - left) * index / last
        }
    })
}

/// Nodes shrink when more than two rows share the vertical space.
fn node_radius(rows: &[(i32, Vec<Entity>)]) -> f32 {
    let occupied: Vec<i32> = rows
        .iter()
        .filter(|(_, entities)| !entities.is_empty())
        .map(|(y, _)| *y)
        .collect();
    if occupied.len() <= 2 {
        return NODE_RADIUS;
    }

    let spacing = occupied
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .min()
        .unwrap_or_default() as f32;
    NODE_RADIUS.min(spacing * 0.35)
}
