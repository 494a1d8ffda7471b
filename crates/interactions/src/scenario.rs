//! Scenario model types.
//!
//! A [`Scenario`] is one combination of relationship settings between the
//! entities A, B, C and D, ready to be listed or drawn as one panel. The
//! categorical axes it is built from are:
//!
//! - [`RelationPattern`] - the direct link between A and B
//! - [`InfluencePattern`] - what C (and, independently, D) acts on
//! - [`Timing`] - the relative order of A and B ([`Model::Timeline`] only)
//! - [`EventKind`] - whether A and B are instants or durations ([`Model::Timeline`] only)
//!
//! Scenarios are produced by [`generate`] in a fixed nested-loop order and
//! are immutable afterwards.

mod generate;

pub use generate::{external_subtitle, generate, influence_fragment, relation_title};

use std::{fmt, str::FromStr};

/// The scenario model to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Model {
    /// Relation × C influence × D influence: 64 scenarios.
    #[default]
    Basic,
    /// Adds A/B timing and event kinds: 768 scenarios.
    Timeline,
}

impl Model {
    /// All models, in declaration order.
    pub const ALL: [Model; 2] = [Model::Basic, Model::Timeline];

    /// Returns the model name as accepted by [`Model::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Timeline => "timeline",
        }
    }

    /// Returns the number of scenarios [`generate`] yields for this model.
    pub fn scenario_count(self) -> usize {
        let basic = RelationPattern::ALL.len() * InfluencePattern::ALL.len().pow(2);
        match self {
            Self::Basic => basic,
            Self::Timeline => basic * Timing::ALL.len() * EventKind::PAIRS.len(),
        }
    }

    /// Returns the heading drawn above the grid.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Basic => "Interaction patterns of A and B with C and D (all basic combinations)",
            Self::Timeline => {
                "Interaction patterns of A and B with C and D, timing and event kinds (all combinations)"
            }
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown model '{s}' (expected 'basic' or 'timeline')"))
    }
}

/// One of the four named entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    A,
    B,
    C,
    D,
}

impl Entity {
    /// The order nodes are listed in within a scenario.
    pub const NODE_ORDER: [Entity; 4] = [Entity::C, Entity::D, Entity::A, Entity::B];

    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The direct relation between A and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationPattern {
    None,
    AToB,
    BToA,
    Mutual,
}

impl RelationPattern {
    pub const ALL: [RelationPattern; 4] = [Self::None, Self::AToB, Self::BToA, Self::Mutual];
}

/// What an external entity (C or D) influences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfluencePattern {
    None,
    OnA,
    OnB,
    OnBoth,
}

impl InfluencePattern {
    pub const ALL: [InfluencePattern; 4] = [Self::None, Self::OnA, Self::OnB, Self::OnBoth];

    /// Returns the targets influenced, A first.
    pub fn targets(self) -> &'static [Entity] {
        match self {
            Self::None => &[],
            Self::OnA => &[Entity::A],
            Self::OnB => &[Entity::B],
            Self::OnBoth => &[Entity::A, Entity::B],
        }
    }
}

/// The relative timing of A and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timing {
    ABeforeB,
    Simultaneous,
    BBeforeA,
}

impl Timing {
    pub const ALL: [Timing; 3] = [Self::ABeforeB, Self::Simultaneous, Self::BBeforeA];

    pub fn label(self) -> &'static str {
        match self {
            Self::ABeforeB => "A before B",
            Self::Simultaneous => "A and B together",
            Self::BBeforeA => "B before A",
        }
    }

    /// Returns the layers of A and B. Layer 0 is reserved for C and D.
    pub fn layers(self) -> (u32, u32) {
        match self {
            Self::ABeforeB => (1, 2),
            Self::Simultaneous => (1, 1),
            Self::BBeforeA => (2, 1),
        }
    }
}

/// Whether an entity is an instant or has a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Event,
    Process,
}

impl EventKind {
    /// The (A, B) kind pairs in enumeration order.
    pub const PAIRS: [(EventKind, EventKind); 4] = [
        (Self::Event, Self::Event),
        (Self::Event, Self::Process),
        (Self::Process, Self::Event),
        (Self::Process, Self::Process),
    ];

    /// Returns the phrase used in subtitles, with its article.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Event => "an event",
            Self::Process => "a process",
        }
    }

    pub fn shape(self) -> NodeShape {
        match self {
            Self::Event => NodeShape::Circle,
            Self::Process => NodeShape::Rectangle,
        }
    }
}

/// The outline a node is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeShape {
    #[default]
    Circle,
    Rectangle,
}

/// A node in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    entity: Entity,
    layer: Option<u32>,
    shape: NodeShape,
}

impl Node {
    /// Creates a circular node without a layer, as used by the basic model.
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            layer: None,
            shape: NodeShape::Circle,
        }
    }

    /// Creates a node pinned to a vertical layer, 0 being the earliest.
    pub fn layered(entity: Entity, layer: u32, shape: NodeShape) -> Self {
        Self {
            entity,
            layer: Some(layer),
            shape,
        }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn layer(&self) -> Option<u32> {
        self.layer
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }
}

/// A directed (or bidirectional) influence between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    from: Entity,
    to: Entity,
    bidirectional: bool,
}

impl Edge {
    pub fn new(from: Entity, to: Entity) -> Self {
        Self {
            from,
            to,
            bidirectional: false,
        }
    }

    pub fn bidirectional(from: Entity, to: Entity) -> Self {
        Self {
            from,
            to,
            bidirectional: true,
        }
    }

    pub fn from(&self) -> Entity {
        self.from
    }

    pub fn to(&self) -> Entity {
        self.to
    }

    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }
}

/// One enumerated combination, drawn as one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    title: String,
    subtitle: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Scenario {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            nodes,
            edges,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Returns the nodes in C, D, A, B order, restricted to those present.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges: the A–B edge first, then C's, then D's.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the node for `entity`, if it takes part in this scenario.
    pub fn node(&self, entity: Entity) -> Option<&Node> {
        self.nodes.iter().find(|node| node.entity == entity)
    }

    /// Returns `true` if any node is pinned to a layer.
    pub fn is_layered(&self) -> bool {
        self.nodes.iter().any(|node| node.layer.is_some())
    }
}
