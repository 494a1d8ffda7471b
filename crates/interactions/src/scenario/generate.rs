//! Scenario enumeration.

use log::trace;

use super::{
    Edge, Entity, EventKind, InfluencePattern, Model, Node, RelationPattern, Scenario, Timing,
};

/// Enumerates every scenario of `model` as a cartesian product of its axes.
///
/// The result is a pure function of the loop indices: the relation is the
/// outermost loop, then C's influence, then D's. The timeline model nests
/// timing and then the (A, B) event kinds inside those.
///
/// # Examples
///
/// ```
/// # use interactions::scenario::{Model, generate};
/// let scenarios = generate(Model::Basic);
/// assert_eq!(scenarios.len(), 64);
/// assert_eq!(scenarios[0].title(), "A & B: no direct link");
/// assert_eq!(
///     scenarios[0].subtitle(),
///     "C has no effect on A or B; D has no effect on A or B"
/// );
/// ```
pub fn generate(model: Model) -> Vec<Scenario> {
    let mut scenarios = Vec::with_capacity(model.scenario_count());

    for relation in RelationPattern::ALL {
        for c in InfluencePattern::ALL {
            for d in InfluencePattern::ALL {
                match model {
                    Model::Basic => scenarios.push(basic_scenario(relation, c, d)),
                    Model::Timeline => {
                        for timing in Timing::ALL {
                            for kinds in EventKind::PAIRS {
                                scenarios.push(timeline_scenario(relation, c, d, timing, kinds));
                            }
                        }
                    }
                }
            }
        }
    }

    trace!(model = model.name(), count = scenarios.len(); "Generated scenarios");
    scenarios
}

/// Returns the panel title for a relation between A and B.
pub fn relation_title(relation: RelationPattern) -> &'static str {
    match relation {
        RelationPattern::None => "A & B: no direct link",
        RelationPattern::AToB => "A → B",
        RelationPattern::BToA => "B → A",
        RelationPattern::Mutual => "A ↔ B (mutualism)",
    }
}

/// Returns the predicate describing what an external entity influences.
pub fn influence_fragment(influence: InfluencePattern) -> &'static str {
    match influence {
        InfluencePattern::None => "has no effect on A or B",
        InfluencePattern::OnA => "influences A only",
        InfluencePattern::OnB => "influences B only",
        InfluencePattern::OnBoth => "influences both A and B",
    }
}

/// Describes the influence of C and D in one sentence.
///
/// ```
/// # use interactions::scenario::{InfluencePattern, external_subtitle};
/// assert_eq!(
///     external_subtitle(InfluencePattern::OnA, InfluencePattern::OnBoth),
///     "C influences A only; D influences both A and B"
/// );
/// ```
pub fn external_subtitle(c: InfluencePattern, d: InfluencePattern) -> String {
    format!("C {}; D {}", influence_fragment(c), influence_fragment(d))
}

fn basic_scenario(relation: RelationPattern, c: InfluencePattern, d: InfluencePattern) -> Scenario {
    let nodes = present_entities(c, d).map(Node::new).collect();

    Scenario::new(
        relation_title(relation),
        external_subtitle(c, d),
        nodes,
        edges(relation, c, d),
    )
}

fn timeline_scenario(
    relation: RelationPattern,
    c: InfluencePattern,
    d: InfluencePattern,
    timing: Timing,
    (a_kind, b_kind): (EventKind, EventKind),
) -> Scenario {
    let (a_layer, b_layer) = timing.layers();
    let nodes = present_entities(c, d)
        .map(|entity| match entity {
            Entity::A => Node::layered(entity, a_layer, a_kind.shape()),
            Entity::B => Node::layered(entity, b_layer, b_kind.shape()),
            Entity::C | Entity::D => Node::layered(entity, 0, EventKind::Event.shape()),
        })
        .collect();

    let title = format!("{} | {}", relation_title(relation), timing.label());
    let subtitle = format!(
        "A is {}, B is {}. {}",
        a_kind.phrase(),
        b_kind.phrase(),
        external_subtitle(c, d)
    );

    Scenario::new(title, subtitle, nodes, edges(relation, c, d))
}

/// Entities taking part, in node order. A and B are always present.
fn present_entities(c: InfluencePattern, d: InfluencePattern) -> impl Iterator<Item = Entity> {
    Entity::NODE_ORDER.into_iter().filter(move |entity| match entity {
        Entity::C => c != InfluencePattern::None,
        Entity::D => d != InfluencePattern::None,
        Entity::A | Entity::B => true,
    })
}

fn edges(relation: RelationPattern, c: InfluencePattern, d: InfluencePattern) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(5);

    match relation {
        RelationPattern::None => {}
        RelationPattern::AToB => edges.push(Edge::new(Entity::A, Entity::B)),
        RelationPattern::BToA => edges.push(Edge::new(Entity::B, Entity::A)),
        RelationPattern::Mutual => edges.push(Edge::bidirectional(Entity::A, Entity::B)),
    }

    for (source, influence) in [(Entity::C, c), (Entity::D, d)] {
        edges.extend(
            influence
                .targets()
                .iter()
                .map(|&target| Edge::new(source, target)),
        );
    }

    edges
}
