//! Integration tests for the Renderer API
//!
//! These tests load a laid-out document fixture and check the drawing rules
//! end to end through the public API.

use float_cmp::assert_approx_eq;

use sdfv::{
    Renderer, SdfvError,
    config::RenderConfig,
    draw::{DrawCommand, RecordingContext, StrokeStyle},
    element::{Element, ElementGraph, ElementKind},
    geometry::{Bounds, Point},
    highlight::Highlight,
    ir::Sdfg,
    offset::offset_graph,
    render::Frame,
};

const PROGRAM: &str = include_str!("fixtures/program.json");

fn load() -> Sdfg {
    serde_json::from_str(PROGRAM).expect("Failed to parse fixture")
}

/// Collects every element of every nesting level, connectors included.
fn all_elements<'g, 'a>(graph: &'g ElementGraph<'a>, out: &mut Vec<&'g Element<'a>>) {
    for state in graph.nodes() {
        out.push(state);
        if let Some(dataflow) = state.dataflow() {
            for node in dataflow.nodes() {
                out.push(node);
                out.extend(node.connectors());
                if let Some(nested) = node.nested() {
                    all_elements(nested, out);
                }
            }
            out.extend(dataflow.edges());
        }
    }
    out.extend(graph.edges());
}

fn dataflow_node<'g, 'a>(graph: &'g ElementGraph<'a>, state: usize, node: usize) -> &'g Element<'a> {
    graph
        .node(state)
        .and_then(Element::dataflow)
        .and_then(|dataflow| dataflow.node(node))
        .expect("Fixture node exists")
}

fn draw_one(element: &Element<'_>) -> RecordingContext {
    let renderer = Renderer::default();
    let frame = Frame::new(renderer.theme(), &Highlight::None);
    let mut ctx = RecordingContext::new();
    element
        .draw(&mut ctx, Highlight::None, &frame)
        .expect("Failed to draw element");
    ctx
}

fn path_points(ctx: &RecordingContext) -> Vec<Point> {
    ctx.commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::MoveTo(point) | DrawCommand::LineTo(point) => Some(*point),
            _ => None,
        })
        .collect()
}

#[test]
fn test_render_fixture_to_svg() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let renderer = Renderer::new(RenderConfig::default()).expect("Invalid config");
    let result = renderer.render_svg(&graph, &Highlight::None);

    match result {
        Ok(svg) => {
            assert!(svg.contains("<svg"), "Output should contain SVG tag");
            assert!(svg.contains("</svg>"), "Output should be complete SVG");
            assert!(svg.contains("update"), "Tasklet label should be drawn");
            assert!(svg.contains("inner_state"), "Nested state should be drawn");
        }
        Err(err) => panic!("Failed to render: {err}"),
    }
}

#[test]
fn test_topleft_law_for_every_element() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let mut elements = Vec::new();
    all_elements(&graph, &mut elements);
    assert!(elements.len() > 15);

    for element in elements {
        let topleft = element.topleft();
        let position = element.position();
        let size = element.size();
        assert_approx_eq!(f32, topleft.x(), position.x() - size.width() / 2.0);
        assert_approx_eq!(f32, topleft.y(), position.y() - size.height() / 2.0);
    }
}

#[test]
fn test_tooltips_by_variant() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let state = graph.node(1).expect("State exists");
    assert_eq!(state.tooltip(), None);

    let inter_state = graph.edge(0).expect("Edge exists");
    assert_eq!(inter_state.tooltip(), Some("i < N"));
    assert_eq!(inter_state.endpoints(), Some((0, 1)));

    let tasklet = dataflow_node(&graph, 1, 1);
    assert_eq!(tasklet.tooltip(), None);
    assert_eq!(tasklet.connectors()[0].tooltip(), Some("IN_a"));
    assert_eq!(tasklet.connectors()[1].tooltip(), Some("OUT_b"));
}

#[test]
fn test_nested_node_label_is_empty() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let nested = dataflow_node(&graph, 1, 6);
    assert!(matches!(nested.kind(), ElementKind::NestedGraph { .. }));
    assert_eq!(nested.label(), "");
}

#[test]
fn test_access_node_strokes() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    // Non-transient array
    let ctx = draw_one(dataflow_node(&graph, 0, 0));
    let stroke = ctx.strokes().next().expect("Access node is stroked");
    assert_eq!(stroke.style().dash_pattern(), [1.0, 0.0]);
    assert_approx_eq!(f32, stroke.width(), 3.0);

    // Transient stream
    let ctx = draw_one(dataflow_node(&graph, 1, 3));
    let stroke = ctx.strokes().next().expect("Access node is stroked");
    assert_eq!(stroke.style(), StrokeStyle::Dashed);
    assert_eq!(stroke.style().dash_pattern(), [5.0, 3.0]);
    assert_approx_eq!(f32, stroke.width(), 1.0);
}

#[test]
fn test_collapsed_scope_hexagon_bounds() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let scope = dataflow_node(&graph, 1, 4);
    assert!(scope.is_collapsed());

    let ctx = draw_one(scope);
    let points = path_points(&ctx);
    assert_eq!(points.len(), 7);

    let bounds = Bounds::from_points(points).expect("Hexagon has points");
    let expected = scope.bounds();
    assert_approx_eq!(f32, bounds.min_x(), expected.min_x());
    assert_approx_eq!(f32, bounds.min_y(), expected.min_y());
    assert_approx_eq!(f32, bounds.width(), scope.size().width());
    assert_approx_eq!(f32, bounds.height(), scope.size().height());
}

#[test]
fn test_entry_and_exit_trapezoids_differ() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let entry = dataflow_node(&graph, 1, 0);
    let exit = dataflow_node(&graph, 1, 2);

    let entry_points = path_points(&draw_one(entry));
    let exit_points = path_points(&draw_one(exit));

    // The first side drawn is the wide one.
    let entry_top = entry.topleft().y();
    assert_approx_eq!(f32, entry_points[0].y(), entry_top);
    assert_approx_eq!(f32, entry_points[1].y(), entry_top);

    let exit_bottom = exit.topleft().y() + exit.size().height();
    assert_approx_eq!(f32, exit_points[0].y(), exit_bottom);
    assert_approx_eq!(f32, exit_points[1].y(), exit_bottom);
}

#[test]
fn test_three_point_edge() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let edge = graph
        .node(1)
        .and_then(Element::dataflow)
        .and_then(|dataflow| dataflow.edge(0))
        .expect("Dataflow edge exists");
    assert_eq!(edge.tooltip(), Some("A[i]"));

    let ctx = draw_one(edge);
    let commands = ctx.commands();

    assert_eq!(commands[0], DrawCommand::BeginPath);
    assert_eq!(commands[1], DrawCommand::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(commands[2], DrawCommand::LineTo(Point::new(5.0, 0.0)));
    assert_eq!(
        commands[3],
        DrawCommand::QuadraticCurveTo {
            control: Point::new(10.0, 0.0),
            end: Point::new(20.0, 0.0),
        }
    );
    assert!(matches!(commands[4], DrawCommand::Stroke(_)));

    // Arrowhead in a frame at the last point, aligned with (20,0) - (10,0).
    assert_eq!(commands[5], DrawCommand::Save);
    assert_eq!(commands[6], DrawCommand::Translate(Point::new(20.0, 0.0)));
    match commands[7] {
        DrawCommand::Rotate(angle) => assert_approx_eq!(f32, angle, 0.0),
        ref other => panic!("Expected rotate, got {other:?}"),
    }
    assert!(matches!(commands.last(), Some(DrawCommand::Restore)));
}

#[test]
fn test_offset_moves_nested_levels() {
    let sdfg = load();
    let mut graph = ElementGraph::build(&sdfg).expect("Failed to build graph");
    let delta = Point::new(25.0, -10.0);

    let mut before = Vec::new();
    all_elements(&graph, &mut before);
    let before: Vec<Point> = before.iter().map(|element| element.position()).collect();

    offset_graph(&mut graph, delta);

    let mut after = Vec::new();
    all_elements(&graph, &mut after);
    assert_eq!(after.len(), before.len());
    for (element, original) in after.iter().zip(&before) {
        assert_eq!(element.position(), original.add_point(delta));
    }

    let nested_access = dataflow_node(&graph, 1, 6)
        .nested()
        .and_then(|nested| nested.node(0))
        .and_then(Element::dataflow)
        .and_then(|dataflow| dataflow.node(0))
        .expect("Nested access node exists");
    assert_eq!(nested_access.position(), Point::new(125.0, 390.0));
}

#[test]
fn test_missing_layout_is_reported() {
    let sdfg: Sdfg = serde_json::from_str(
        r#"{
            "states": [{
                "label": "s",
                "layout": {"x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0},
                "nodes": [{"label": "t", "type": "Tasklet"}]
            }]
        }"#,
    )
    .expect("Failed to parse document");

    let result = ElementGraph::build(&sdfg);
    assert!(matches!(result, Err(SdfvError::MissingLayout { .. })));
}

#[test]
fn test_unknown_array_aborts_frame() {
    let sdfg: Sdfg = serde_json::from_str(
        r#"{
            "states": [{
                "label": "s",
                "layout": {"x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0},
                "nodes": [{
                    "label": "B",
                    "type": "AccessNode",
                    "data": "B",
                    "layout": {"x": 0.0, "y": 0.0, "width": 4.0, "height": 4.0}
                }]
            }]
        }"#,
    )
    .expect("Failed to parse document");
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");

    let renderer = Renderer::default();
    let mut ctx = RecordingContext::new();
    let result = renderer.draw(&mut ctx, &graph, &Highlight::None, None);

    match result {
        Err(SdfvError::UnknownArray { name }) => assert_eq!(name, "B"),
        other => panic!("Expected unknown array error, got {other:?}"),
    }
}

#[test]
fn test_invalid_config_color() {
    let config: RenderConfig = toml::from_str(
        r#"
        [style]
        state_fill = "definitely not a color"
        "#,
    )
    .expect("Failed to parse config");

    let result = Renderer::new(config);
    assert!(matches!(result, Err(SdfvError::Config(_))));
}

#[test]
fn test_selection_changes_only_stroke_color() {
    let sdfg = load();
    let graph = ElementGraph::build(&sdfg).expect("Failed to build graph");
    let renderer = Renderer::default();

    let mut plain = RecordingContext::new();
    renderer
        .draw(&mut plain, &graph, &Highlight::None, None)
        .expect("Failed to draw");
    let mut selected = RecordingContext::new();
    renderer
        .draw(&mut selected, &graph, &Highlight::Select, None)
        .expect("Failed to draw");

    let plain_texts: Vec<_> = plain.texts().collect();
    let selected_texts: Vec<_> = selected.texts().collect();
    assert_eq!(plain_texts, selected_texts);

    let red = renderer.theme().stroke_color(Highlight::Select);
    assert!(selected.strokes().all(|stroke| stroke.color() == red));
}
