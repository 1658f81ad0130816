use mindfield::color::Rgba;
use mindfield::constellation::*;
use mindfield::geometry::{Pixel, SurfaceSize};
use mindfield::model::{Geometry, Point};
use mindfield::surface::{DisplayList, DrawCommand};

fn surface() -> DisplayList {
    DisplayList::new(SurfaceSize::new(800.0, 600.0))
}

#[test]
fn empty_orientation_draws_points_without_edges() {
    let geometry = Geometry {
        orientation: vec![],
        texture: vec![
            Point::new(0.1, 0.1, "t1"),
            Point::new(0.2, 0.2, "t2"),
            Point::new(0.3, 0.3, "t3"),
        ],
    };
    let mut list = surface();
    let stats = draw_constellation(&mut list, &geometry, &ConstellationStyle::DEFAULT).unwrap();
    assert_eq!(stats.edges, 0);
    assert_eq!(stats.texture_points, 3);
    assert_eq!(list.line_count(), 0);
    assert_eq!(list.circle_count(), 3);
}

#[test]
fn edges_pair_by_cyclic_index_and_precede_points() {
    let geometry = Geometry {
        orientation: vec![Point::new(0.0, 0.0, "a")],
        texture: vec![Point::new(1.0, 1.0, "b"), Point::new(-1.0, -1.0, "c")],
    };
    let mut list = surface();
    let stats = draw_constellation(&mut list, &geometry, &ConstellationStyle::DEFAULT).unwrap();
    assert_eq!(stats.orientation_points, 1);
    assert_eq!(stats.texture_points, 2);
    assert_eq!(stats.edges, 2);

    let commands = list.commands();
    assert_eq!(commands[0], DrawCommand::Clear);
    let center = Pixel::new(400.0, 300.0);
    for command in &commands[1..3] {
        match command {
            DrawCommand::Line { from, .. } => assert_eq!(*from, center),
            other => panic!("expected an edge, got {other:?}"),
        }
    }
    assert!(
        commands[3..]
            .iter()
            .all(|c| !matches!(c, DrawCommand::Line { .. })),
        "no edge after the first point"
    );
    assert_eq!(list.labels(), vec!["a", "b", "c"]);
}

#[test]
fn partners_wrap_around_orientation() {
    let geometry = Geometry {
        orientation: vec![Point::new(-0.5, 0.0, "o0"), Point::new(0.5, 0.0, "o1")],
        texture: (0..5).map(|i| Point::new(0.0, 0.5, format!("t{i}"))).collect(),
    };
    let partners: Vec<&str> = (0..5)
        .map(|i| geometry.partner_of(i).map(|p| p.id.as_str()).unwrap())
        .collect();
    assert_eq!(partners, vec!["o0", "o1", "o0", "o1", "o0"]);

    let mut list = surface();
    draw_constellation(&mut list, &geometry, &ConstellationStyle::DEFAULT).unwrap();
    let starts: Vec<f64> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, .. } => Some(from.x),
            _ => None,
        })
        .collect();
    assert_eq!(starts.len(), 5);
    assert!(starts[0] < 400.0 && starts[1] > 400.0 && starts[2] < 400.0);
}

#[test]
fn categories_are_drawn_in_two_passes_with_their_colors() {
    let geometry = Geometry {
        orientation: vec![Point::new(0.0, 0.0, "o1"), Point::new(0.1, 0.0, "o2")],
        texture: vec![Point::new(0.2, 0.0, "t1"), Point::new(0.3, 0.0, "t2")],
    };
    let mut list = surface();
    draw_constellation(&mut list, &geometry, &ConstellationStyle::DEFAULT).unwrap();
    let fills: Vec<Rgba> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![Rgba::GOLD, Rgba::GOLD, Rgba::CYAN, Rgba::CYAN]);
}

#[test]
fn label_follows_fallback_chain() {
    let bare = Point::new(0.0, 0.0, "only-id");
    assert_eq!(bare.label(), "only-id");

    let excerpt: String = "abcdefghij".repeat(6);
    assert_eq!(excerpt.len(), 60);
    let with_excerpt = Point::new(0.0, 0.0, "id").with_excerpt(excerpt.clone());
    assert_eq!(with_excerpt.label(), &excerpt[..48]);

    let titled = with_excerpt.clone().with_title("Title");
    assert_eq!(titled.label(), "Title");

    let empty_title = Point::new(0.0, 0.0, "id").with_title("");
    assert_eq!(empty_title.label(), "id");
}

#[test]
fn excerpt_truncation_respects_char_boundaries() {
    let excerpt = "é".repeat(60);
    let p = Point::new(0.0, 0.0, "id").with_excerpt(excerpt);
    assert_eq!(p.label().chars().count(), 48);
}

#[test]
fn labels_sit_beside_their_discs() {
    let geometry = Geometry {
        orientation: vec![Point::new(0.0, 0.0, "a").with_title("Alpha")],
        texture: vec![],
    };
    let mut list = surface();
    draw_constellation(&mut list, &geometry, &ConstellationStyle::DEFAULT).unwrap();
    match &list.commands()[2] {
        DrawCommand::Text { pos, text, .. } => {
            assert_eq!(text, "Alpha");
            assert_eq!(*pos, Pixel::new(410.0, 303.0));
        }
        other => panic!("expected a label, got {other:?}"),
    }
}

#[test]
fn every_pass_starts_from_a_clear_surface() {
    let first = Geometry {
        orientation: vec![Point::new(0.0, 0.0, "a")],
        texture: vec![Point::new(0.5, 0.5, "b")],
    };
    let mut list = surface();
    draw_constellation(&mut list, &first, &ConstellationStyle::DEFAULT).unwrap();
    draw_constellation(&mut list, &Geometry::default(), &ConstellationStyle::DEFAULT).unwrap();
    assert_eq!(list.commands(), &[DrawCommand::Clear]);
    assert_eq!(list.clear_count(), 1);
}
