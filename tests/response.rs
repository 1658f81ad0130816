use mindfield::error::Error;
use mindfield::model::{QueryResponse, RenderMode};
use mindfield::response::{decode, decode_value};
use serde_json::json;

#[test]
fn non_empty_output_is_text() {
    let response = decode(r#"{"output": "✅ done"}"#).unwrap();
    assert_eq!(response, QueryResponse::Text("✅ done".into()));
    assert_eq!(response.mode(), RenderMode::Text);
}

#[test]
fn empty_or_missing_output_is_geometry() {
    for body in [r#"{"output": ""}"#, "{}", r#"{"output": null}"#] {
        let response = decode(body).unwrap();
        let QueryResponse::Geometry(geometry) = response else {
            panic!("{body} should decode as geometry");
        };
        assert!(geometry.is_empty());
    }
}

#[test]
fn output_wins_over_geometry() {
    let response = decode(r#"{"output": "hello", "orientation": [{"x":0,"y":0,"id":"a"}]}"#)
        .unwrap();
    assert_eq!(response.mode(), RenderMode::Text);
}

#[test]
fn null_point_lists_read_as_empty() {
    let response = decode(r#"{"orientation": null, "texture": [{"x":0.5,"y":-0.5,"id":"t"}]}"#)
        .unwrap();
    let QueryResponse::Geometry(geometry) = response else {
        panic!("expected geometry");
    };
    assert!(geometry.orientation.is_empty());
    assert_eq!(geometry.texture.len(), 1);
    assert_eq!(geometry.texture[0].id, "t");
    assert_eq!(geometry.texture[0].x, 0.5);
}

#[test]
fn optional_point_fields() {
    let response = decode_value(json!({
        "texture": [
            {"x": 1, "y": 2, "id": "full", "title": "Title", "excerpt": "Excerpt"},
            {"id": "bare"}
        ]
    }))
    .unwrap();
    let QueryResponse::Geometry(geometry) = response else {
        panic!("expected geometry");
    };
    let full = &geometry.texture[0];
    assert_eq!(full.title.as_deref(), Some("Title"));
    assert_eq!(full.label(), "Title");
    let bare = &geometry.texture[1];
    assert_eq!((bare.x, bare.y), (0.0, 0.0));
    assert_eq!(bare.label(), "bare");
}

#[test]
fn unknown_and_error_fields_are_tolerated() {
    let response = decode(r#"{"error": "partial", "extra": 1, "texture": []}"#).unwrap();
    assert_eq!(response.mode(), RenderMode::Constellation);
}

#[test]
fn malformed_json_is_a_decode_error() {
    assert!(matches!(decode("<html>502</html>"), Err(Error::Decode(_))));
    assert!(matches!(decode(r#"{"orientation": 3}"#), Err(Error::Decode(_))));
}
