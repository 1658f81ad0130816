use mindfield::constellation::{ConstellationStyle, draw_constellation};
use mindfield::geometry::SurfaceSize;
use mindfield::model::{Geometry, Point};
use mindfield::surface::Surface;
use mindfield::svg::SvgSurface;

fn sample() -> Geometry {
    Geometry {
        orientation: vec![Point::new(0.0, 0.0, "o").with_title("Origin & <start>")],
        texture: vec![Point::new(0.5, 0.5, "t1"), Point::new(-0.5, 0.5, "t2")],
    }
}

#[test]
fn constellation_document() {
    let mut svg = SvgSurface::new(SurfaceSize::new(800.0, 600.0));
    draw_constellation(&mut svg, &sample(), &ConstellationStyle::DEFAULT).unwrap();
    let doc = svg.finish();

    assert!(doc.starts_with("<svg "));
    assert!(doc.lines().next().is_some_and(|l| l.ends_with('>')));
    assert!(doc.contains(r#"width="800" height="600""#));
    assert!(doc.trim_end().ends_with("</svg>"));
    assert_eq!(doc.matches("<line ").count(), 2);
    assert_eq!(doc.matches("<circle ").count(), 3);
    assert_eq!(doc.matches("<text ").count(), 3);
    assert!(doc.contains(r#"<circle cx="400.00" cy="300.00""#));
    assert!(doc.contains("Origin &amp; &lt;start&gt;"));
    assert!(doc.contains(r##"fill="#ffd700""##));
    assert!(doc.contains(r##"fill="#00ffff""##));
}

#[test]
fn clear_discards_previous_pass() {
    let mut svg = SvgSurface::new(SurfaceSize::new(200.0, 100.0));
    draw_constellation(&mut svg, &sample(), &ConstellationStyle::DEFAULT).unwrap();
    svg.clear().unwrap();
    let doc = svg.finish();
    assert_eq!(doc.matches("<circle ").count(), 0);
    assert_eq!(doc.matches("<rect ").count(), 1);
}
