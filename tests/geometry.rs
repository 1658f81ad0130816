use mindfield::geometry::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn origin_maps_to_center() {
    let p = map_point(0.0, 0.0, SurfaceSize::new(800.0, 600.0));
    assert_eq!(p, Pixel::new(400.0, 300.0));
}

#[test]
fn unit_x_lands_at_spread() {
    let p = map_point(1.0, 0.0, SurfaceSize::new(800.0, 600.0));
    assert!(close(p.x, 680.0), "x = {}", p.x);
    assert!(close(p.y, 300.0));
}

#[test]
fn axes_scale_independently() {
    let m = CoordinateMapper::new(SurfaceSize::new(1000.0, 200.0));
    let p = m.map(-1.0, 1.0);
    assert!(close(p.x, 500.0 - 350.0));
    assert!(close(p.y, 100.0 + 70.0));
}

#[test]
fn out_of_range_points_fall_outside_surface() {
    let size = SurfaceSize::new(800.0, 600.0);
    let p = map_point(3.0, -3.0, size);
    assert!(!size.contains(p));
    assert!(size.contains(map_point(1.0, 1.0, size)));
}

#[test]
fn mapping_follows_the_current_size() {
    let small = map_point(0.5, 0.5, SurfaceSize::new(400.0, 400.0));
    let large = map_point(0.5, 0.5, SurfaceSize::new(1600.0, 1200.0));
    assert!(close(small.x, 270.0));
    assert!(close(large.x, 1080.0));
    assert!(close(large.y, 810.0));
}

#[test]
fn non_finite_input_does_not_panic() {
    let p = map_point(f64::NAN, f64::INFINITY, SurfaceSize::default());
    assert!(p.x.is_nan());
    assert!(p.y.is_infinite());
}
