use mindfield::color::{Rgba, parse_color};

#[test]
fn named_colors() {
    assert_eq!(parse_color("gold"), Some(Rgba::GOLD));
    assert_eq!(parse_color("Cyan"), Some(Rgba::CYAN));
    assert_eq!(parse_color(" limegreen "), Some(Rgba::rgb(50, 205, 50)));
    assert_eq!(parse_color("chartreuse-ish"), None);
}

#[test]
fn hex_colors() {
    assert_eq!(parse_color("#ffd700"), Some(Rgba::GOLD));
    assert_eq!(parse_color("#FFD700"), Some(Rgba::GOLD));
    assert_eq!(parse_color("#fff"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
    // six bytes, four chars
    assert_eq!(parse_color("#aééa"), None);
    assert_eq!(parse_color("#féfff"), None);
}

#[test]
fn functional_colors() {
    assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Rgba::rgb(1, 2, 3)));
    assert_eq!(
        parse_color("rgba(255,255,255,0.08)"),
        Some(Rgba::rgba(255, 255, 255, 0.08))
    );
    assert_eq!(parse_color("rgba(0,0,0,7)").map(|c| c.a), Some(1.0));
    assert_eq!(parse_color("rgb(300,0,0)"), None);
    assert_eq!(parse_color("rgb(1,2)"), None);
}

#[test]
fn css_output() {
    assert_eq!(Rgba::GOLD.to_css(), "#ffd700");
    assert_eq!(Rgba::rgba(255, 255, 255, 0.5).to_css(), "rgba(255,255,255,0.5)");
    assert_eq!(Rgba::WHITE.with_alpha(0.65).alpha_u8(), 166);
}
