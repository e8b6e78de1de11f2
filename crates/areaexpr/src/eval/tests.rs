use super::*;
use crate::drawable::{Drawable, Scene};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::json;
use std::collections::HashMap;
use std::f64::consts::PI;

fn circle(x: f64, y: f64, r: f64) -> Drawable {
    Drawable::Circle {
        center: vector![x, y],
        radius: r,
    }
}

fn segment(p: [f64; 2], q: [f64; 2]) -> Drawable {
    Drawable::Segment {
        point1: vector![p[0], p[1]],
        point2: vector![q[0], q[1]],
    }
}

fn square(x0: f64, y0: f64, side: f64) -> Drawable {
    Drawable::Polygon {
        vertices: vec![
            vector![x0, y0],
            vector![x0 + side, y0],
            vector![x0 + side, y0 + side],
            vector![x0, y0 + side],
        ],
    }
}

fn scene() -> Scene {
    [
        ("circle_A", circle(0.0, 0.0, 5.0)),
        ("circle_B", circle(7.0, 0.0, 5.0)),
        ("far", circle(100.0, 100.0, 1.0)),
        ("far2", circle(-100.0, -100.0, 1.0)),
        ("AB", segment([-10.0, 3.0], [10.0, 3.0])),
        ("tangent", segment([-10.0, 5.0], [10.0, 5.0])),
        ("diameter", segment([-10.0, 0.0], [10.0, 0.0])),
        ("diameter_rev", segment([10.0, 0.0], [-10.0, 0.0])),
        ("vertical", segment([3.0, -10.0], [3.0, 10.0])),
        ("square", square(0.0, 0.0, 10.0)),
        ("diag", segment([0.0, 0.0], [10.0, 10.0])),
        ("mid", segment([0.0, 5.0], [10.0, 5.0])),
        (
            "E(4,2)",
            Drawable::Ellipse {
                center: vector![0.0, 0.0],
                radius_x: 4.0,
                radius_y: 2.0,
                rotation_deg: 30.0,
            },
        ),
        (
            "arc",
            Drawable::CircleArc {
                center: vector![0.0, 0.0],
                radius: 5.0,
                point1: vector![5.0, 0.0],
                point2: vector![0.0, -5.0],
                major: true,
            },
        ),
        (
            "point_P",
            Drawable::Unsupported {
                class_name: "Point".into(),
            },
        ),
    ]
    .into_iter()
    .collect()
}

fn area(expr: &str) -> f64 {
    let res = evaluate(expr, &scene());
    assert!(res.is_ok(), "{expr}: {:?}", res.error);
    res.area
}

fn circular_segment(r: f64, d: f64) -> f64 {
    r * r * (d / r).acos() - d * (r * r - d * d).sqrt()
}

const CIRCLE_A: f64 = 25.0 * PI;

#[test]
fn single_name_is_its_own_area() {
    let s = scene();
    let cfg = EvalCfg::default();
    for name in ["circle_A", "square", "E(4,2)", "arc"] {
        let own = s
            .resolve(name)
            .and_then(|d| adapt(name, d, &cfg))
            .and_then(|t| t.to_region(&cfg))
            .unwrap()
            .area();
        assert_eq!(area(name), own, "{name}");
    }
    assert!((area("square") - 100.0).abs() < 1e-12);
    assert!((area("circle_A") - CIRCLE_A).abs() < 0.01);
}

#[test]
fn self_intersection_and_union_are_idempotent() {
    for name in ["circle_A", "square", "E(4,2)"] {
        let own = area(name);
        assert!((area(&format!("{name} & {name}")) - own).abs() < 1e-5);
        assert!((area(&format!("{name} | {name}")) - own).abs() < 1e-5);
    }
}

#[test]
fn self_difference_is_zero() {
    assert!(area("circle_A - circle_A").abs() < 1e-9);
    assert!(area("square ^ square").abs() < 1e-9);
}

#[test]
fn overlapping_circles_form_a_lens() {
    let lens = area("circle_A & circle_B");
    let expected = 50.0 * (0.7f64).acos() - 3.5 * 51.0f64.sqrt();
    assert!(lens > 0.0 && lens < CIRCLE_A);
    assert!((lens - expected).abs() < 0.1, "{lens} vs {expected}");
}

#[test]
fn segment_cuts_minor_circular_segment() {
    let expected = circular_segment(5.0, 3.0);
    assert!((area("AB & circle_A") - expected).abs() < 0.05);
    assert!((area("circle_A & AB") - expected).abs() < 0.05);
}

#[test]
fn tangent_segment_keeps_full_circle() {
    let a = area("tangent & circle_A");
    assert!((a - CIRCLE_A).abs() < 0.05, "{a}");
}

#[test]
fn opposite_diameters_split_the_circle() {
    let up = area("diameter & circle_A");
    let down = area("diameter_rev & circle_A");
    assert!((up - CIRCLE_A / 2.0).abs() < 0.05);
    assert!((up + down - CIRCLE_A).abs() < 0.1);
}

#[test]
fn polygon_and_ellipse_are_clipped_by_half_plane() {
    assert!((area("diag & square") - 50.0).abs() < 1e-2);
    let ellipse = area("E(4,2)");
    assert!((area("E(4,2) & diameter") - ellipse / 2.0).abs() < 1e-2);
}

#[test]
fn arc_alone_and_cut() {
    // Three-quarter arc: sector plus the triangle to its chord.
    let major = 0.75 * CIRCLE_A + 12.5;
    assert!((area("arc") - major).abs() < 0.1);
    assert!((area("AB & arc") - circular_segment(5.0, 3.0)).abs() < 0.05);
    // One crossing on the arc (the other lies on the missing quarter).
    assert!((area("vertical & arc") - area("arc")).abs() < 1e-12);
    assert!((area("arc & tangent") - area("arc")).abs() < 1e-12);
}

#[test]
fn lone_segment_is_a_half_plane_box() {
    let cfg = EvalCfg::default();
    let e = cfg.half_plane_extent;
    let expected = e * (20.0 + 2.0 * e);
    assert!((area("AB") - expected).abs() / expected < 1e-9);
}

#[test]
fn pending_segment_is_identity_for_union_and_xor() {
    let circle = area("circle_A");
    assert_eq!(area("AB | circle_A"), circle);
    assert_eq!(area("circle_A ^ AB"), circle);
}

#[test]
fn difference_with_segment_uses_half_plane() {
    // `mid` points along +x, so its half-plane is the upper half.
    assert!((area("square - mid") - 50.0).abs() < 1e-2);
}

#[test]
fn precedence_binds_and_before_or() {
    // As `(circle_A | far) & far2` this would be empty.
    assert_eq!(area("circle_A | far & far2"), area("circle_A"));
    assert_eq!(area("(circle_A | far) & far2"), 0.0);
}

#[test]
fn empty_outcome_has_no_regions() {
    let res = evaluate("circle_A & far", &scene());
    assert!(res.is_ok());
    assert_eq!(res.area, 0.0);
    assert!(res.regions.is_empty());
    assert!(res.combined_region.is_none());
}

#[test]
fn difference_with_empty_sides() {
    let circle = area("circle_A");
    assert_eq!(area("circle_A - (far & far2)"), circle);
    assert_eq!(area("(far & far2) - circle_A"), 0.0);
}

#[test]
fn unknown_name_is_reported_not_raised() {
    let res = evaluate("circle_Z", &scene());
    assert_eq!(res.area, 0.0);
    let msg = res.error.unwrap();
    assert!(msg.contains("circle_Z"), "{msg}");
    assert!(msg.starts_with("resolution error:"));
}

#[test]
fn unsupported_drawable_names_its_type() {
    let res = evaluate("circle_A & point_P", &scene());
    let msg = res.error.unwrap();
    assert!(msg.contains("Point") && msg.contains("point_P"), "{msg}");
}

#[test]
fn syntax_errors_are_reported_not_raised() {
    for bad in ["(circle_A & circle_B", "", "circle_A &", "circle_A $ AB", "& AB"] {
        let res = evaluate(bad, &scene());
        assert_eq!(res.area, 0.0);
        assert!(res.regions.is_empty());
        let msg = res.error.unwrap();
        assert!(msg.starts_with("syntax error:"), "{bad:?}: {msg}");
    }
}

#[test]
fn deeply_nested_parens_are_a_syntax_error() {
    let expr = format!("{}circle_A{}", "(".repeat(20_000), ")".repeat(20_000));
    let res = evaluate(&expr, &scene());
    assert_eq!(res.area, 0.0);
    assert!(res.regions.is_empty());
    let msg = res.error.unwrap();
    assert!(msg.starts_with("syntax error:"), "{msg}");
    assert!(msg.contains("deeper than 256"), "{msg}");
}

#[test]
fn long_operator_chain_is_a_syntax_error() {
    let expr = vec!["far"; 50_000].join(" - ");
    let res = evaluate(&expr, &scene());
    assert_eq!(res.area, 0.0);
    assert!(res.combined_region.is_none());
    let msg = res.error.unwrap();
    assert!(msg.starts_with("syntax error:"), "{msg}");
    assert!(msg.contains("deeper than 256"), "{msg}");
}

#[test]
fn depth_within_the_cap_evaluates() {
    let nested = format!("{}circle_A{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(area(&nested), area("circle_A"));
    let chain = format!("circle_A | {}", vec!["far"; 100].join(" | "));
    assert!((area(&chain) - area("circle_A | far")).abs() < 1e-2);
    // A tighter cap from the config applies to the same input.
    let cfg = EvalCfg {
        max_depth: 50,
        ..EvalCfg::default()
    };
    let res = evaluate_with(&nested, &scene(), &cfg);
    let expected = AreaError::TooDeep { limit: 50 }.to_string();
    assert_eq!(res.error.as_deref(), Some(expected.as_str()));
}

#[test]
fn degenerate_segment_fails_only_when_used_as_half_plane() {
    let mut s = scene();
    s.insert("dot", segment([1.0, 1.0], [1.0, 1.0]));
    // Tangent-style fallback: no cut, full circle.
    assert!(evaluate("dot & circle_A", &s).is_ok());
    let res = evaluate("square - dot", &s);
    assert!(res.error.unwrap().contains("degenerate"));
}

#[test]
fn report_json_shapes() {
    let ok = evaluate("square", &scene()).to_report();
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({"type": "area", "value": 100.0})
    );
    let err = evaluate("circle_Z", &scene()).to_report();
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({"type": "error", "value": "resolution error: drawable 'circle_Z' not found"})
    );
    let back: AreaReport = serde_json::from_value(json!({"type": "area", "value": 2.5})).unwrap();
    assert_eq!(back, AreaReport::Area(2.5));
}

#[test]
fn evaluation_is_deterministic() {
    let s = scene();
    for expr in ["AB & circle_A", "(circle_A | circle_B) - square", "arc ^ E(4,2)"] {
        assert_eq!(evaluate(expr, &s), evaluate(expr, &s));
    }
}

#[test]
fn finer_curves_get_closer_to_the_true_area() {
    let coarse = evaluate("circle_A", &scene()).area;
    let cfg = EvalCfg {
        curve_points: 1024,
        ..EvalCfg::default()
    };
    let fine = evaluate_with("circle_A", &scene(), &cfg).area;
    assert!((fine - CIRCLE_A).abs() < (coarse - CIRCLE_A).abs());
    assert!((fine - CIRCLE_A).abs() < 1e-3);
}

#[test]
fn hash_map_resolver_works() {
    let mut map: HashMap<String, Drawable> = HashMap::new();
    map.insert("s".into(), square(0.0, 0.0, 2.0));
    map.insert("t".into(), square(1.0, 1.0, 2.0));
    assert!((evaluate("s & t", &map).area - 1.0).abs() < 1e-6);
    assert!((evaluate("s | t", &map).area - 7.0).abs() < 1e-6);
}

#[test]
fn several_regions_merge_through_hull() {
    let cfg = EvalCfg {
        hull_samples: 40,
        ..EvalCfg::default()
    };
    let unit = |x0: f64| {
        Region::from_points(&[
            vector![x0, 0.0],
            vector![x0 + 1.0, 0.0],
            vector![x0 + 1.0, 1.0],
            vector![x0, 1.0],
        ])
        .unwrap()
    };
    let merged = merge_regions(&[unit(0.0), unit(3.0)], &cfg).unwrap();
    assert!((merged.area() - 4.0).abs() < 1e-6);
    assert!(merge_regions(&[], &cfg).is_none());

    let res = EvaluationResult::from_regions(vec![unit(0.0), Region::empty(), unit(3.0)], &cfg);
    assert_eq!(res.regions.len(), 2);
    assert!((res.area - 4.0).abs() < 1e-6);
}

#[test]
fn random_circles_satisfy_inclusion_exclusion() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let mut map: HashMap<String, Drawable> = HashMap::new();
        for name in ["A", "B"] {
            let c = circle(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(0.5..3.0),
            );
            map.insert(name.into(), c);
        }
        let a = evaluate("A", &map).area;
        let b = evaluate("B", &map).area;
        let and = evaluate("A & B", &map).area;
        let or = evaluate("A | B", &map).area;
        let minus = evaluate("A - B", &map).area;
        let xor = evaluate("A ^ B", &map).area;
        assert!(and <= a.min(b) + 1e-6);
        assert!(or + 1e-6 >= a.max(b));
        assert!((or + and - (a + b)).abs() < 1e-3);
        assert!((minus + and - a).abs() < 1e-3);
        assert!((xor - (or - and)).abs() < 1e-3);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn set_laws_hold_for_circles(
        x in -20.0f64..20.0,
        y in -20.0f64..20.0,
        r in 0.1f64..10.0,
    ) {
        let mut map: HashMap<String, Drawable> = HashMap::new();
        map.insert("A".into(), circle(x, y, r));
        let a = evaluate("A", &map).area;
        let tol = 1e-6 * a.max(1.0);
        prop_assert!((evaluate("A & A", &map).area - a).abs() < tol);
        prop_assert!((evaluate("A | A", &map).area - a).abs() < tol);
        prop_assert!(evaluate("A - A", &map).area < tol);
    }
}
