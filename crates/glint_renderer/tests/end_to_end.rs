//! Whole-pipeline renders: POV text in, pixels out.

use glint_core::load_pov_from_string;
use glint_renderer::{
    color_to_rgb, render, render_buckets, render_pixel, RenderConfig, TraceStats,
    MAX_BOUNCE_DEPTH,
};

const RED_SPHERE: &str = r#"
camera {
  location <0, 0, 0>
  up <0, 1, 0>
  right <1.33333, 0, 0>
  look_at <0, 0, -1>
}
light_source { <0, 0, 0> color rgb <1, 1, 1> }
sphere { <0, 0, -5>, 1
  pigment { color rgb <1.0, 0.0, 0.0> }
  finish { ambient 0.2 diffuse 0.8 }
}
"#;

/// Two mirrors facing each other along z, ambient-only so that every
/// bounce contributes the same local color.
fn facing_mirrors(ambient: f32) -> String {
    format!(
        r#"
camera {{
  location <0, 0, 0>
  up <0, 1, 0>
  right <1, 0, 0>
  look_at <0, 0, -1>
}}
light_source {{ <0, 3, 0> color rgb <1, 1, 1> }}
plane {{ <0, 0, 1>, -5
  pigment {{ color rgb <1, 1, 1> }}
  finish {{ ambient {ambient} reflection 0.5 }}
}}
plane {{ <0, 0, -1>, -5
  pigment {{ color rgb <1, 1, 1> }}
  finish {{ ambient {ambient} reflection 0.5 }}
}}
"#
    )
}

const MIXED: &str = r#"
camera {
  location <0, 1, 8>
  up <0, 1, 0>
  right <1.33333, 0, 0>
  look_at <0, 0, 0>
}
light_source { <-10, 10, 10> color rgb <1.5, 1.5, 1.5> }
sphere { <0, 0, 0>, 1.5
  pigment { color rgb <1.0, 0.0, 1.0> }
  finish { ambient 0.2 diffuse 0.4 specular 0.5 roughness 0.05 reflection 0.5 }
}
plane { <0, 1, 0>, -1.5
  pigment { color rgb <0.2, 0.2, 0.8> }
  finish { ambient 0.4 diffuse 0.8 reflection 0.3 }
}
triangle { <-4, -1.5, -3>, <4, -1.5, -3>, <0, 4, -3>
  pigment { color rgb <0.9, 0.9, 0.2> }
  finish { ambient 0.3 diffuse 0.6 specular 0.2 }
}
"#;

#[test]
fn red_sphere_center_and_corner() {
    let scene = load_pov_from_string(RED_SPHERE).unwrap();
    let config = RenderConfig::default().with_resolution(32, 24);

    let image = render(&scene, &config);

    let [r, g, b] = color_to_rgb(image.get(16, 12));
    assert!(r > 200, "center red channel too dark: {}", r);
    assert_eq!((g, b), (0, 0));

    for (x, y) in [(0, 0), (31, 0), (0, 23), (31, 23)] {
        assert_eq!(color_to_rgb(image.get(x, y)), [0, 0, 0]);
    }
}

#[test]
fn half_mirrors_converge_within_display_range() {
    let scene = load_pov_from_string(&facing_mirrors(0.5)).unwrap();
    let config = RenderConfig::default().with_resolution(5, 5);

    let image = render(&scene, &config);

    // 0.5 * (1 + 1/2 + 1/4 + 1/8 + 1/16) = 0.96875
    for color in &image.pixels {
        assert!((color.r - 0.96875).abs() < 1e-4);
        assert_eq!(color_to_rgb(*color), [247, 247, 247]);
    }

    // Brighter mirrors overshoot 1.0 and are capped at conversion.
    let scene = load_pov_from_string(&facing_mirrors(1.0)).unwrap();
    let image = render(&scene, &config);
    for color in &image.pixels {
        assert!(color.r > 1.0);
        assert_eq!(color_to_rgb(*color), [255, 255, 255]);
    }
}

#[test]
fn facing_mirrors_bounded_evaluations() {
    let scene = load_pov_from_string(&facing_mirrors(0.5)).unwrap();
    let config = RenderConfig::default().with_resolution(3, 3);

    let mut stats = TraceStats::default();
    for j in 0..config.height {
        for i in 0..config.width {
            render_pixel(&scene, i, j, &config, &mut stats);
        }
    }

    let per_ray = u64::from(MAX_BOUNCE_DEPTH) + 1;
    assert_eq!(per_ray, 5);
    assert_eq!(stats.primary_rays, 9);
    assert_eq!(stats.evaluations, 9 * per_ray);
    assert_eq!(stats.deepest_bounce, MAX_BOUNCE_DEPTH);
}

#[test]
fn bucketed_render_matches_sequential() {
    let scene = load_pov_from_string(MIXED).unwrap();
    let config = RenderConfig {
        bucket_size: 7,
        ..RenderConfig::default()
    }
    .with_resolution(40, 30);

    let sequential = render(&scene, &config);
    let parallel = render_buckets(&scene, &config);

    assert_eq!(sequential.width, parallel.width);
    assert_eq!(sequential.height, parallel.height);
    assert_eq!(sequential.pixels, parallel.pixels);
    assert!(sequential.pixels.iter().any(|c| c.r > 0.0));
}
