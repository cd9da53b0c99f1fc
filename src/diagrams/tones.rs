//! Chapter 4: writing tones, the tone formula, and typical AI-writing problems.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::canvas::{Anchor, Canvas};
use crate::theme::Theme;

pub fn tone_combination_formula(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 4.0, (-0.5, 10.5), (-0.5, 3.5), theme);
    c.title("말투 조합 공식");

    let elements = [
        (0.3, "화자", theme.blue_light.as_str()),
        (2.3, "독자", theme.purple_light.as_str()),
        (4.3, "종결 어미", theme.green_light.as_str()),
        (6.3, "비유 여부", theme.yellow_light.as_str()),
    ];

    for (x, label, color) in elements {
        c.rounded_box(x, 1.5, 1.6, 1.5, color, &theme.ink, 0.8);
        c.text_bold(x + 0.8, 2.25, label, 11.0, &theme.ink);
    }

    for x in [2.0, 4.0, 6.0] {
        c.text_bold(x + 0.15, 2.25, "+", 16.0, &theme.ink);
    }
    c.text_bold(8.25, 2.25, "=", 18.0, &theme.ink);

    c.rounded_box(8.6, 1.3, 1.6, 1.9, &theme.yellow_mid, &theme.ink, 1.2);
    c.text_bold(9.4, 2.25, "말투\n결정!", 12.0, &theme.ink);

    c.text_with(
        5.0,
        0.5,
        "이 네 가지를 조합하면 같은 내용도 완전히 다른 글이 됩니다",
        10.0,
        &theme.muted,
        Anchor::Middle,
        false,
        true,
    );

    c.into_svg()
}

/// Angles for `n` axes radiating from the center: first axis at twelve
/// o'clock, stepping clockwise, equally spaced by `2π/n`.
pub fn radar_axis_angles(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| FRAC_PI_2 - i as f32 * TAU / n as f32)
        .collect()
}

/// Score polygon in user coordinates, normalized so `max_score` lands on
/// `radius`. The first vertex is repeated at the end to close the shape.
pub fn radar_points(scores: &[f32], max_score: f32, radius: f32) -> Vec<(f32, f32)> {
    let angles = radar_axis_angles(scores.len());
    let mut points: Vec<(f32, f32)> = scores
        .iter()
        .zip(&angles)
        .map(|(score, angle)| {
            let r = score / max_score * radius;
            (r * angle.cos(), r * angle.sin())
        })
        .collect();
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

pub fn six_tones_radar(theme: &Theme) -> String {
    const MAX_SCORE: f32 = 5.0;

    let mut c = Canvas::new(8.0, 8.0, (-1.65, 1.65), (-1.65, 1.65), theme);
    c.title("6가지 말투 레이더 차트");

    let categories = ["친근감", "전문성", "격식", "설득력", "객관성", "간결함"];
    let tones: [(&str, [f32; 6], &str); 6] = [
        ("A. 강의형", [5.0, 3.0, 2.0, 3.0, 2.0, 3.0], theme.blue_light.as_str()),
        ("B. 경험자형", [4.0, 4.0, 3.0, 4.0, 3.0, 3.0], theme.purple_light.as_str()),
        ("C. 보고서형", [1.0, 5.0, 5.0, 3.0, 5.0, 2.0], theme.green_light.as_str()),
        ("D. 선배형", [5.0, 2.0, 1.0, 2.0, 2.0, 5.0], theme.yellow_light.as_str()),
        ("E. 마케팅형", [3.0, 2.0, 3.0, 5.0, 2.0, 5.0], theme.red_light.as_str()),
        ("F. 기사형", [2.0, 4.0, 4.0, 3.0, 5.0, 3.0], theme.gray_light.as_str()),
    ];

    let angles = radar_axis_angles(categories.len());

    // Ring grid 1..5 with faint value labels along the top axis.
    for ring in 1..=5 {
        let r = ring as f32 / MAX_SCORE;
        c.circle(0.0, 0.0, r, "none", &theme.gray_light, 0.8);
        c.text(0.06, r + 0.02, &ring.to_string(), 8.0, &theme.faint);
    }

    for (angle, category) in angles.iter().zip(categories) {
        c.polyline(&[(0.0, 0.0), (angle.cos(), angle.sin())], &theme.gray_light, 0.8);
        c.text_bold(1.18 * angle.cos(), 1.18 * angle.sin(), category, 11.0, &theme.ink);
    }

    for (_, scores, color) in &tones {
        let points = radar_points(scores, MAX_SCORE, 1.0);
        c.polygon(&points, color, 0.1, "none", 0.0);
        c.polyline(&points, color, 1.5);
        for (x, y) in &points[..points.len() - 1] {
            c.circle(*x, *y, 0.02, color, color, 0.5);
        }
    }

    let legend_x = 1.02;
    for (idx, (name, _, color)) in tones.iter().enumerate() {
        let y = 1.45 - idx as f32 * 0.13;
        c.swatch(legend_x, y, 11.0, color);
        c.text_with(legend_x + 0.1, y, name, 9.0, &theme.ink, Anchor::Start, false, false);
    }

    c.into_svg()
}

pub fn ai_writing_problems(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 5.0, (-0.5, 10.5), (-0.5, 5.0), theme);
    c.title("AI 글의 6가지 전형적 문제");

    let problems = [
        (0.3, 3.2, "① 문장 단절", "짧고 끊긴 문장"),
        (3.6, 3.2, "② 문단 분절", "지나친 줄바꿈"),
        (6.9, 3.2, "③ 번역투", "영어 직역 표현"),
        (0.3, 0.8, "④ 슬롭 워드", "AI 과용 단어"),
        (3.6, 0.8, "⑤ 종결 단조", "~합니다만 반복"),
        (6.9, 0.8, "⑥ 메타 해설", "투어 가이드 문장"),
    ];

    for (x, y, title, desc) in problems {
        c.rounded_box(x, y, 2.8, 1.8, &theme.red_light, &theme.red_deep, 0.8);
        c.text_bold(x + 1.4, y + 1.2, title, 11.0, &theme.red_deep);
        c.text(x + 1.4, y + 0.5, desc, 9.0, &theme.ink);
    }

    c.into_svg()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn six_axes_are_sixty_degrees_apart() {
        let angles = radar_axis_angles(6);
        assert_eq!(angles.len(), 6);
        for pair in angles.windows(2) {
            assert!((pair[0] - pair[1] - TAU / 6.0).abs() < EPS);
        }
    }

    #[test]
    fn first_axis_points_up() {
        let angles = radar_axis_angles(6);
        assert!((angles[0] - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn series_polygon_closes() {
        let points = radar_points(&[5.0, 3.0, 2.0, 3.0, 2.0, 3.0], 5.0, 1.0);
        assert_eq!(points.len(), 7);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn scores_map_linearly_onto_radius() {
        let points = radar_points(&[5.0, 2.5], 5.0, 1.0);
        let r0 = (points[0].0.powi(2) + points[0].1.powi(2)).sqrt();
        let r1 = (points[1].0.powi(2) + points[1].1.powi(2)).sqrt();
        assert!((r0 - 1.0).abs() < EPS);
        assert!((r1 - 0.5).abs() < EPS);
    }
}
