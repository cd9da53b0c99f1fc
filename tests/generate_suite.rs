use std::path::{Path, PathBuf};

use ai_humanities_diagrams::Theme;
use ai_humanities_diagrams::diagrams;

fn assert_valid_svg(svg: &str, name: &str) {
    assert!(svg.starts_with("<svg"), "{name}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{name}: missing </svg tag");
    assert!(svg.contains("fill=\"#FFFFFF\""), "{name}: missing background");
    for tag in ["text", "defs", "svg"] {
        assert_eq!(
            svg.matches(&format!("<{tag}")).count(),
            svg.matches(&format!("</{tag}>")).count(),
            "{name}: unbalanced <{tag}>"
        );
    }
}

#[test]
fn render_all_diagrams() {
    // Keep this list explicit so new diagrams must be added intentionally.
    let titles = [
        ("digital-humanities-timeline", "디지털 인문학 발전 타임라인"),
        ("ai-hierarchy-pyramid", "AI 기술 계층 구조"),
        ("ai-landscape-grid", "AI가 바꾸는 인문학 4영역"),
        ("search-vs-generative", "검색 AI vs 생성형 AI"),
        ("ml-era-timeline", "ML/AI 시대 구분"),
        ("data-evolution-flow", "정형 데이터에서 비정형 데이터로"),
        ("ai-working-principle", "생성형 AI 작동 원리 4단계"),
        ("data-misconceptions", "데이터에 대한 오해"),
        ("prompt-4-principles", "프롬프트 4원칙"),
        ("prompt-before-after", "Before / After 프롬프트 비교"),
        ("tone-combination-formula", "말투 조합 공식"),
        ("six-tones-radar", "6가지 말투 레이더 차트"),
        ("ai-writing-problems", "AI 글의 6가지 전형적 문제"),
        ("multiturn-strategy", "멀티턴 대화 전략"),
        ("ai-limitations-overview", "AI의 5가지 한계"),
        ("book-roadmap", "이 책의 로드맵"),
    ];
    assert_eq!(titles.len(), diagrams::all().len());

    let theme = Theme::pastel();
    for (name, title) in titles {
        let diagram = diagrams::find(name).unwrap_or_else(|| panic!("diagram missing: {name}"));
        let svg = (diagram.render)(&theme);
        assert_valid_svg(&svg, name);
        assert!(svg.contains(title), "{name}: missing title text");
    }
}

#[test]
fn radar_draws_six_series_and_legend() {
    let theme = Theme::pastel();
    let diagram = diagrams::find("six-tones-radar").unwrap();
    let svg = (diagram.render)(&theme);
    for tone in ["A. 강의형", "B. 경험자형", "C. 보고서형", "D. 선배형", "E. 마케팅형", "F. 기사형"] {
        assert!(svg.contains(tone), "missing legend entry {tone}");
    }
    // six filled score polygons
    assert_eq!(svg.matches("fill-opacity=\"0.1\"").count(), 6);
}

fn temp_root(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gen-diagrams-{tag}-{}", std::process::id()))
}

fn svg_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|e| e == "svg") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

#[test]
fn generation_is_idempotent() {
    let root = temp_root("nested");
    std::fs::remove_dir_all(&root).ok();
    let theme = Theme::pastel();

    let written = diagrams::generate(&root, false, &theme).unwrap();
    assert_eq!(written, 16);
    let first = svg_files(&root);
    assert_eq!(first.len(), 16);
    assert!(root.join("ch01").join("digital-humanities-timeline.svg").exists());
    assert!(root.join("index").join("book-roadmap.svg").exists());

    // Second run overwrites in place, never duplicates or errors.
    diagrams::generate(&root, false, &theme).unwrap();
    let second = svg_files(&root);
    assert_eq!(first, second);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn flat_layout_writes_directly_under_root() {
    let root = temp_root("flat");
    std::fs::remove_dir_all(&root).ok();
    let theme = Theme::pastel();

    diagrams::generate(&root, true, &theme).unwrap();
    let files = svg_files(&root);
    assert_eq!(files.len(), 16);
    for file in &files {
        assert_eq!(file.parent(), Some(root.as_path()));
    }

    std::fs::remove_dir_all(&root).ok();
}
