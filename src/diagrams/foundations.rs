//! Chapter 1: where AI meets the humanities.

use crate::canvas::Canvas;
use crate::theme::Theme;

pub fn digital_humanities_timeline(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 3.0, (-0.5, 10.5), (-0.5, 2.5), theme);
    c.title("디지털 인문학 발전 타임라인");

    let eras = [
        (0.5, "2000s", "디지털 아카이브\n전자 텍스트 구축", theme.blue_light.as_str()),
        (3.0, "2010s", "빅데이터 분석\n텍스트 마이닝", theme.purple_light.as_str()),
        (5.5, "2020s", "생성형 AI\nLLM 등장", theme.green_light.as_str()),
        (8.0, "현재", "AI와 인문학 협업\n바이브 코딩", theme.yellow_light.as_str()),
    ];

    for (idx, (x, era, desc, color)) in eras.iter().enumerate() {
        c.circle(x + 0.5, 1.8, 0.35, color, &theme.ink, 1.0);
        c.text_bold(x + 0.5, 1.8, era, 9.0, &theme.ink);
        c.text(x + 0.5, 0.7, desc, 9.0, &theme.ink);
        if idx + 1 < eras.len() {
            c.arrow((x + 1.0, 1.8), (eras[idx + 1].0, 1.8), &theme.gray_mid, 1.5);
        }
    }

    c.into_svg()
}

pub fn ai_hierarchy_pyramid(theme: &Theme) -> String {
    let mut c = Canvas::new(8.0, 6.0, (-5.0, 5.0), (-0.5, 5.0), theme);
    c.title("AI 기술 계층 구조");

    let layers = [
        (-4.0, 0.0, 8.0, "인공지능 (AI)", "사람의 지능을 모방하는 모든 기술", theme.blue_light.as_str()),
        (-3.0, 1.1, 6.0, "머신러닝 (ML)", "데이터에서 패턴을 학습", theme.purple_light.as_str()),
        (-2.0, 2.2, 4.0, "딥러닝 (DL)", "인공 신경망으로 복잡한 패턴 학습", theme.green_light.as_str()),
        (-1.0, 3.3, 2.0, "LLM", "대규모 언어모델", theme.yellow_light.as_str()),
    ];

    for (x, y, w, label, desc, color) in layers {
        c.rounded_box(x, y, w, 1.0, color, &theme.ink, 0.8);
        c.text_bold(x + w / 2.0, y + 0.6, label, 12.0, &theme.ink);
        c.text(x + w / 2.0, y + 0.3, desc, 9.0, &theme.muted);
    }

    c.into_svg()
}

pub fn ai_landscape_grid(theme: &Theme) -> String {
    let mut c = Canvas::new(9.0, 6.0, (-0.5, 9.5), (-0.5, 5.5), theme);
    c.title("AI가 바꾸는 인문학 4영역");

    let cards = [
        (0.5, 3.0, "글쓰기와 창작", "AI와 함께 소설, 시,\n에세이를 쓰고\n문체를 실험", theme.blue_light.as_str()),
        (5.0, 3.0, "텍스트 분석", "수천 편의 문학 작품을\n분석하고 패턴을 발견", theme.purple_light.as_str()),
        (0.5, 0.2, "번역과 소통", "언어의 장벽을 넘어\n다양한 문화를 탐색", theme.green_light.as_str()),
        (5.0, 0.2, "시각적 스토리텔링", "텍스트를 이미지로 변환\n새로운 표현 방식 탐구", theme.yellow_light.as_str()),
    ];

    for (x, y, title, desc, color) in cards {
        c.rounded_box(x, y, 3.8, 2.2, color, &theme.ink, 0.8);
        c.text_bold(x + 1.9, y + 1.7, title, 12.0, &theme.ink);
        c.text(x + 1.9, y + 0.8, desc, 9.0, &theme.muted);
    }

    c.into_svg()
}
