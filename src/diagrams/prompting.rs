//! Chapter 3: prompting principles and multi-turn conversation.

use crate::canvas::Canvas;
use crate::theme::Theme;

pub fn prompt_4_principles(theme: &Theme) -> String {
    let mut c = Canvas::new(9.0, 6.0, (-0.5, 9.5), (-0.5, 6.0), theme);
    c.title("프롬프트 4원칙");

    let principles = [
        (0.5, 4.2, "01 구체적으로", "원하는 것을\n정확히 표현", theme.blue_light.as_str()),
        (5.0, 4.2, "02 맥락 제공", "나의 상황과\n배경 정보 전달", theme.purple_light.as_str()),
        (0.5, 1.5, "03 역할 부여", "AI에게\n전문가 역할 부여", theme.green_light.as_str()),
        (5.0, 1.5, "04 출력 형식", "답변의 형태를\n명시", theme.yellow_light.as_str()),
    ];

    for (x, y, title, desc, color) in principles {
        c.rounded_box(x, y, 3.8, 2.0, color, &theme.ink, 0.8);
        c.text_bold(x + 1.9, y + 1.5, title, 12.0, &theme.ink);
        c.text(x + 1.9, y + 0.6, desc, 10.0, &theme.muted);
    }

    // Badge over the card corners.
    c.circle(4.65, 3.6, 0.5, &theme.yellow_mid, &theme.ink, 1.2);
    c.text_bold(4.65, 3.6, "4원칙", 11.0, &theme.ink);

    c.into_svg()
}

pub fn prompt_before_after(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 4.0, (-0.5, 10.5), (-0.5, 3.5), theme);
    c.title("Before / After 프롬프트 비교");

    c.rounded_box(0.3, 0.5, 4.3, 2.5, &theme.red_light, &theme.ink, 0.8);
    c.text_bold(2.45, 2.5, "Before", 14.0, &theme.red_deep);
    c.text(2.45, 1.8, "'요약해줘'", 11.0, &theme.ink);
    c.text(2.45, 1.1, "모호함, 길이 불명\n관점 불명, 임의 해석", 9.0, &theme.muted);

    c.arrow((5.0, 1.75), (5.7, 1.75), &theme.ink, 2.5);

    c.rounded_box(5.9, 0.5, 4.3, 2.5, &theme.green_light, &theme.ink, 0.8);
    c.text_bold(8.05, 2.5, "After", 14.0, &theme.green_deep);
    c.text(8.05, 1.8, "'3문장으로 요약하고\n키워드 3개를 뽑아줘'", 10.0, &theme.ink);
    c.text(8.05, 0.9, "길이 명시, 추가 정보\n적절한 난이도", 9.0, &theme.muted);

    c.into_svg()
}

pub fn multiturn_strategy(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 5.0, (-0.5, 10.5), (-0.5, 5.0), theme);
    c.title("멀티턴 대화 전략");

    let steps = [
        (0.5, 3.5, "첫 질문", "일반적인 질문으로 시작", theme.blue_light.as_str()),
        (0.5, 2.2, "범위 좁히기", "'그중에서 ~에 집중해줘'", theme.purple_light.as_str()),
        (0.5, 0.9, "구체화", "'예를 들어 설명해줘'", theme.green_light.as_str()),
        (5.5, 3.5, "형식 바꾸기", "'표로 정리해줘'", theme.yellow_light.as_str()),
        (5.5, 2.2, "수준 조절", "'쉽게 설명해줘'", theme.red_light.as_str()),
        (5.5, 0.9, "비판 요청", "'문제점을 지적해줘'", theme.blue_light.as_str()),
    ];

    for (x, y, title, desc, color) in steps {
        c.rounded_box(x, y, 4.0, 1.0, color, &theme.ink, 0.8);
        c.text_bold(x + 2.0, y + 0.65, title, 11.0, &theme.ink);
        c.text(x + 2.0, y + 0.25, desc, 9.0, &theme.muted);
    }

    for (y1, y2) in [(3.5, 3.2), (2.2, 1.9)] {
        c.arrow((2.5, y1), (2.5, y2), &theme.gray_mid, 1.5);
    }

    c.text_bold(2.5, 4.8, "단계적 심화", 12.0, &theme.ink);
    c.text_bold(7.5, 4.8, "전략적 변환", 12.0, &theme.ink);

    c.into_svg()
}
