//! Chapter 5: what AI cannot do.

use crate::canvas::Canvas;
use crate::theme::Theme;

pub fn ai_limitations_overview(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 4.0, (-0.5, 10.5), (-0.5, 3.5), theme);
    c.title("AI의 5가지 한계");

    let limits = [
        (0.3, "환각\n(Hallucination)", "사실이 아닌 정보를\n자신있게 답함", theme.red_light.as_str()),
        (2.3, "최신 정보\n부족", "학습 데이터 이후\n정보를 모름", theme.yellow_light.as_str()),
        (4.3, "개인 경험\n부재", "자기만의 경험이나\n감정이 없음", theme.blue_light.as_str()),
        (6.3, "수학적\n추론 한계", "복잡한 계산에서\n실수", theme.purple_light.as_str()),
        (8.3, "일관성\n부족", "같은 질문에\n다른 답변", theme.green_light.as_str()),
    ];

    for (x, title, desc, color) in limits {
        c.rounded_box(x, 0.3, 1.7, 2.7, color, &theme.ink, 0.8);
        c.text_bold(x + 0.85, 2.4, title, 9.0, &theme.ink);
        c.text(x + 0.85, 1.1, desc, 8.0, &theme.muted);
    }

    c.into_svg()
}
