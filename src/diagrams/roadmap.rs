//! Front matter: the reading roadmap.

use crate::canvas::Canvas;
use crate::theme::Theme;

pub fn book_roadmap(theme: &Theme) -> String {
    let mut c = Canvas::new(11.0, 5.0, (-0.5, 11.0), (-0.5, 5.0), theme);
    c.title("이 책의 로드맵");

    c.rounded_box(0.3, 3.2, 4.8, 1.5, &theme.blue_light, &theme.ink, 0.8);
    c.text_bold(2.7, 4.2, "Part I  AI와 인문학의 만남", 11.0, &theme.ink);
    c.text(2.7, 3.6, "1장 AI와 인문학  |  2장 생성형 AI", 9.0, &theme.muted);

    c.rounded_box(5.7, 3.2, 5.0, 1.5, &theme.green_light, &theme.ink, 0.8);
    c.text_bold(8.2, 4.2, "Part II  AI와 대화하기", 11.0, &theme.ink);
    c.text(8.2, 3.6, "3장 프롬프트  |  4장 말투  |  5장 평가", 9.0, &theme.muted);

    c.arrow((5.1, 3.95), (5.7, 3.95), &theme.ink, 2.0);

    c.rounded_box(2.5, 0.8, 6.0, 1.5, &theme.yellow_light, &theme.ink, 0.8);
    c.text_bold(5.5, 1.8, "부록", 11.0, &theme.ink);
    c.text(5.5, 1.2, "AI 도구 비교  |  프롬프트 템플릿  |  한국어 글쓰기 가이드", 9.0, &theme.muted);

    c.arrow((5.5, 3.2), (5.5, 2.3), &theme.ink, 1.5);

    c.into_svg()
}
