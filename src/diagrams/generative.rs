//! Chapter 2: generative AI, its data, and how it works.

use crate::canvas::{Anchor, Canvas};
use crate::theme::Theme;

pub fn search_vs_generative(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 4.0, (-0.5, 11.0), (-0.5, 3.5), theme);
    c.title("검색 AI vs 생성형 AI");

    c.rounded_box(0.0, 1.0, 4.5, 2.0, &theme.blue_light, &theme.ink, 0.8);
    c.text_bold(2.25, 2.5, "검색 AI", 13.0, &theme.blue_deep);
    c.text(2.25, 1.9, "기존 정보를 찾아서 보여줌", 9.0, &theme.ink);
    c.text(2.25, 1.4, "사용자가 직접 읽고\n원하는 정보를 골라야 함", 9.0, &theme.muted);

    c.arrow((5.0, 2.0), (6.0, 2.0), &theme.ink, 2.0);
    c.text_bold(5.5, 2.4, "vs", 14.0, &theme.ink);

    c.rounded_box(6.5, 1.0, 4.5, 2.0, &theme.green_light, &theme.ink, 0.8);
    c.text_bold(8.75, 2.5, "생성형 AI", 13.0, &theme.green_deep);
    c.text(8.75, 1.9, "질문을 이해하고 답변을 생성", 9.0, &theme.ink);
    c.text(8.75, 1.4, "대화하듯 추가 질문으로\n답변을 개선", 9.0, &theme.muted);

    c.box_with_label(2.5, -0.3, 6.0, 0.8, &theme.yellow_light, "핵심: '찾아준다' vs '만들어준다'", 10.0);

    c.into_svg()
}

pub fn ml_era_timeline(theme: &Theme) -> String {
    let mut c = Canvas::new(11.0, 3.5, (-0.5, 11.0), (-0.5, 3.0), theme);
    c.title("ML/AI 시대 구분");

    let eras = [
        (0.2, "Classical ML\n1990~2010s", "SVM, Random Forest\n정형 데이터 중심", theme.blue_light.as_str()),
        (3.8, "전환점\n2017~2022", "Transformer 등장\nGPT, ChatGPT", theme.purple_light.as_str()),
        (7.4, "LLM 시대\n2020s~", "텍스트 생성 중심\n멀티모달, 바이브 코딩", theme.green_light.as_str()),
    ];

    for (x, era, desc, color) in eras {
        c.rounded_box(x, 0.3, 3.2, 2.3, color, &theme.ink, 0.8);
        c.text_bold(x + 1.6, 2.0, era, 10.0, &theme.ink);
        c.text(x + 1.6, 1.0, desc, 9.0, &theme.muted);
    }

    for (x1, x2) in [(3.4, 3.8), (7.0, 7.4)] {
        c.arrow((x1, 1.5), (x2, 1.5), &theme.gray_mid, 2.0);
    }

    c.into_svg()
}

pub fn data_evolution_flow(theme: &Theme) -> String {
    let mut c = Canvas::new(10.0, 4.0, (-0.5, 10.5), (-0.5, 3.5), theme);
    c.title("정형 데이터에서 비정형 데이터로");

    c.rounded_box(0.3, 1.0, 3.5, 2.0, &theme.blue_light, &theme.ink, 0.8);
    c.text_bold(2.05, 2.5, "정형 데이터", 12.0, &theme.ink);
    c.text(2.05, 1.7, "숫자, 표, 거래 기록\n회귀, 분류, 시계열", 9.0, &theme.muted);

    c.arrow((4.2, 2.0), (5.2, 2.0), &theme.ink, 2.0);
    c.text_bold(4.7, 2.5, "전환", 10.0, &theme.ink);

    c.rounded_box(5.5, 1.0, 4.5, 2.0, &theme.green_light, &theme.ink, 0.8);
    c.text_bold(7.75, 2.5, "비정형 데이터", 12.0, &theme.ink);
    c.text(7.75, 1.7, "텍스트, 이미지, 음성\n생성, 대화, 멀티모달", 9.0, &theme.muted);

    c.box_with_label(2.0, -0.2, 6.5, 0.8, &theme.yellow_light, "데이터의 종류가 AI의 가능성을 결정한다", 10.0);

    c.into_svg()
}

pub fn ai_working_principle(theme: &Theme) -> String {
    let mut c = Canvas::new(11.0, 3.5, (-0.5, 11.0), (-0.3, 3.0), theme);
    c.title("생성형 AI 작동 원리 4단계");

    let steps = [
        (0.2, "1단계", "대량의 텍스트\n학습", theme.blue_light.as_str()),
        (2.9, "2단계", "다음 단어\n예측 능력", theme.purple_light.as_str()),
        (5.6, "3단계", "사용자 질문에\n답변 생성", theme.green_light.as_str()),
        (8.3, "4단계", "대화로\n답변 개선", theme.yellow_light.as_str()),
    ];

    for (x, step, desc, color) in steps {
        c.rounded_box(x, 0.3, 2.3, 2.2, color, &theme.ink, 0.8);
        c.text_bold(x + 1.15, 2.0, step, 11.0, &theme.ink);
        c.text(x + 1.15, 1.0, desc, 9.0, &theme.muted);
    }

    for x in [2.5, 5.2, 7.9] {
        c.arrow((x, 1.4), (x + 0.4, 1.4), &theme.gray_mid, 2.0);
    }

    c.into_svg()
}

pub fn data_misconceptions(theme: &Theme) -> String {
    let mut c = Canvas::new(9.0, 5.0, (-0.5, 9.5), (-0.5, 5.0), theme);
    c.title("데이터에 대한 오해");

    let bars = [
        (
            3.0,
            "X  오해 1",
            "데이터 양이 늘어나면 다양성도 늘어난다?\n-> 같은 종류만 쌓이면 편향이 커진다",
        ),
        (
            1.0,
            "X  오해 2",
            "모델이 커지면 현실을 더 잘 이해한다?\n-> 모델 크기와 세상에 대한 이해는 별개",
        ),
    ];

    for (y, heading, body) in bars {
        c.rounded_box(0.3, y, 8.8, 1.5, &theme.red_light, &theme.ink, 0.8);
        c.text_with(1.5, y + 1.0, heading, 12.0, &theme.red_deep, Anchor::Start, true, false);
        c.text_with(1.5, y + 0.4, body, 9.0, &theme.ink, Anchor::Start, false, false);
    }

    c.box_with_label(1.5, -0.3, 6.5, 0.8, &theme.green_light, "어떤 데이터를 선택하느냐는 가치 판단의 문제", 10.0);

    c.into_svg()
}
