/// 홍보성 스팸 단어.
const PROMO_TERMS: &[&str] = &[
    "crypto",
    "forex",
    "airdrop",
    "telegram",
    "whatsapp",
    "casino",
    "free money",
    "buy now",
    "click here",
];

/// 욕설/혐오 표현 차단 목록.
const BLOCKED_TERMS: &[&str] = &[
    "fuck", "shit", "bitch", "asshole", "cunt", "nigger", "faggot", "retard",
];

/// 같은 문자가 이 횟수 이상 연속되면 스팸으로 본다.
const REPEAT_RUN: usize = 5;

fn link_count(text: &str) -> usize {
    ["http://", "https://", "www."]
        .iter()
        .map(|p| text.matches(p).count())
        .sum()
}

/// 반복 판정을 끊는 줄 구분 문자(UTF-16 코드 유닛).
const LINE_TERMINATORS: [u16; 4] = [0x000A, 0x000D, 0x2028, 0x2029];

/// 같은 UTF-16 코드 유닛이 `REPEAT_RUN`번 이어지는지 본다.
/// 서로게이트 쌍으로 된 문자는 유닛이 번갈아 나오므로 연속으로 세지 않는다.
fn has_repeated_run(text: &str) -> bool {
    let mut prev = None;
    let mut run = 0;
    for unit in text.encode_utf16() {
        if LINE_TERMINATORS.contains(&unit) {
            prev = None;
            run = 0;
            continue;
        }
        if Some(unit) == prev {
            run += 1;
        } else {
            prev = Some(unit);
            run = 1;
        }
        if run >= REPEAT_RUN {
            return true;
        }
    }
    false
}

/// 아이디어 본문이 스팸/욕설로 보이는지 판정한다.
///
/// 링크 2개 이상, 같은 문자 5연속, 홍보 단어나 차단 단어 포함 시 `true`.
pub fn looks_like_spam(text: &str) -> bool {
    let t = text.to_lowercase();
    if link_count(&t) >= 2 {
        return true;
    }
    if has_repeated_run(&t) {
        return true;
    }
    PROMO_TERMS
        .iter()
        .chain(BLOCKED_TERMS)
        .any(|w| t.contains(w))
}
