//! ANSI 이스케이프 시퀀스 제거
//!
//! 터미널 출력에서 수집된 로그 본문에는 색상/커서 제어 시퀀스가
//! 섞여 들어옵니다. OTLP 본문에는 순수 텍스트만 남겨야 하므로 CSI,
//! OSC, 단일 문자 이스케이프를 모두 제거합니다.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static ANSI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // CSI(`ESC [ ...`), OSC(`ESC ] ... BEL|ST`), 단일 문자 이스케이프
    Regex::new(r"\x1b(?:\[[0-9;?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\)|[@-Z\\-_])")
        .expect("ANSI 패턴은 상수이며 항상 유효함")
});

/// 입력에서 ANSI 이스케이프 시퀀스를 제거합니다.
///
/// 시퀀스가 없으면 입력을 빌려 그대로 반환합니다.
pub fn strip_ansi(input: &str) -> Cow<'_, str> {
    ANSI_PATTERN.replace_all(input, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed_unchanged() {
        let result = strip_ansi("plain message");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "plain message");
    }

    #[test]
    fn color_codes_are_removed() {
        assert_eq!(
            strip_ansi("\x1b[31mERROR\x1b[0m connection refused"),
            "ERROR connection refused"
        );
        assert_eq!(strip_ansi("\x1b[1;32;40mbold green\x1b[m"), "bold green");
    }

    #[test]
    fn cursor_and_erase_sequences_are_removed() {
        assert_eq!(strip_ansi("\x1b[2J\x1b[Hcleared"), "cleared");
        assert_eq!(strip_ansi("line\x1b[K end"), "line end");
    }

    #[test]
    fn osc_title_sequence_is_removed() {
        assert_eq!(strip_ansi("\x1b]0;window title\x07body"), "body");
        assert_eq!(strip_ansi("\x1b]8;;http://x\x1b\\link"), "link");
    }

    #[test]
    fn single_character_escapes_are_removed() {
        assert_eq!(strip_ansi("a\x1bMb"), "ab");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_ansi(""), "");
    }
}
