//! 回答解析
//!
//! 从分类服务的回答中提取 `I Detect <N> passwords/api keys` 里的数量。
//! 只做精确、区分大小写的匹配，找不到即为 0。

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Verdict;

static THREAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"I Detect ([0-9]+) passwords/api keys").expect("threat pattern is valid")
});

/// 提取敏感信息数量
///
/// 数字超出 `u64` 范围时按 `u64::MAX` 处理
pub fn parse_threat_count(answer: &str) -> u64 {
    THREAT_PATTERN
        .captures(answer)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// 解析回答
///
/// `NoResponse` 返回 `None`，调用方应跳过该页面而不是当作 0
pub fn parse(verdict: &Verdict) -> Option<u64> {
    match verdict {
        Verdict::Answer(answer) => Some(parse_threat_count(answer)),
        Verdict::NoResponse => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_count() {
        assert_eq!(
            parse_threat_count("I Detect 3 passwords/api keys.\n- a\n- b\n- c"),
            3
        );
        assert_eq!(parse_threat_count("I Detect 12 passwords/api keys."), 12);
    }

    #[test]
    fn test_missing_phrase_is_zero() {
        assert_eq!(parse_threat_count("No passwords found."), 0);
        assert_eq!(parse_threat_count(""), 0);
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(parse_threat_count("i detect 3 passwords/api keys"), 0);
        assert_eq!(parse_threat_count("I Detect 3 passwords / api keys"), 0);
        assert_eq!(parse_threat_count("I detected 3 passwords/api keys"), 0);
        assert_eq!(parse_threat_count("I Detect three passwords/api keys"), 0);
    }

    #[test]
    fn test_phrase_can_appear_anywhere() {
        assert_eq!(
            parse_threat_count("Sure!\n\nI Detect 2 passwords/api keys.\n\n- hunter2\n- AKIA..."),
            2
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            parse_threat_count("I Detect 1 passwords/api keys. I Detect 4 passwords/api keys."),
            1
        );
    }

    #[test]
    fn test_leading_zeros_and_overflow() {
        assert_eq!(parse_threat_count("I Detect 007 passwords/api keys"), 7);
        assert_eq!(
            parse_threat_count("I Detect 99999999999999999999999 passwords/api keys"),
            u64::MAX
        );
    }

    #[test]
    fn test_no_response_is_not_zero() {
        assert_eq!(parse(&Verdict::NoResponse), None);
        assert_eq!(parse(&Verdict::Answer("No passwords found.".into())), Some(0));
        assert_eq!(
            parse(&Verdict::Answer("I Detect 1 passwords/api keys.\n- secret123".into())),
            Some(1)
        );
    }
}
