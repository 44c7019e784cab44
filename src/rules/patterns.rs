//! Tag, resort and filter pattern tables.

use crate::Category;
use regex::Regex;

/// Category tags. When several match, the last one listed wins.
pub fn categories() -> Vec<Category> {
    vec![
        category!("2×" => r"ˣ²"),
        category!("3×" => r"ˣ³"),
        category!("4×" => r"ˣ⁴"),
        category!("5×" => r"ˣ⁵"),
        category!("6×" => r"ˣ⁶"),
        category!("7×" => r"ˣ⁷"),
        category!("8×" => r"ˣ⁸"),
        category!("9×" => r"ˣ⁹"),
        category!("10×" => r"ˣ¹⁰"),
        category!("20×" => r"ˣ²⁰"),
        category!("30×" => r"ˣ³⁰"),
        category!("40×" => r"ˣ⁴⁰"),
        category!("50×" => r"ˣ⁵⁰"),
        category!("DL" => r"专线"),
        category!("IPLC" => r"(?i)IPLC|I-P-L-C"),
        category!("IEPL" => r"(?i)IEPL|I-E-P-L"),
        category!("Kern" => r"核心"),
        category!("Edge" => r"边缘"),
        category!("Pro" => r"高级"),
        category!("Std" => r"标准"),
        category!("Spec" => r"特殊"),
        category!("Exp" => r"实验"),
        category!("Biz" => r"商宽"),
        category!("Fam" => r"家宽"),
        category!("Game" => r"(?i)游戏|game"),
        category!("Buy" => r"购物"),
        category!("LB" => r"LB"),
        category!("CF" => r"(?i)cloudflare"),
        category!("UDP" => r"(?i)(?:^|[^A-Za-z0-9_])udp(?:[^A-Za-z0-9_]|$)"),
        category!("GPT" => r"(?i)(?:^|[^A-Za-z0-9_])gpt(?:[^A-Za-z0-9_]|$)"),
        category!("UDPN" => r"udpn(?:[^A-Za-z0-9_]|$)"),
    ]
}

/// Resort ranks, highest priority first: rate tags, then line/tier labels.
pub fn special_ranks() -> Vec<&'static Regex> {
    vec![regex!(r"([0-9]\.)?[0-9]+×"), regex!(r"IPLC|IEPL|Kern|Edge|Pro|Std|Exp|Biz|Fam|Game|Buy|Zx|LB")]
}

/// Subscription-info pseudo nodes (quota, expiry, support contacts).
pub fn info_noise() -> &'static Regex {
    regex!(
        r"(?i)(套餐|到期|有效|剩余|版本|已用|过期|失联|测试|官方|网址|备用|群|TEST|客服|网站|获取|订阅|流量|机场|下次|官址|联系|邮箱|工单|学术|USE|USED|TOTAL|EXPIRE|EMAIL)"
    )
}

/// Any rate marker other than 1×, or an explicit 高倍 label.
pub fn high_rate() -> &'static Regex {
    regex!(r"(?i)(高倍|(0\.|[02-9])(0\.|[0-9])*(x|倍)|ˣ²|ˣ³|ˣ⁴|ˣ⁵|ˣ¹⁰)")
}

/// The narrower rate set used when keeping only high-rate nodes.
pub fn high_rate_strict() -> &'static Regex {
    regex!(r"(?i)(高倍|2+(x|倍)|ˣ²|ˣ³|ˣ⁴|ˣ⁵|ˣ¹⁰)")
}

/// Whitelisted regions for the `key` filter, in every script the tables use.
pub fn whitelist_regions() -> &'static Regex {
    regex!(
        r"(?i)港|Hong|HK|新加坡|SG|Singapore|日本|Japan|JP|美国|United States|US|韩|土耳其|TR|Turkey|Korea|KR|🇭🇰|🇸🇬|🇯🇵|🇺🇸|🇰🇷|🇹🇷"
    )
}

pub fn whitelist_digits() -> &'static Regex {
    regex!(r"[2467]")
}

/// Heuristic for overloaded or legacy nodes: numbers 10-49 anywhere, high
/// sequence numbers on Hong Kong, or 03-09 on the other whitelisted regions.
pub fn overloaded() -> &'static Regex {
    regex!(
        r"(?i)(((1|2|3|4)[0-9])|(香港|Hong|HK) 0[5-9]|((新加坡|SG|Singapore|日本|Japan|JP|美国|United States|US|韩|土耳其|TR|Turkey|Korea|KR) 0[3-9]))"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_rate_skips_single_rate() {
        let cases = vec![
            ("香港 1x", false),
            ("香港 1倍", false),
            ("香港 2x", true),
            ("香港 10x", true),
            ("香港 0.5x", true),
            ("香港 1.5x", true),
            ("香港 高倍", true),
            ("香港 ˣ²", true),
            ("香港 01", false),
        ];
        for (input, expected) in cases {
            assert_eq!(high_rate().is_match(input), expected, "high_rate on {input:?}");
        }
    }

    #[test]
    fn udp_tag_needs_ascii_word_edges() {
        let udp = categories().into_iter().find(|c| c.label == "UDP").unwrap();
        assert!(udp.pattern.is_match("香港udp"));
        assert!(udp.pattern.is_match("HK UDP 01"));
        assert!(!udp.pattern.is_match("HK UDPN"));
    }

    #[test]
    fn info_noise_catches_quota_lines() {
        assert!(info_noise().is_match("剩余流量：100GB"));
        assert!(info_noise().is_match("Expire: 2030-01-01"));
        assert!(!info_noise().is_match("香港 IEPL 01"));
    }
}
