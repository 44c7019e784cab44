//! Normalization rewrites, applied in declaration order.
//!
//! Later rewrites see the output of earlier ones, so city and shorthand rules
//! that expand into a region name must come before anything that would match
//! the bare region name.

use crate::Rewrite;

/// Skip a bare `台` when a `线` follows on the same line ("台线" style line names).
fn line_follows(haystack: &str, m: &regex::Match<'_>) -> bool {
    m.as_str() == "台" && haystack[m.end()..].split('\n').next().is_some_and(|rest| rest.contains('线'))
}

pub fn get() -> Vec<Rewrite> {
    vec![
        rewrite!("GB" => r"UK"),
        // Split forms keep two-letter codes (BG, PL) from matching inside line names.
        rewrite!("B-G-P" => r"BGP"),
        rewrite!("I-E-P-L" => r"(?i)IEPL"),
        rewrite!("I-P-L-C" => r"(?i)IPLC"),
        rewrite!("Russia Moscow" => r"Moscow"),
        rewrite!("Korea Chuncheon" => r"Chuncheon|Seoul"),
        rewrite!("Hong Kong" => r"(?i)Hongkong|HONG KONG"),
        rewrite!("United Kingdom London" => r"London|Great Britain"),
        rewrite!("Dubai United Arab Emirates" => r"United Arab Emirates"),
        rewrite!("Taiwan TW 台湾 " => r"(台|Tai\s?wan|TW).*?|.*?(台|Tai\s?wan|TW)"),
        rewrite!("United States" => r"USA|Los Angeles|San Jose|Silicon Valley|Michigan"),
        // Shorthand: <mainland entry city><destination>.
        rewrite!("澳大利亚" => r"澳洲|墨尔本|悉尼|土澳|(深|沪|呼|京|广|杭)澳"),
        rewrite!("德国" => r"(深|沪|呼|京|广|杭)德|法兰克福|滬德"),
        rewrite!("香港" => r"(深|沪|呼|京|广|杭)港"),
        rewrite!("日本" => r"(深|沪|呼|京|广|杭|中|辽)日|东京|大坂"),
        rewrite!("新加坡" => r"狮城|(深|沪|呼|京|广|杭)新"),
        rewrite!("美国" => r"(深|沪|呼|京|广|杭)美|波特兰|芝加哥|哥伦布|纽约|硅谷|俄勒冈|西雅图"),
        rewrite!("波斯尼亚和黑塞哥维那" => r"波黑共和国"),
        rewrite!("印尼" => r"印度尼西亚|雅加达"),
        rewrite!("印度" => r"孟买"),
        rewrite!("阿联酋" => r"迪拜|阿拉伯联合酋长国"),
        rewrite!("沙特阿拉伯" => r"沙特"),
        rewrite!("孟加拉国" => r"孟加拉"),
        rewrite!("捷克" => r"捷克共和国"),
        rewrite!("台湾" => r"新台|新北|台", keep: line_follows),
        rewrite!("Taiwan" => r"Taipei"),
        rewrite!("韩国" => r"春川|韩|首尔"),
        rewrite!("Japan" => r"Tokyo|Osaka"),
        rewrite!("英国" => r"伦敦"),
        rewrite!("India" => r"Mumbai"),
        rewrite!("Germany" => r"Frankfurt"),
        rewrite!("Switzerland" => r"Zurich"),
        rewrite!("俄罗斯" => r"莫斯科"),
        rewrite!("土耳其" => r"伊斯坦布尔"),
        rewrite!("泰国" => r"泰國|曼谷"),
        rewrite!("法国" => r"巴黎"),
        // Traffic quotas such as "100GB" must not read as the GB region code.
        rewrite!("G" => r"(?i)[0-9]\s?GB"),
        rewrite!("Esnc" => r"(?i)esnc"),
    ]
}
