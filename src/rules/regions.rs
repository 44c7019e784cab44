//! Built-in region vocabularies.
//!
//! Four parallel tables share one index space: position `i` names the same
//! region in every table. The array type pins all four to `REGION_COUNT`.
//! The most common proxy locations lead the tables so they win lookup ties.
//! A region whose name contains another region's name is listed first
//! (索马里 before 马里, Nigeria before Niger, NorthKorea before Korea).

/// Number of regions in the built-in tables.
pub const REGION_COUNT: usize = 189;

/// Chinese display names.
#[rustfmt::skip]
pub static NATIVE: [&str; REGION_COUNT] = [
    "香港", "澳门", "台湾", "日本", "朝鲜", "韩国", "新加坡", "美国", "英国", "法国", "德国", "澳大利亚", "阿联酋", "阿富汗", "阿尔巴尼亚", "阿尔及利亚", "安哥拉",
    "阿根廷", "亚美尼亚", "奥地利", "阿塞拜疆", "巴林", "孟加拉国", "白俄罗斯", "比利时", "伯利兹", "贝宁", "不丹", "玻利维亚", "波斯尼亚和黑塞哥维那", "博茨瓦纳",
    "巴西", "英属维京群岛", "文莱", "保加利亚", "布基纳法索", "布隆迪", "柬埔寨", "喀麦隆", "加拿大", "佛得角", "开曼群岛", "中非共和国", "乍得", "智利", "哥伦比亚",
    "科摩罗", "刚果(布)", "刚果(金)", "哥斯达黎加", "克罗地亚", "塞浦路斯", "捷克", "丹麦", "吉布提", "多米尼加共和国", "厄瓜多尔", "埃及", "萨尔瓦多", "赤道几内亚",
    "厄立特里亚", "爱沙尼亚", "埃塞俄比亚", "斐济", "芬兰", "加蓬", "冈比亚", "格鲁吉亚", "加纳", "希腊", "格陵兰", "危地马拉", "几内亚", "圭亚那", "海地", "洪都拉斯",
    "匈牙利", "冰岛", "印度", "印尼", "伊朗", "伊拉克", "爱尔兰", "马恩岛", "以色列", "意大利", "科特迪瓦", "牙买加", "约旦", "哈萨克斯坦", "肯尼亚", "科威特",
    "吉尔吉斯斯坦", "老挝", "拉脱维亚", "黎巴嫩", "莱索托", "利比里亚", "利比亚", "立陶宛", "卢森堡", "马其顿", "马达加斯加", "马拉维", "马来", "马尔代夫", "索马里",
    "马里", "马耳他", "毛利塔尼亚", "毛里求斯", "墨西哥", "摩尔多瓦", "摩纳哥", "蒙古", "黑山共和国", "摩洛哥", "莫桑比克", "缅甸", "纳米比亚", "尼泊尔", "荷兰",
    "新西兰", "尼加拉瓜", "尼日利亚", "尼日尔", "挪威", "阿曼", "巴基斯坦", "巴拿马", "巴拉圭", "秘鲁", "菲律宾", "葡萄牙", "波多黎各", "卡塔尔", "罗马尼亚", "俄罗斯",
    "卢旺达", "圣马力诺", "沙特阿拉伯", "塞内加尔", "塞尔维亚", "塞拉利昂", "斯洛伐克", "斯洛文尼亚", "南非", "西班牙", "斯里兰卡", "苏丹", "苏里南", "斯威士兰", "瑞典",
    "瑞士", "叙利亚", "塔吉克斯坦", "坦桑尼亚", "泰国", "多哥", "汤加", "特立尼达和多巴哥", "突尼斯", "土耳其", "土库曼斯坦", "美属维尔京群岛", "乌干达", "乌克兰", "乌拉圭",
    "乌兹别克斯坦", "委内瑞拉", "越南", "也门", "赞比亚", "津巴布韦", "安道尔", "留尼汪", "波兰", "关岛", "梵蒂冈", "列支敦士登", "库拉索", "塞舌尔", "南极", "直布罗陀",
    "古巴", "法罗群岛", "奥兰群岛", "百慕达", "东帝汶",
];

/// English display names.
#[rustfmt::skip]
pub static ENGLISH: [&str; REGION_COUNT] = [
    "Hong Kong", "Macao", "Taiwan", "Japan", "NorthKorea", "Korea", "Singapore", "United States", "United Kingdom",
    "France", "Germany", "Australia", "Dubai", "Afghanistan", "Albania", "Algeria", "Angola", "Argentina", "Armenia",
    "Austria", "Azerbaijan", "Bahrain", "Bangladesh", "Belarus", "Belgium", "Belize", "Benin", "Bhutan",
    "Bolivia", "Bosnia and Herzegovina", "Botswana", "Brazil", "British Virgin Islands", "Brunei", "Bulgaria",
    "Burkina-faso", "Burundi", "Cambodia", "Cameroon", "Canada", "CapeVerde", "CaymanIslands", "Central African Republic",
    "Chad", "Chile", "Colombia", "Comoros", "Congo-Brazzaville", "Congo-Kinshasa", "CostaRica", "Croatia",
    "Cyprus", "Czech Republic", "Denmark", "Djibouti", "Dominican Republic", "Ecuador", "Egypt",
    "EISalvador", "Equatorial Guinea", "Eritrea", "Estonia", "Ethiopia", "Fiji", "Finland", "Gabon", "Gambia", "Georgia",
    "Ghana", "Greece", "Greenland", "Guatemala", "Guinea", "Guyana", "Haiti", "Honduras", "Hungary", "Iceland",
    "India", "Indonesia", "Iran", "Iraq", "Ireland", "Isle of Man", "Israel", "Italy", "Ivory Coast", "Jamaica",
    "Jordan", "Kazakstan", "Kenya", "Kuwait", "Kyrgyzstan", "Laos", "Latvia", "Lebanon", "Lesotho", "Liberia",
    "Libya", "Lithuania", "Luxembourg", "Macedonia", "Madagascar", "Malawi", "Malaysia", "Maldives", "Somalia",
    "Mali", "Malta", "Mauritania", "Mauritius", "Mexico", "Moldova", "Monaco", "Mongolia", "Montenegro",
    "Morocco", "Mozambique", "Myanmar(Burma)", "Namibia", "Nepal", "Netherlands", "New Zealand", "Nicaragua", "Nigeria",
    "Niger", "Norway", "Oman", "Pakistan", "Panama", "Paraguay", "Peru", "Philippines", "Portugal", "PuertoRico",
    "Qatar", "Romania", "Russia", "Rwanda", "SanMarino", "SaudiArabia", "Senegal", "Serbia", "SierraLeone",
    "Slovakia", "Slovenia", "SouthAfrica", "Spain", "SriLanka", "Sudan", "Suriname", "Swaziland", "Sweden",
    "Switzerland", "Syria", "Tajikstan", "Tanzania", "Thailand", "Togo", "Tonga", "TrinidadandTobago", "Tunisia",
    "Turkey", "Turkmenistan", "U.S.Virgin Islands", "Uganda", "Ukraine", "Uruguay", "Uzbekistan", "Venezuela",
    "Vietnam", "Yemen", "Zambia", "Zimbabwe", "Andorra", "Reunion", "Poland", "Guam", "Vatican", "Liechtensteins",
    "Curacao", "Seychelles", "Antarctica", "Gibraltar", "Cuba", "Faroe Islands", "Ahvenanmaa", "Bermuda",
    "Timor-Leste",
];

/// Two-letter region codes.
#[rustfmt::skip]
pub static CODE: [&str; REGION_COUNT] = [
    "HK", "MO", "TW", "JP", "KP", "KR", "SG", "US", "GB", "FR", "DE", "AU", "AE", "AF", "AL", "DZ", "AO", "AR", "AM",
    "AT", "AZ", "BH", "BD", "BY", "BE", "BZ", "BJ", "BT", "BO", "BA", "BW", "BR", "VG", "BN", "BG", "BF", "BI", "KH",
    "CM", "CA", "CV", "KY", "CF", "TD", "CL", "CO", "KM", "CG", "CD", "CR", "HR", "CY", "CZ", "DK", "DJ", "DO", "EC",
    "EG", "SV", "GQ", "ER", "EE", "ET", "FJ", "FI", "GA", "GM", "GE", "GH", "GR", "GL", "GT", "GN", "GY", "HT", "HN",
    "HU", "IS", "IN", "ID", "IR", "IQ", "IE", "IM", "IL", "IT", "CI", "JM", "JO", "KZ", "KE", "KW", "KG", "LA", "LV",
    "LB", "LS", "LR", "LY", "LT", "LU", "MK", "MG", "MW", "MY", "MV", "SO", "ML", "MT", "MR", "MU", "MX", "MD", "MC",
    "MN", "ME", "MA", "MZ", "MM", "NA", "NP", "NL", "NZ", "NI", "NG", "NE", "NO", "OM", "PK", "PA", "PY", "PE", "PH",
    "PT", "PR", "QA", "RO", "RU", "RW", "SM", "SA", "SN", "RS", "SL", "SK", "SI", "ZA", "ES", "LK", "SD", "SR", "SZ",
    "SE", "CH", "SY", "TJ", "TZ", "TH", "TG", "TO", "TT", "TN", "TR", "TM", "VI", "UG", "UA", "UY", "UZ", "VE", "VN",
    "YE", "ZM", "ZW", "AD", "RE", "PL", "GU", "VA", "LI", "CW", "SC", "AQ", "GI", "CU", "FO", "AX", "BM", "TL",
];

/// Regional-indicator flag glyphs, derived from `CODE`.
#[rustfmt::skip]
pub static FLAG: [&str; REGION_COUNT] = [
    "🇭🇰", "🇲🇴", "🇹🇼", "🇯🇵", "🇰🇵", "🇰🇷", "🇸🇬", "🇺🇸", "🇬🇧", "🇫🇷", "🇩🇪", "🇦🇺", "🇦🇪", "🇦🇫", "🇦🇱", "🇩🇿", "🇦🇴", "🇦🇷", "🇦🇲",
    "🇦🇹", "🇦🇿", "🇧🇭", "🇧🇩", "🇧🇾", "🇧🇪", "🇧🇿", "🇧🇯", "🇧🇹", "🇧🇴", "🇧🇦", "🇧🇼", "🇧🇷", "🇻🇬", "🇧🇳", "🇧🇬", "🇧🇫", "🇧🇮", "🇰🇭",
    "🇨🇲", "🇨🇦", "🇨🇻", "🇰🇾", "🇨🇫", "🇹🇩", "🇨🇱", "🇨🇴", "🇰🇲", "🇨🇬", "🇨🇩", "🇨🇷", "🇭🇷", "🇨🇾", "🇨🇿", "🇩🇰", "🇩🇯", "🇩🇴", "🇪🇨",
    "🇪🇬", "🇸🇻", "🇬🇶", "🇪🇷", "🇪🇪", "🇪🇹", "🇫🇯", "🇫🇮", "🇬🇦", "🇬🇲", "🇬🇪", "🇬🇭", "🇬🇷", "🇬🇱", "🇬🇹", "🇬🇳", "🇬🇾", "🇭🇹", "🇭🇳",
    "🇭🇺", "🇮🇸", "🇮🇳", "🇮🇩", "🇮🇷", "🇮🇶", "🇮🇪", "🇮🇲", "🇮🇱", "🇮🇹", "🇨🇮", "🇯🇲", "🇯🇴", "🇰🇿", "🇰🇪", "🇰🇼", "🇰🇬", "🇱🇦", "🇱🇻",
    "🇱🇧", "🇱🇸", "🇱🇷", "🇱🇾", "🇱🇹", "🇱🇺", "🇲🇰", "🇲🇬", "🇲🇼", "🇲🇾", "🇲🇻", "🇸🇴", "🇲🇱", "🇲🇹", "🇲🇷", "🇲🇺", "🇲🇽", "🇲🇩", "🇲🇨",
    "🇲🇳", "🇲🇪", "🇲🇦", "🇲🇿", "🇲🇲", "🇳🇦", "🇳🇵", "🇳🇱", "🇳🇿", "🇳🇮", "🇳🇬", "🇳🇪", "🇳🇴", "🇴🇲", "🇵🇰", "🇵🇦", "🇵🇾", "🇵🇪", "🇵🇭",
    "🇵🇹", "🇵🇷", "🇶🇦", "🇷🇴", "🇷🇺", "🇷🇼", "🇸🇲", "🇸🇦", "🇸🇳", "🇷🇸", "🇸🇱", "🇸🇰", "🇸🇮", "🇿🇦", "🇪🇸", "🇱🇰", "🇸🇩", "🇸🇷", "🇸🇿",
    "🇸🇪", "🇨🇭", "🇸🇾", "🇹🇯", "🇹🇿", "🇹🇭", "🇹🇬", "🇹🇴", "🇹🇹", "🇹🇳", "🇹🇷", "🇹🇲", "🇻🇮", "🇺🇬", "🇺🇦", "🇺🇾", "🇺🇿", "🇻🇪", "🇻🇳",
    "🇾🇪", "🇿🇲", "🇿🇼", "🇦🇩", "🇷🇪", "🇵🇱", "🇬🇺", "🇻🇦", "🇱🇮", "🇨🇼", "🇸🇨", "🇦🇶", "🇬🇮", "🇨🇺", "🇫🇴", "🇦🇽", "🇧🇲", "🇹🇱",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_two_letter_uppercase() {
        let mut seen = HashSet::new();
        for code in CODE {
            assert_eq!(code.len(), 2, "code {code:?} is not two letters");
            assert!(code.bytes().all(|b| b.is_ascii_uppercase()), "code {code:?} is not uppercase");
            assert!(seen.insert(code), "duplicate code {code:?}");
        }
    }

    #[test]
    fn flags_follow_codes() {
        assert_eq!(FLAG[0], "\u{1F1ED}\u{1F1F0}");
        let us = CODE.iter().position(|c| *c == "US").unwrap();
        assert_eq!(FLAG[us], "\u{1F1FA}\u{1F1F8}");
    }

    #[test]
    fn hong_kong_leads_every_table() {
        assert_eq!((NATIVE[0], ENGLISH[0], CODE[0]), ("香港", "Hong Kong", "HK"));
    }
}
