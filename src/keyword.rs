//! Static keyword tables mapping labels to the substrings that trigger them.
//!
//! The tables are configuration data, not state: they are compiled into the
//! binary, never change at runtime, and are scanned in declaration order
//! with the first hit winning. Keeping them as explicit ordered slices makes
//! the priority order a tested constant rather than an accident of map
//! iteration order.
//!
//! Latin-script keywords are stored lowercase; the extractors lowercase the
//! input once before scanning.

use crate::expense::{AccountKind, Category, Currency};

/// The currency assumed when an amount is found but no foreign-currency
/// keyword appears anywhere in the utterance.
pub const HOME_CURRENCY: Currency = Currency::Twd;

/// Expense categories and their trigger keywords, in match priority order.
///
/// The bare verb 買 ("buy") is deliberately not a Shopping keyword: it
/// appears in utterances for every category ("買書", "買藥") and would
/// otherwise shadow the more specific tables below Shopping.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "吃", "餐廳", "食物", "午餐", "晚餐", "早餐", "咖啡", "飲料", "便當", "小吃", "火鍋",
            "燒烤", "日式", "中式", "西式",
        ],
    ),
    (
        Category::Transport,
        &[
            "車", "油", "停車", "捷運", "公車", "計程車", "uber", "grab", "機車", "汽車", "加油",
            "車票", "高鐵", "台鐵",
        ],
    ),
    (
        Category::Shopping,
        &[
            "購物", "衣服", "鞋子", "包包", "化妝品", "3c", "家電", "超市", "百貨", "網購",
            "amazon", "蝦皮",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "電影", "遊戲", "娛樂", "唱歌", "ktv", "酒吧", "夜店", "遊樂園", "展覽", "演唱會",
            "音樂會",
        ],
    ),
    (
        Category::Medical,
        &[
            "醫院", "藥", "看醫生", "健保", "診所", "牙醫", "眼科", "皮膚科", "掛號", "藥局",
        ],
    ),
    (
        Category::Education,
        &[
            "書", "課程", "學費", "補習", "家教", "線上課程", "證照", "考試", "文具", "教材",
        ],
    ),
    (
        Category::Living,
        &[
            "水電", "瓦斯", "網路", "手機", "房租", "管理費", "清潔", "洗衣", "理髮", "美容",
        ],
    ),
    (Category::Other, &["其他", "雜項", "未分類"]),
];

/// Currencies and their trigger keywords, in match priority order.
///
/// The home currency's unit words are listed for completeness and for the
/// amount patterns; the currency scan itself only consults the foreign
/// entries, since the home currency is the fallback rather than a match.
pub const CURRENCY_KEYWORDS: &[(Currency, &[&str])] = &[
    (Currency::Twd, &["元", "塊", "台幣", "ntd", "新台幣"]),
    (Currency::Usd, &["美金", "美元", "usd", "dollar"]),
    (Currency::Eur, &["歐元", "eur", "euro"]),
    (Currency::Jpy, &["日圓", "日幣", "jpy", "yen"]),
];

/// Account-type hints and their trigger keywords, in match priority order.
pub const ACCOUNT_KEYWORDS: &[(AccountKind, &[&str])] = &[
    (AccountKind::Cash, &["現金", "錢包", "零錢"]),
    (
        AccountKind::CreditCard,
        &["信用卡", "卡", "visa", "mastercard"],
    ),
    (AccountKind::Bank, &["銀行", "帳戶", "戶頭", "轉帳"]),
    (
        AccountKind::DigitalWallet,
        &["電子錢包", "line pay", "街口", "apple pay", "google pay"],
    ),
];
