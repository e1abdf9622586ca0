//! Core domain types for parsed expense utterances.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

/// Confidence contributed by a successfully extracted amount.
pub const AMOUNT_WEIGHT: f64 = 0.3;
/// Confidence contributed by a non-empty description.
pub const DESCRIPTION_WEIGHT: f64 = 0.2;
/// Confidence contributed by a matched expense category.
pub const CATEGORY_WEIGHT: f64 = 0.2;
/// Confidence contributed by a matched account hint.
pub const ACCOUNT_WEIGHT: f64 = 0.1;
/// Confidence contributed by a resolved date.
pub const DATE_WEIGHT: f64 = 0.2;

/// The currencies the parser can recognize from keywords in an utterance.
///
/// Serializes as the ISO-like currency code stored by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// New Taiwan dollar, the application's home currency.
    #[serde(rename = "TWD")]
    Twd,
    /// United States dollar.
    #[serde(rename = "USD")]
    Usd,
    /// Euro.
    #[serde(rename = "EUR")]
    Eur,
    /// Japanese yen.
    #[serde(rename = "JPY")]
    Jpy,
}

impl Currency {
    /// The ISO-like currency code, e.g. `"TWD"`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Twd => "TWD",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The closed set of expense categories.
///
/// Serializes as the Traditional Chinese label shown to and stored for the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 餐飲 — meals, drinks, restaurants.
    #[serde(rename = "餐飲")]
    Food,
    /// 交通 — fuel, parking, public transport, ride hailing.
    #[serde(rename = "交通")]
    Transport,
    /// 購物 — clothing, electronics, online shopping.
    #[serde(rename = "購物")]
    Shopping,
    /// 娛樂 — movies, games, concerts.
    #[serde(rename = "娛樂")]
    Entertainment,
    /// 醫療 — hospitals, clinics, pharmacies.
    #[serde(rename = "醫療")]
    Medical,
    /// 教育 — books, courses, tuition.
    #[serde(rename = "教育")]
    Education,
    /// 生活 — utilities, rent, phone, grooming.
    #[serde(rename = "生活")]
    Living,
    /// 其他 — the catch-all category.
    #[serde(rename = "其他")]
    Other,
}

impl Category {
    /// The Traditional Chinese label for the category, e.g. `"餐飲"`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "餐飲",
            Category::Transport => "交通",
            Category::Shopping => "購物",
            Category::Entertainment => "娛樂",
            Category::Medical => "醫療",
            Category::Education => "教育",
            Category::Living => "生活",
            Category::Other => "其他",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The closed set of account-type hints.
///
/// Unlike [Category], there is no catch-all: an utterance that does not
/// mention a payment method yields no account hint at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// 現金 — cash, wallet, loose change.
    #[serde(rename = "現金")]
    Cash,
    /// 信用卡 — credit cards.
    #[serde(rename = "信用卡")]
    CreditCard,
    /// 銀行 — bank accounts and transfers.
    #[serde(rename = "銀行")]
    Bank,
    /// 電子錢包 — digital wallets such as Line Pay and Apple Pay.
    #[serde(rename = "電子錢包")]
    DigitalWallet,
}

impl AccountKind {
    /// The Traditional Chinese label for the account type, e.g. `"現金"`.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Cash => "現金",
            AccountKind::CreditCard => "信用卡",
            AccountKind::Bank => "銀行",
            AccountKind::DigitalWallet => "電子錢包",
        }
    }
}

impl Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The structured result of parsing one expense utterance.
///
/// Every field except `confidence` is optional: the parser never fails, it
/// simply leaves out whatever it could not extract. The caller decides what
/// to do with a sparse result, typically after running it through
/// [validate](crate::validate).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedExpense {
    /// The monetary amount, strictly positive when present.
    pub amount: Option<f64>,
    /// The currency of `amount`. Defaults to the home currency when an
    /// amount was found but no foreign-currency keyword appeared in the
    /// text.
    pub currency: Option<Currency>,
    /// The utterance with amount and verb boilerplate stripped, or the raw
    /// utterance when stripping leaves nothing.
    pub description: Option<String>,
    /// The matched expense category, if any keyword hit.
    pub category: Option<Category>,
    /// The matched account-type hint, if any keyword hit.
    pub account: Option<AccountKind>,
    /// The calendar date the utterance refers to, if one was recognized.
    pub date: Option<Date>,
    /// Additive confidence score in `[0, 1]`, summed from the per-field
    /// weights of the fields that were successfully extracted.
    pub confidence: f64,
}

impl ParsedExpense {
    /// Creates a parse result with no fields extracted and zero confidence.
    pub fn empty() -> Self {
        Self::default()
    }
}
