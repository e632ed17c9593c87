//! String localization.
//!
//! The library never loads resource bundles itself.  Callers hand in any
//! [`Localize`] implementation; every key it does not answer falls back to the
//! built-in English table.  Three built-in locales ship with the crate, see
//! [`BuiltinLocale`].
//!
//! # Keys
//! | key | entries |
//! |-----|---------|
//! | `weekday.1` … `weekday.7` | Sunday … Saturday |
//! | `lunar.stem.1` … `lunar.stem.10` | heavenly stems |
//! | `lunar.branch.1` … `lunar.branch.12` | earthly branches |
//! | `lunar.month.1` … `lunar.month.12` | lunar month names |
//! | `lunar.day.1` … `lunar.day.30` | lunar day names |
//! | `lunar.year_suffix`, `lunar.month_suffix`, `lunar.leap_prefix` | affixes |

use std::collections::HashMap;

use crate::text_table::TextTable;

/// Key prefix of the weekday names (Sunday = 1).
pub const WEEKDAY: &str = "weekday";
/// Key prefix of the heavenly stems.
pub const LUNAR_STEM: &str = "lunar.stem";
/// Key prefix of the earthly branches.
pub const LUNAR_BRANCH: &str = "lunar.branch";
/// Key prefix of the lunar month names.
pub const LUNAR_MONTH: &str = "lunar.month";
/// Key prefix of the lunar day names.
pub const LUNAR_DAY: &str = "lunar.day";
/// Key of the suffix appended to stem-branch year names.
pub const LUNAR_YEAR_SUFFIX: &str = "lunar.year_suffix";
/// Key of the suffix appended to lunar month names.
pub const LUNAR_MONTH_SUFFIX: &str = "lunar.month_suffix";
/// Key of the prefix marking a leap month.
pub const LUNAR_LEAP_PREFIX: &str = "lunar.leap_prefix";

/// A string-lookup collaborator.
///
/// Returns `None` for keys it does not know.
pub trait Localize {
    /// Look up the localized string for `key`.
    fn localize(&self, key: &str) -> Option<String>;
}

impl<F> Localize for F
where
    F: Fn(&str) -> Option<String>,
{
    fn localize(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl Localize for HashMap<String, String> {
    fn localize(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Locales whose tables are compiled into the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltinLocale {
    /// English (also the fallback for every other locale).
    #[default]
    English,
    /// Simplified Chinese (`zh-Hans`).
    SimplifiedChinese,
    /// Traditional Chinese (`zh-Hant`).
    TraditionalChinese,
}

impl BuiltinLocale {
    /// Resolve a BCP-47 style language tag (e.g. `"zh-Hans-CN"`).
    ///
    /// `en*` maps to English; `zh*` maps to Simplified Chinese when the tag
    /// names the `Hans` script and to Traditional Chinese otherwise; anything
    /// else maps to English.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.starts_with("zh") {
            if tag.contains("Hans") {
                BuiltinLocale::SimplifiedChinese
            } else {
                BuiltinLocale::TraditionalChinese
            }
        } else {
            BuiltinLocale::English
        }
    }

    fn table(&self, prefix: &str) -> Option<&'static [&'static str]> {
        use BuiltinLocale::*;
        let table: &'static [&'static str] = match (prefix, self) {
            (WEEKDAY, English) => &EN_WEEKDAYS,
            (WEEKDAY, SimplifiedChinese) => &HANS_WEEKDAYS,
            (WEEKDAY, TraditionalChinese) => &HANT_WEEKDAYS,
            (LUNAR_STEM, English) => &EN_STEMS,
            (LUNAR_STEM, _) => &ZH_STEMS,
            (LUNAR_BRANCH, English) => &EN_BRANCHES,
            (LUNAR_BRANCH, _) => &ZH_BRANCHES,
            (LUNAR_MONTH, English) => &EN_MONTHS,
            (LUNAR_MONTH, SimplifiedChinese) => &HANS_MONTHS,
            (LUNAR_MONTH, TraditionalChinese) => &HANT_MONTHS,
            (LUNAR_DAY, English) => &EN_DAYS,
            (LUNAR_DAY, _) => &ZH_DAYS,
            _ => return None,
        };
        Some(table)
    }

    fn affix(&self, key: &str) -> Option<&'static str> {
        use BuiltinLocale::*;
        let s = match (key, self) {
            (LUNAR_YEAR_SUFFIX, English) => " Year",
            (LUNAR_YEAR_SUFFIX, _) => "年",
            (LUNAR_MONTH_SUFFIX, English) => " Month",
            (LUNAR_MONTH_SUFFIX, _) => "月",
            (LUNAR_LEAP_PREFIX, English) => "Leap ",
            (LUNAR_LEAP_PREFIX, SimplifiedChinese) => "闰",
            (LUNAR_LEAP_PREFIX, TraditionalChinese) => "閏",
            _ => return None,
        };
        Some(s)
    }
}

impl Localize for BuiltinLocale {
    fn localize(&self, key: &str) -> Option<String> {
        if let Some(s) = self.affix(key) {
            return Some(s.to_string());
        }
        let (prefix, n) = key.rsplit_once('.')?;
        let n: usize = n.parse().ok()?;
        let table = self.table(prefix)?;
        n.checked_sub(1)
            .and_then(|i| table.get(i))
            .map(|s| s.to_string())
    }
}

/// Look up `key`, falling back to the built-in English string, and finally to
/// the key itself.
pub fn localized(locale: &dyn Localize, key: &str) -> String {
    locale
        .localize(key)
        .or_else(|| {
            log::debug!("no localization for {key:?}, using English");
            BuiltinLocale::English.localize(key)
        })
        .unwrap_or_else(|| key.to_string())
}

/// Load the `len` entries `prefix.1` … `prefix.len` into a [`TextTable`],
/// resolving each key with [`localized`].
pub fn load_table(locale: &dyn Localize, prefix: &str, len: usize) -> TextTable {
    (1..=len)
        .map(|i| localized(locale, &format!("{prefix}.{i}")))
        .collect::<Vec<_>>()
        .into()
}

// ── Built-in tables ───────────────────────────────────────────────────────────

const EN_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const HANS_WEEKDAYS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];
const HANT_WEEKDAYS: [&str; 7] = ["週日", "週一", "週二", "週三", "週四", "週五", "週六"];

const EN_STEMS: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];
const ZH_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const EN_BRANCHES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];
const ZH_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const EN_MONTHS: [&str; 12] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
    "Tenth", "Eleventh", "Twelfth",
];
const HANS_MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];
const HANT_MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "臘",
];

const EN_DAYS: [&str; 30] = [
    "Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7", "Day 8", "Day 9", "Day 10",
    "Day 11", "Day 12", "Day 13", "Day 14", "Day 15", "Day 16", "Day 17", "Day 18", "Day 19",
    "Day 20", "Day 21", "Day 22", "Day 23", "Day 24", "Day 25", "Day 26", "Day 27", "Day 28",
    "Day 29", "Day 30",
];
const ZH_DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags() {
        assert_eq!(BuiltinLocale::from_language_tag("en-GB"), BuiltinLocale::English);
        assert_eq!(
            BuiltinLocale::from_language_tag("zh-Hans-CN"),
            BuiltinLocale::SimplifiedChinese
        );
        assert_eq!(
            BuiltinLocale::from_language_tag("zh-Hant-TW"),
            BuiltinLocale::TraditionalChinese
        );
        assert_eq!(
            BuiltinLocale::from_language_tag("zh-HK"),
            BuiltinLocale::TraditionalChinese
        );
        assert_eq!(BuiltinLocale::from_language_tag("fr-FR"), BuiltinLocale::English);
    }

    #[test]
    fn builtin_keys() {
        let zh = BuiltinLocale::SimplifiedChinese;
        assert_eq!(zh.localize("weekday.1").as_deref(), Some("周日"));
        assert_eq!(zh.localize("lunar.month.12").as_deref(), Some("腊"));
        assert_eq!(zh.localize("lunar.day.30").as_deref(), Some("三十"));
        assert_eq!(zh.localize("lunar.leap_prefix").as_deref(), Some("闰"));
        assert_eq!(zh.localize("lunar.day.31"), None);
        assert_eq!(zh.localize("lunar.day.0"), None);
        assert_eq!(zh.localize("nonsense"), None);
    }

    #[test]
    fn partial_locale_falls_back_to_english() {
        let mut map = HashMap::new();
        map.insert("weekday.1".to_string(), "Sunday".to_string());
        let table = load_table(&map, WEEKDAY, 7);
        assert_eq!(table.as_slice()[0], "Sunday");
        assert_eq!(table.as_slice()[1], "Mon");
        assert_eq!(localized(&map, "unknown.key"), "unknown.key");
    }

    #[test]
    fn closures_are_locales() {
        let shouting = |key: &str| BuiltinLocale::English.localize(key).map(|s| s.to_uppercase());
        assert_eq!(localized(&shouting, "weekday.2"), "MON");
    }
}
