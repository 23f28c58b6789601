//! Template Catalog
//!
//! The fixed set of checklist templates and their default labels.

use super::item::ChecklistItem;

/// Template identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKey {
    /// Outbound inspection
    #[default]
    Out,
    /// Return inspection
    Return,
    /// Cleaning
    Clean,
    /// Forklift pre-use check
    Fork,
    /// Washer check
    Washer,
    /// End of day
    End,
}

/// Every template in selector order
pub const ALL_TEMPLATES: [TemplateKey; 6] = [
    TemplateKey::Out,
    TemplateKey::Return,
    TemplateKey::Clean,
    TemplateKey::Fork,
    TemplateKey::Washer,
    TemplateKey::End,
];

impl TemplateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::Out => "out",
            TemplateKey::Return => "return",
            TemplateKey::Clean => "clean",
            TemplateKey::Fork => "fork",
            TemplateKey::Washer => "washer",
            TemplateKey::End => "end",
        }
    }

    /// Parse a selector value. Unknown keys yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "out" => Some(TemplateKey::Out),
            "return" => Some(TemplateKey::Return),
            "clean" => Some(TemplateKey::Clean),
            "fork" => Some(TemplateKey::Fork),
            "washer" => Some(TemplateKey::Washer),
            "end" => Some(TemplateKey::End),
            _ => None,
        }
    }

    /// Name shown in the template selector
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKey::Out => "出庫点検",
            TemplateKey::Return => "返却点検",
            TemplateKey::Clean => "清掃",
            TemplateKey::Fork => "フォークリフト点検",
            TemplateKey::Washer => "洗浄機点検",
            TemplateKey::End => "終業点検",
        }
    }

    pub fn default_labels(&self) -> &'static [&'static str] {
        match self {
            TemplateKey::Out => &[
                "外観チェック（割れ・欠け）",
                "数量・品番確認",
                "付属品確認",
                "動作確認",
                "積み込み固定",
            ],
            TemplateKey::Return => &[
                "数量・品番確認",
                "破損・欠品の確認",
                "付属品確認",
                "返却伝票の確認",
                "置き場へ戻す",
            ],
            TemplateKey::Clean => &[
                "大きな汚れを除去",
                "拭き上げ（取っ手・操作部）",
                "ゴミ/異物の確認",
                "乾燥・水気確認",
                "清掃完了報告",
            ],
            TemplateKey::Fork => &[
                "タイヤ空気圧/損傷",
                "フォーク爪の損傷",
                "ライト/警告灯",
                "ブレーキ確認",
                "異音・油漏れ確認",
            ],
            TemplateKey::Washer => &[
                "電源/非常停止",
                "水位・水漏れ確認",
                "フィルター清掃",
                "異音・振動確認",
                "周辺安全確認",
            ],
            TemplateKey::End => &[
                "戸締まり確認",
                "火気/電源OFF",
                "整理整頓（通路確保）",
                "廃棄物の処理",
                "日報/引継ぎ",
            ],
        }
    }

    /// Fresh snapshot of the default labels, all unchecked
    pub fn default_items(&self) -> Vec<ChecklistItem> {
        self.default_labels()
            .iter()
            .map(|label| ChecklistItem::new(*label))
            .collect()
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
