//! Human-readable narration for each step kind.
//!
//! Narration is advisory text for the viewer; nothing in the engine or the
//! controller reads it back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Narration language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    pub(crate) fn start(&self) -> String {
        match self {
            Locale::En => "Starting quick sort (divide and conquer).".to_string(),
            Locale::Ja => {
                "クイックソート（分割統治法）を開始します。高速な並び替えを実現します。".to_string()
            }
        }
    }

    pub(crate) fn pivot_selected(&self, pivot: i64) -> String {
        match self {
            Locale::En => format!("Pivot set to {} (last element of the range).", pivot),
            Locale::Ja => format!("ピボット（基準となる値）を {} に設定します。", pivot),
        }
    }

    pub(crate) fn range_start(&self, low: usize, high: usize) -> String {
        match self {
            Locale::En => format!("Comparing indices {} through {} against the pivot.", low, high - 1),
            Locale::Ja => format!(
                "インデックス {} から {} までの範囲で比較を開始します。",
                low,
                high - 1
            ),
        }
    }

    pub(crate) fn compare(&self, pivot: i64, value: i64) -> String {
        match self {
            Locale::En => format!("Compare {} with pivot {}.", value, pivot),
            Locale::Ja => format!("ピボット {} と {} を比較します。", pivot, value),
        }
    }

    pub(crate) fn swap(&self, value: i64, dest: usize) -> String {
        match self {
            Locale::En => format!(
                "{} is smaller than the pivot, so it moves to the left group (index {}).",
                value, dest
            ),
            Locale::Ja => format!(
                "{} はピボットより小さいので、左側のグループ（インデックス {}）へ移動します。",
                value, dest
            ),
        }
    }

    pub(crate) fn partition_done(&self, pivot: i64, dest: usize) -> String {
        match self {
            Locale::En => format!(
                "Finally, pivot {} goes to index {}; this partition is done.",
                pivot, dest
            ),
            Locale::Ja => format!(
                "最後に、ピボット {} を中央（インデックス {}）に配置して、分割完了です。",
                pivot, dest
            ),
        }
    }

    pub(crate) fn complete(&self) -> String {
        match self {
            Locale::En => "Every partition is finished. The array is sorted!".to_string(),
            Locale::Ja => "すべての分割と整列が終了しました！最速の証です。".to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ja" | "japanese" => Ok(Locale::Ja),
            other => Err(format!("unknown locale '{}' (expected en or ja)", other)),
        }
    }
}
