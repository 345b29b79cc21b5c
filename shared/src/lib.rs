use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub mod form;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 生成 `Authorization` 头的值
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 后端分配的行程 ID，创建后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TourId(pub i64);

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 难度等级无效
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("difficulty must be between {min} and {max}, got {0}", min = Difficulty::MIN, max = Difficulty::MAX)]
pub struct DifficultyOutOfRange(pub u8);

/// 难度等级，只能取 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::MIN && level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 从表单输入宽松解析
    ///
    /// 取前导整数部分；无法解析或为 0 时回退到 1，超出范围时截断到 1..=5。
    pub fn parse_lenient(input: &str) -> Self {
        match form::leading_integer(input) {
            None | Some(0) => Self::default(),
            Some(n) => Self(n.clamp(Self::MIN as i64, Self::MAX as i64) as u8),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyOutOfRange;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(DifficultyOutOfRange(level))
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourStatus {
    #[default]
    Active,
    Inactive,
}

impl TourStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TourStatus::Active => "active",
            TourStatus::Inactive => "inactive",
        }
    }

    /// 解析 `<select>` 的值，未知值视为 active
    pub fn from_form_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("inactive") {
            TourStatus::Inactive
        } else {
            TourStatus::Active
        }
    }
}

impl fmt::Display for TourStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 行程时长 (天, 小时)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TourDuration {
    pub days: u32,
    pub hours: u32,
}

/// 四档价格
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceTiers {
    #[serde(rename = "price_one")]
    pub solo: f64,
    #[serde(rename = "price_couple")]
    pub couple: f64,
    #[serde(rename = "price_three_to_five")]
    pub group_three_to_five: f64,
    #[serde(rename = "price_six_plus")]
    pub group_six_plus: f64,
}

/// 行程中可编辑的部分
///
/// 创建和更新都只携带这些字段；`id` 与 `created_at` 由后端维护。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TourDraft {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// 海拔 (米)
    pub altitude: u32,
    pub difficulty: Difficulty,
    /// 距离 (公里)
    pub distance: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature: String,
    #[serde(flatten)]
    pub duration: TourDuration,
    #[serde(flatten)]
    pub prices: PriceTiers,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub includes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub status: TourStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: TourId,
    #[serde(flatten)]
    pub details: TourDraft,
    #[serde(
        default,
        deserialize_with = "timestamp_assume_utc",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

// 后端对空列表/空文本有时返回 null
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// `timestamp` 列不带时区，按 UTC 处理
fn timestamp_assume_utc<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&raw, fmt).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{raw}`")))
}
