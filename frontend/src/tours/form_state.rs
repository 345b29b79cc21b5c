//! 表单状态管理模块
//!
//! `TourForm` 保存每个输入框的原始文本，负责：
//! - 从已有行程回填（编辑）或使用默认值（创建）
//! - 提交时通过显式的转换函数生成 `TourDraft`

use trek_admin_shared::form::{join_list, parse_amount, parse_whole, split_list};
use trek_admin_shared::{Difficulty, PriceTiers, Tour, TourDraft, TourDuration, TourStatus};

/// 表单中的文本字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourField {
    Name,
    Description,
    Temperature,
    Altitude,
    Difficulty,
    Distance,
    Days,
    Hours,
    PriceOne,
    PriceCouple,
    PriceThreeToFive,
    PriceSixPlus,
    Images,
    Includes,
    Recommendations,
}

impl TourField {
    /// 输入框的 `min` / `max` 提示；提交时仍由转换函数截断
    pub fn input_bounds(self) -> Option<(u8, u8)> {
        match self {
            TourField::Difficulty => Some((Difficulty::MIN, Difficulty::MAX)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TourForm {
    pub name: String,
    pub description: String,
    pub temperature: String,
    pub altitude: String,
    pub difficulty: String,
    pub distance: String,
    pub days: String,
    pub hours: String,
    pub price_one: String,
    pub price_couple: String,
    pub price_three_to_five: String,
    pub price_six_plus: String,
    /// 逗号分隔
    pub images: String,
    pub includes: String,
    pub recommendations: String,
    pub status: TourStatus,
}

impl TourForm {
    /// 创建用的空表单：难度 1，状态 active
    pub fn blank() -> Self {
        Self::from_draft(&TourDraft::default())
    }

    /// 编辑用：逐字段回填，列表字段以 `", "` 连接
    pub fn from_tour(tour: &Tour) -> Self {
        Self::from_draft(&tour.details)
    }

    fn from_draft(d: &TourDraft) -> Self {
        Self {
            name: d.name.clone(),
            description: d.description.clone(),
            temperature: d.temperature.clone(),
            altitude: d.altitude.to_string(),
            difficulty: d.difficulty.to_string(),
            distance: d.distance.to_string(),
            days: d.duration.days.to_string(),
            hours: d.duration.hours.to_string(),
            price_one: d.prices.solo.to_string(),
            price_couple: d.prices.couple.to_string(),
            price_three_to_five: d.prices.group_three_to_five.to_string(),
            price_six_plus: d.prices.group_six_plus.to_string(),
            images: join_list(&d.images),
            includes: join_list(&d.includes),
            recommendations: join_list(&d.recommendations),
            status: d.status,
        }
    }

    pub fn get(&self, field: TourField) -> &str {
        match field {
            TourField::Name => &self.name,
            TourField::Description => &self.description,
            TourField::Temperature => &self.temperature,
            TourField::Altitude => &self.altitude,
            TourField::Difficulty => &self.difficulty,
            TourField::Distance => &self.distance,
            TourField::Days => &self.days,
            TourField::Hours => &self.hours,
            TourField::PriceOne => &self.price_one,
            TourField::PriceCouple => &self.price_couple,
            TourField::PriceThreeToFive => &self.price_three_to_five,
            TourField::PriceSixPlus => &self.price_six_plus,
            TourField::Images => &self.images,
            TourField::Includes => &self.includes,
            TourField::Recommendations => &self.recommendations,
        }
    }

    pub fn set(&mut self, field: TourField, value: String) {
        let slot = match field {
            TourField::Name => &mut self.name,
            TourField::Description => &mut self.description,
            TourField::Temperature => &mut self.temperature,
            TourField::Altitude => &mut self.altitude,
            TourField::Difficulty => &mut self.difficulty,
            TourField::Distance => &mut self.distance,
            TourField::Days => &mut self.days,
            TourField::Hours => &mut self.hours,
            TourField::PriceOne => &mut self.price_one,
            TourField::PriceCouple => &mut self.price_couple,
            TourField::PriceThreeToFive => &mut self.price_three_to_five,
            TourField::PriceSixPlus => &mut self.price_six_plus,
            TourField::Images => &mut self.images,
            TourField::Includes => &mut self.includes,
            TourField::Recommendations => &mut self.recommendations,
        };
        *slot = value;
    }

    /// 将表单状态转换为请求数据
    pub fn to_draft(&self) -> TourDraft {
        TourDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            altitude: parse_whole(&self.altitude),
            difficulty: Difficulty::parse_lenient(&self.difficulty),
            distance: parse_whole(&self.distance),
            temperature: self.temperature.clone(),
            duration: TourDuration {
                days: parse_whole(&self.days),
                hours: parse_whole(&self.hours),
            },
            prices: PriceTiers {
                solo: parse_amount(&self.price_one),
                couple: parse_amount(&self.price_couple),
                group_three_to_five: parse_amount(&self.price_three_to_five),
                group_six_plus: parse_amount(&self.price_six_plus),
            },
            images: split_list(&self.images),
            includes: split_list(&self.includes),
            recommendations: split_list(&self.recommendations),
            status: self.status,
        }
    }
}

impl Default for TourForm {
    fn default() -> Self {
        Self::blank()
    }
}
