//! 表格单元格的展示格式

use trek_admin_shared::{Difficulty, PriceTiers, TourDuration};

const EXCERPT_CHARS: usize = 50;

/// 描述摘要：前 50 个字符加 `...`
pub fn excerpt(description: &str) -> String {
    let head: String = description.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}

pub fn difficulty_label(difficulty: Difficulty) -> String {
    format!("{}/{}", difficulty, Difficulty::MAX)
}

pub fn distance_label(distance: u32) -> String {
    format!("{distance} km")
}

/// 只显示大于 0 的部分
pub fn duration_label(duration: &TourDuration) -> String {
    let mut parts = Vec::with_capacity(2);
    if duration.days > 0 {
        parts.push(format!("{} days", duration.days));
    }
    if duration.hours > 0 {
        parts.push(format!("{} hours", duration.hours));
    }
    parts.join(" ")
}

/// 整数金额不带小数
pub fn amount_label(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount}")
    }
}

/// 表格中显示的是单人价
pub fn price_label(prices: &PriceTiers) -> String {
    amount_label(prices.solo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_truncates_to_fifty_chars() {
        let long = "a".repeat(80);
        assert_eq!(excerpt(&long), format!("{}...", "a".repeat(50)));
        assert_eq!(excerpt("Short"), "Short...");
        assert_eq!(excerpt(""), "...");
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let text = "ñ".repeat(60);
        assert_eq!(excerpt(&text).chars().count(), 53);
    }

    #[test]
    fn test_duration_label_skips_zero_parts() {
        let both = TourDuration { days: 3, hours: 4 };
        let days_only = TourDuration { days: 2, hours: 0 };
        let hours_only = TourDuration { days: 0, hours: 6 };

        assert_eq!(duration_label(&both), "3 days 4 hours");
        assert_eq!(duration_label(&days_only), "2 days");
        assert_eq!(duration_label(&hours_only), "6 hours");
        assert_eq!(duration_label(&TourDuration::default()), "");
    }

    #[test]
    fn test_numeric_labels() {
        assert_eq!(difficulty_label(Difficulty::parse_lenient("4")), "4/5");
        assert_eq!(distance_label(14), "14 km");
        assert_eq!(amount_label(120.0), "$120");
        assert_eq!(amount_label(99.5), "$99.5");
    }
}
