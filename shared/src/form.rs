//! 表单字段转换规则
//!
//! 表单中每个输入框保存的都是原始文本，提交时通过这里的函数
//! 显式地转换为领域类型。所有函数都不会失败：无法解析的输入回退到默认值。

/// 列表字段在表单中的分隔符（回显时使用）
pub const LIST_SEPARATOR: &str = ", ";

/// 取输入的前导整数部分
///
/// `"12"` -> 12, `" 3.7"` -> 3, `"5km"` -> 5, `"-2"` -> -2, `"abc"` / `""` -> None
pub fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // 超长数字按饱和处理
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// 非负整数字段（海拔、距离、天数、小时数）
pub fn parse_whole(input: &str) -> u32 {
    match leading_integer(input) {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// 金额字段，负数与非有限值均回退为 0
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// 将逗号分隔的文本拆分为列表：去除首尾空白并丢弃空项
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}
