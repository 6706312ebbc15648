//! 展示格式化
//!
//! 金额以西非法郎（FCFA）显示，千位分隔与 `fr-FR` 一致（U+202F 窄不换行空格）。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const THOUSANDS_SEPARATOR: char = '\u{202f}';

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// 四舍五入到整数并分组，非有限值按 0 处理
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = value.round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("{} FCFA", format_number(amount))
}

pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    format!("{value:.1}%")
}

/// 将后端时间戳显示为 `dd/mm/yyyy`；无法解析时原样返回日期部分
pub fn format_date(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match parsed {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.split('T').next().unwrap_or(raw).to_string(),
    }
}
