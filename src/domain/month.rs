// ==========================================
// 人力规划表格导入 - 月份令牌
// ==========================================
// 规则: 12 个标准三字母缩写，按日历顺序全序
// 列识别只产出标准月份，非标准标签在类型层面不可表示
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Month - 月份
// ==========================================
// 声明顺序即日历顺序，derive(Ord) 直接按日历排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// 日历顺序的全部月份
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// 三字母缩写（Jan..Dec）
    pub fn abbr(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// 英文全称
    pub fn full_name(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    /// 日历序号（0 = Jan）
    pub fn index(self) -> usize {
        self as usize
    }

    /// 按序号取月份（0..12）
    pub fn from_index(idx: usize) -> Option<Month> {
        Month::ALL.get(idx).copied()
    }

    /// 解析月份标签（大小写不敏感，接受缩写或全称）
    pub fn parse(label: &str) -> Option<Month> {
        let lower = label.trim().to_lowercase();
        Month::ALL.iter().copied().find(|m| {
            lower == m.abbr().to_lowercase() || lower == m.full_name().to_lowercase()
        })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}
