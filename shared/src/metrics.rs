//! 仪表盘指标聚合
//!
//! 纯函数：输入四个已拉取的集合，输出派生指标。不访问网络或存储，
//! 字段缺失或格式错误时退化为零值 / 默认值，从不失败。

use crate::{Booking, Course, CourseStatus, DashboardStats, User};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};

/// 每笔预订的估算收入（FCFA）。占位常量，待后端提供真实价格数据。
pub const ESTIMATED_REVENUE_PER_BOOKING: u64 = 5_000;

const AFTERNOON_START_HOUR: u32 = 12;
const EVENING_START_HOUR: u32 = 18;

// =========================================================
// 数据结构
// =========================================================

/// 时段分桶
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn from_hour(hour: u32) -> Self {
        if hour < AFTERNOON_START_HOUR {
            TimeSlot::Morning
        } else if hour < EVENING_START_HOUR {
            TimeSlot::Afternoon
        } else {
            TimeSlot::Evening
        }
    }

    /// 按预订自身的时间分桶：优先开球时刻，其次创建时间，都没有时归入上午
    ///
    /// 创建时间只是下单时刻，不代表开球时段；缺少 `time` 时仅作近似。
    pub fn of_booking(booking: &Booking) -> Self {
        booking
            .time
            .as_deref()
            .and_then(clock_hour)
            .or_else(|| booking.created_at.as_deref().and_then(timestamp_hour))
            .map(TimeSlot::from_hour)
            .unwrap_or(TimeSlot::Morning)
    }
}

fn clock_hour(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
        .map(|t| t.hour())
}

fn timestamp_hour(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.hour())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.hour()))
        .ok()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotShare {
    pub count: u64,
    /// 占总预订数的整数百分比
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeSlotBreakdown {
    pub morning: SlotShare,
    pub afternoon: SlotShare,
    pub evening: SlotShare,
}

impl TimeSlotBreakdown {
    pub fn get(&self, slot: TimeSlot) -> SlotShare {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }

    pub fn percentage_sum(&self) -> u32 {
        self.morning.percentage + self.afternoon.percentage + self.evening.percentage
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseStatusCounts {
    pub open: u64,
    pub closed: u64,
    pub maintenance: u64,
}

/// 派生指标，每次加载重新计算，不持久化
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardMetrics {
    pub active_user_count: u64,
    pub total_users: u64,
    pub retention_rate: f64,
    pub bookings_by_time_slot: TimeSlotBreakdown,
    pub course_status_counts: CourseStatusCounts,
    /// 估算值：固定单价 × 预订数，并非财务数据
    pub estimated_revenue: u64,
    pub total_bookings: u64,
    pub total_courses: u64,
    pub active_subscriptions: u64,
    pub upcoming_competitions: u64,
}

// =========================================================
// 计算
// =========================================================

/// `part / total × 100`，`total` 为 0 时返回 0
pub fn retention_rate(active: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    active as f64 / total as f64 * 100.0
}

/// 最大余数法：每项取整后误差不超过 1，且非零总数时合计恰为 100
pub fn distribute_percentages<const N: usize>(counts: [u64; N]) -> [u32; N] {
    let total: u64 = counts.iter().sum();
    let mut shares = [0u32; N];
    if total == 0 {
        return shares;
    }

    let mut remainders = [(0u64, 0usize); N];
    let mut assigned = 0u64;
    for (i, &count) in counts.iter().enumerate() {
        let scaled = count * 100;
        shares[i] = (scaled / total) as u32;
        assigned += scaled / total;
        remainders[i] = (scaled % total, i);
    }

    // 余数大者优先，相同余数按原顺序
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for &(_, idx) in remainders.iter().take((100 - assigned) as usize) {
        shares[idx] += 1;
    }
    shares
}

pub fn bucket_bookings(bookings: &[Booking]) -> TimeSlotBreakdown {
    let mut counts = [0u64; 3];
    for booking in bookings {
        let idx = match TimeSlot::of_booking(booking) {
            TimeSlot::Morning => 0,
            TimeSlot::Afternoon => 1,
            TimeSlot::Evening => 2,
        };
        counts[idx] += 1;
    }

    let [morning, afternoon, evening] = distribute_percentages(counts);
    TimeSlotBreakdown {
        morning: SlotShare {
            count: counts[0],
            percentage: morning,
        },
        afternoon: SlotShare {
            count: counts[1],
            percentage: afternoon,
        },
        evening: SlotShare {
            count: counts[2],
            percentage: evening,
        },
    }
}

pub fn count_course_statuses(courses: &[Course]) -> CourseStatusCounts {
    courses
        .iter()
        .fold(CourseStatusCounts::default(), |mut acc, course| {
            match course.status() {
                CourseStatus::Open => acc.open += 1,
                CourseStatus::Closed => acc.closed += 1,
                CourseStatus::Maintenance => acc.maintenance += 1,
            }
            acc
        })
}

pub fn compute_metrics(
    users: &[User],
    bookings: &[Booking],
    courses: &[Course],
    raw_stats: &DashboardStats,
) -> DashboardMetrics {
    let total_users = users.len() as u64;
    let active_user_count = users.iter().filter(|u| u.is_active).count() as u64;
    let total_bookings = bookings.len() as u64;

    DashboardMetrics {
        active_user_count,
        total_users,
        retention_rate: retention_rate(active_user_count, total_users),
        bookings_by_time_slot: bucket_bookings(bookings),
        course_status_counts: count_course_statuses(courses),
        estimated_revenue: total_bookings * ESTIMATED_REVENUE_PER_BOOKING,
        total_bookings,
        total_courses: courses.len() as u64,
        active_subscriptions: raw_stats.active_subscriptions,
        upcoming_competitions: raw_stats.upcoming_competitions,
    }
}

#[cfg(test)]
mod tests;
