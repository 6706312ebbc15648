//! 各页面加载后持有的数据快照
//!
//! 多个列表同时拉取时组合为一个快照，要么整体成功，要么整体为空。

use crate::metrics::{DashboardMetrics, compute_metrics};
use crate::{Booking, Course, DashboardStats, TeeTime, User};
use std::collections::HashMap;

pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_COURSE: &str = "Unknown";
pub const MISSING_VALUE: &str = "-";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub users: Vec<User>,
    pub bookings: Vec<Booking>,
    pub courses: Vec<Course>,
}

impl DashboardSnapshot {
    pub fn metrics(&self) -> DashboardMetrics {
        compute_metrics(&self.users, &self.bookings, &self.courses, &self.stats)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeeTimesSnapshot {
    pub tee_times: Vec<TeeTime>,
    pub courses: Vec<Course>,
}

impl TeeTimesSnapshot {
    pub fn course_name(&self, course_id: &str) -> &str {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_COURSE)
    }

    /// 至少存在一个球场时才能新建开球时间
    pub fn can_create(&self) -> bool {
        !self.courses.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingsSnapshot {
    pub bookings: Vec<Booking>,
    pub users: Vec<User>,
    pub tee_times: Vec<TeeTime>,
    pub courses: Vec<Course>,
}

/// 预订表格的一行，所有关联都已解析为显示文本
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow {
    pub id: String,
    pub user_name: String,
    pub user_email: String,
    pub course_name: String,
    pub date: String,
    pub time: String,
    pub players_count: u32,
    pub status: String,
    pub confirmed: bool,
}

impl BookingsSnapshot {
    pub fn rows(&self) -> Vec<BookingRow> {
        let users: HashMap<&str, &User> =
            self.users.iter().map(|u| (u.id.as_str(), u)).collect();
        let tee_times: HashMap<&str, &TeeTime> =
            self.tee_times.iter().map(|t| (t.id.as_str(), t)).collect();
        let courses: HashMap<&str, &Course> =
            self.courses.iter().map(|c| (c.id.as_str(), c)).collect();

        self.bookings
            .iter()
            .map(|booking| {
                let user = users.get(booking.user_id.as_str());
                let tee_time = tee_times.get(booking.tee_time_id.as_str());
                let course = tee_time.and_then(|t| courses.get(t.course_id.as_str()));

                BookingRow {
                    id: booking.id.clone(),
                    user_name: user
                        .map(|u| u.full_name())
                        .unwrap_or_else(|| UNKNOWN_USER.to_string()),
                    user_email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    course_name: course
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| UNKNOWN_COURSE.to_string()),
                    date: tee_time
                        .map(|t| t.date.clone())
                        .unwrap_or_else(|| MISSING_VALUE.to_string()),
                    time: tee_time
                        .map(|t| t.time.clone())
                        .unwrap_or_else(|| MISSING_VALUE.to_string()),
                    players_count: booking.players_count,
                    status: booking.status.clone(),
                    confirmed: booking.is_confirmed(),
                }
            })
            .collect()
    }
}
