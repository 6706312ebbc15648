use super::*;
use crate::Role;

// =========================================================
// 辅助函数
// =========================================================

fn users(total: usize, active: usize) -> Vec<User> {
    (0..total)
        .map(|i| User {
            id: format!("u{i}"),
            email: format!("u{i}@teebook.com"),
            first_name: "Player".into(),
            last_name: i.to_string(),
            role: Role::User,
            handicap_index: None,
            is_active: i < active,
        })
        .collect()
}

fn booking(id: &str, time: Option<&str>, created_at: Option<&str>) -> Booking {
    Booking {
        id: id.into(),
        user_id: "u1".into(),
        tee_time_id: "t1".into(),
        players_count: 2,
        status: "confirmed".into(),
        created_at: created_at.map(String::from),
        time: time.map(String::from),
    }
}

fn course(status: Option<&str>) -> Course {
    Course {
        id: "c".into(),
        name: "Course".into(),
        description: None,
        holes_count: 18,
        status: status.map(String::from),
    }
}

// =========================================================
// 留存率
// =========================================================

#[test]
fn test_retention_scenario_ten_users_four_active() {
    let m = compute_metrics(&users(10, 4), &[], &[], &DashboardStats::default());
    assert_eq!(m.active_user_count, 4);
    assert_eq!(m.total_users, 10);
    assert_eq!(m.retention_rate, 40.0);
}

#[test]
fn test_retention_zero_users_is_zero() {
    let m = compute_metrics(&[], &[], &[], &DashboardStats::default());
    assert_eq!(m.retention_rate, 0.0);
    assert_eq!(m.active_user_count, 0);
}

#[test]
fn test_retention_formula_over_range() {
    for n in 0..=25u64 {
        for k in 0..=n {
            let expected = if n == 0 { 0.0 } else { 100.0 * k as f64 / n as f64 };
            assert!((retention_rate(k, n) - expected).abs() < 1e-9);
        }
    }
}

// =========================================================
// 时段分桶
// =========================================================

#[test]
fn test_bucketing_uses_booking_time() {
    let bookings = vec![
        booking("b1", Some("07:30"), None),
        booking("b2", Some("11:59"), None),
        booking("b3", Some("12:00"), None),
        booking("b4", Some("17:45:00"), None),
        booking("b5", Some("18:00"), None),
    ];
    let slots = bucket_bookings(&bookings);
    assert_eq!(slots.morning.count, 2);
    assert_eq!(slots.afternoon.count, 2);
    assert_eq!(slots.evening.count, 1);
    assert_eq!(slots.morning.percentage, 40);
    assert_eq!(slots.afternoon.percentage, 40);
    assert_eq!(slots.evening.percentage, 20);
}

#[test]
fn test_bucketing_falls_back_to_created_at_then_morning() {
    let bookings = vec![
        booking("b1", None, Some("2024-04-02T19:15:00Z")),
        booking("b2", None, Some("2024-04-02T13:00:00.000123")),
        booking("b3", Some("not a time"), None),
        booking("b4", None, None),
    ];
    assert_eq!(TimeSlot::of_booking(&bookings[0]), TimeSlot::Evening);
    assert_eq!(TimeSlot::of_booking(&bookings[1]), TimeSlot::Afternoon);
    assert_eq!(TimeSlot::of_booking(&bookings[2]), TimeSlot::Morning);
    assert_eq!(TimeSlot::of_booking(&bookings[3]), TimeSlot::Morning);
}

#[test]
fn test_bucketing_is_deterministic() {
    let bookings: Vec<_> = (0..30)
        .map(|i| {
            let clock = format!("{:02}:10", 6 + i % 16);
            booking(&format!("b{i}"), Some(clock.as_str()), None)
        })
        .collect();
    assert_eq!(bucket_bookings(&bookings), bucket_bookings(&bookings));
}

#[test]
fn test_zero_bookings_all_percentages_zero() {
    let slots = bucket_bookings(&[]);
    for slot in TimeSlot::ALL {
        assert_eq!(slots.get(slot), SlotShare::default());
    }
}

#[test]
fn test_percentages_sum_to_hundred() {
    for morning in 0..8u64 {
        for afternoon in 0..8u64 {
            for evening in 0..8u64 {
                let counts = [morning, afternoon, evening];
                let total: u64 = counts.iter().sum();
                let shares = distribute_percentages(counts);
                let sum: u32 = shares.iter().sum();
                if total == 0 {
                    assert_eq!(sum, 0);
                    continue;
                }
                assert_eq!(sum, 100, "counts {counts:?}");
                for (count, share) in counts.iter().zip(shares) {
                    let exact = *count as f64 * 100.0 / total as f64;
                    assert!((share as f64 - exact).abs() < 1.0, "counts {counts:?}");
                }
            }
        }
    }
}

#[test]
fn test_thirds_round_consistently() {
    assert_eq!(distribute_percentages([1, 1, 1]), [34, 33, 33]);
    assert_eq!(distribute_percentages([2, 1, 0]), [67, 33, 0]);
}

// =========================================================
// 球场状态与收入
// =========================================================

#[test]
fn test_course_status_partition() {
    let courses = vec![
        course(None),
        course(Some("open")),
        course(Some("closed")),
        course(Some("maintenance")),
        course(Some("maintenance")),
        course(Some("???")),
    ];
    let counts = count_course_statuses(&courses);
    assert_eq!(
        counts,
        CourseStatusCounts {
            open: 3,
            closed: 1,
            maintenance: 2
        }
    );
}

#[test]
fn test_revenue_is_constant_per_booking_estimate() {
    let bookings: Vec<_> = (0..7).map(|i| booking(&i.to_string(), None, None)).collect();
    let stats = DashboardStats {
        active_subscriptions: 12,
        upcoming_competitions: 3,
        ..DashboardStats::default()
    };
    let m = compute_metrics(&[], &bookings, &[course(None)], &stats);
    assert_eq!(m.estimated_revenue, 35_000);
    assert_eq!(m.total_bookings, 7);
    assert_eq!(m.total_courses, 1);
    assert_eq!(m.active_subscriptions, 12);
    assert_eq!(m.upcoming_competitions, 3);
}
