//! 各页面的资源实现
//!
//! 一个零大小标记类型对应一个页面。页面不支持的动作没有对应的 trait 实现，
//! 调用它会在编译期报错。

use crate::error::AdminResult;
use crate::gateway::ApiGateway;
use crate::request::HttpClient;
use crate::screen::{CreateResource, DeleteResource, ListResource, UpdateResource};
use teebook_shared::i18n::EntityKind;
use teebook_shared::protocol::TeeTimeQuery;
use teebook_shared::snapshot::{BookingsSnapshot, DashboardSnapshot, TeeTimesSnapshot};
use teebook_shared::{
    Competition, CompetitionDraft, Course, CourseDraft, TeeTimeDraft, User, UserUpdate,
};

pub struct Dashboard;
pub struct Users;
pub struct Courses;
pub struct TeeTimes;
pub struct Bookings;
pub struct Competitions;

// =========================================================
// 仪表盘 (Dashboard)
// =========================================================

#[async_trait::async_trait(?Send)]
impl ListResource for Dashboard {
    const ENTITY: EntityKind = EntityKind::Dashboard;
    type Snapshot = DashboardSnapshot;

    async fn load<C: HttpClient>(api: &ApiGateway<C>) -> AdminResult<DashboardSnapshot> {
        let (stats, users, bookings, courses) = futures::join!(
            api.dashboard_stats(),
            api.list_users(),
            api.list_bookings(),
            api.list_courses(),
        );
        Ok(DashboardSnapshot {
            stats: stats?,
            users: users?,
            bookings: bookings?,
            courses: courses?,
        })
    }
}

// =========================================================
// 用户 (Users)：只读列表 + 编辑
// =========================================================

#[async_trait::async_trait(?Send)]
impl ListResource for Users {
    const ENTITY: EntityKind = EntityKind::User;
    type Snapshot = Vec<User>;

    async fn load<C: HttpClient>(api: &ApiGateway<C>) -> AdminResult<Vec<User>> {
        api.list_users().await
    }
}

#[async_trait::async_trait(?Send)]
impl UpdateResource for Users {
    type Patch = UserUpdate;

    async fn update<C: HttpClient>(api: &ApiGateway<C>, id: &str, patch: &UserUpdate) -> AdminResult<()> {
        api.update_user(id, patch).await.map(drop)
    }
}

// =========================================================
// 球场 (Courses)
// =========================================================

#[async_trait::async_trait(?Send)]
impl ListResource for Courses {
    const ENTITY: EntityKind = EntityKind::Course;
    type Snapshot = Vec<Course>;

    async fn load<C: HttpClient>(api: &ApiGateway<C>) -> AdminResult<Vec<Course>> {
        api.list_courses().await
    }
}

#[async_trait::async_trait(?Send)]
impl CreateResource for Courses {
    type Draft = CourseDraft;

    async fn create<C: HttpClient>(api: &ApiGateway<C>, draft: &CourseDraft) -> AdminResult<()> {
        api.create_course(draft).await.map(drop)
    }
}

#[async_trait::async_trait(?Send)]
impl UpdateResource for Courses {
    type Patch = CourseDraft;

    async fn update<C: HttpClient>(api: &ApiGateway<C>, id: &str, patch: &CourseDraft) -> AdminResult<()> {
        api.update_course(id, patch).await.map(drop)
    }
}

#[async_trait::async_trait(?Send)]
impl DeleteResource for Courses {
    async fn delete<C: HttpClient>(api: &ApiGateway<C>, id: &str) -> AdminResult<()> {
        api.delete_course(id).await.map(drop)
    }
}

// =========================================================
// 开球时间 (Tee Times)：界面只提供新建与删除
// =========================================================

#[async_trait::async_trait(?Send)]
impl ListResource for TeeTimes {
    const ENTITY: EntityKind = EntityKind::TeeTime;
    type Snapshot = TeeTimesSnapshot;

    async fn load<C: HttpClient>(api: &ApiGateway<C>) -> AdminResult<TeeTimesSnapshot> {
        let (tee_times, courses) = futures::join!(
            api.list_tee_times(TeeTimeQuery::default()),
            api.list_courses(),
        );
        Ok(TeeTimesSnapshot {
            tee_times: tee_times?,
            courses: courses?,
        })
    }
}

#[async_trait::async_trait(?Send)]
impl CreateResource for TeeTimes {
    type Draft = TeeTimeDraft;

    async fn create<C: HttpClient>(api: &ApiGateway<C>, draft: &TeeTimeDraft) -> AdminResult<()> {
        api.create_tee_time(draft).await.map(drop)
    }
}

#[async_trait::async_trait(?Send)]
impl DeleteResource for TeeTimes {
    async fn delete<C: HttpClient>(api: &ApiGateway<C>, id: &str) -> AdminResult<()> {
        api.delete_tee_time(id).await.map(drop)
    }
}

// =========================================================
// 预订 (Bookings)：只读
// =========================================================

#[async_trait::async_trait(?Send)]
impl ListResource for Bookings {
    const ENTITY: EntityKind = EntityKind::Booking;
    type Snapshot = BookingsSnapshot;

    async fn load<C: HttpClient>(api: &ApiGateway<C>) -> AdminResult<BookingsSnapshot> {
        let (bookings, users, tee_times, courses) = futures::join!(
            api.list_bookings(),
            api.list_users(),
            api.list_tee_times(TeeTimeQuery::default()),
            api.list_courses(),
        );
        Ok(BookingsSnapshot {
            bookings: bookings?,
            users: users?,
            tee_times: tee_times?,
            courses: courses?,
        })
    }
}

// =========================================================
// 比赛 (Competitions)
// =========================================================

#[async_trait::async_trait(?Send)]
impl ListResource for Competitions {
    const ENTITY: EntityKind = EntityKind::Competition;
    type Snapshot = Vec<Competition>;

    async fn load<C: HttpClient>(api: &ApiGateway<C>) -> AdminResult<Vec<Competition>> {
        api.list_competitions().await
    }
}

#[async_trait::async_trait(?Send)]
impl CreateResource for Competitions {
    type Draft = CompetitionDraft;

    async fn create<C: HttpClient>(api: &ApiGateway<C>, draft: &CompetitionDraft) -> AdminResult<()> {
        api.create_competition(draft).await.map(drop)
    }
}

#[async_trait::async_trait(?Send)]
impl UpdateResource for Competitions {
    type Patch = CompetitionDraft;

    async fn update<C: HttpClient>(
        api: &ApiGateway<C>,
        id: &str,
        patch: &CompetitionDraft,
    ) -> AdminResult<()> {
        api.update_competition(id, patch).await.map(drop)
    }
}

#[async_trait::async_trait(?Send)]
impl DeleteResource for Competitions {
    async fn delete<C: HttpClient>(api: &ApiGateway<C>, id: &str) -> AdminResult<()> {
        api.delete_competition(id).await.map(drop)
    }
}
