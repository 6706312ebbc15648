//! CRUD 页面控制器
//!
//! 每个页面一个状态机：`Loading -> Loaded <-> Submitting`，外加一个瞬时通知。
//! 状态转换是同步的纯方法（[`ScreenState`]），异步编排在 [`ScreenController`] 中，
//! 通过 [`StateCell`] 写回状态，浏览器端用信号实现，测试里用 `RefCell`。

use crate::error::AdminResult;
use crate::gateway::ApiGateway;
use crate::request::HttpClient;
use std::cell::RefCell;
use std::marker::PhantomData;
use teebook_shared::ValidationError;
use teebook_shared::i18n::{EntityKind, Language, NoticeKind, notice_text};
use tracing::{info, warn};

// =========================================================
// 资源特性 (Resource Traits)
// =========================================================

/// 页面的列表加载；多个列表时并发拉取并整体成功或整体失败
#[async_trait::async_trait(?Send)]
pub trait ListResource {
    const ENTITY: EntityKind;
    type Snapshot: Default;

    async fn load<C: HttpClient>(api: &ApiGateway<C>) -> AdminResult<Self::Snapshot>;
}

#[async_trait::async_trait(?Send)]
pub trait CreateResource: ListResource {
    type Draft;

    async fn create<C: HttpClient>(api: &ApiGateway<C>, draft: &Self::Draft) -> AdminResult<()>;
}

#[async_trait::async_trait(?Send)]
pub trait UpdateResource: ListResource {
    type Patch;

    async fn update<C: HttpClient>(
        api: &ApiGateway<C>,
        id: &str,
        patch: &Self::Patch,
    ) -> AdminResult<()>;
}

#[async_trait::async_trait(?Send)]
pub trait DeleteResource: ListResource {
    async fn delete<C: HttpClient>(api: &ApiGateway<C>, id: &str) -> AdminResult<()>;
}

// =========================================================
// 页面状态 (Screen State)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Loading,
    Loaded,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// 瞬时通知；`seq` 单调递增，用于判断自动关闭时是否已被新通知替换
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub entity: EntityKind,
    pub detail: Option<String>,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    pub fn text(&self, lang: Language) -> String {
        notice_text(lang, self.entity, self.kind, self.detail.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct ScreenState<S> {
    entity: EntityKind,
    phase: ScreenPhase,
    snapshot: S,
    notice: Option<Notice>,
    next_seq: u64,
}

impl<S: Default> ScreenState<S> {
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            phase: ScreenPhase::Loading,
            snapshot: S::default(),
            notice: None,
            next_seq: 0,
        }
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.phase != ScreenPhase::Loaded
    }

    fn notify(&mut self, kind: NoticeKind, detail: Option<String>) {
        self.next_seq += 1;
        self.notice = Some(Notice {
            seq: self.next_seq,
            kind,
            entity: self.entity,
            detail,
        });
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// 只有仍是同一条通知时才清除
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    pub fn begin_load(&mut self) {
        self.phase = ScreenPhase::Loading;
    }

    /// 失败时清空快照并给出一条通知，不自动重试
    pub fn finish_load(&mut self, result: AdminResult<S>) {
        match result {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(err) => {
                warn!(entity = ?self.entity, error = %err, "screen load failed");
                self.snapshot = S::default();
                self.notify(NoticeKind::LoadFailed, Some(err.user_message()));
            }
        }
        self.phase = ScreenPhase::Loaded;
    }

    /// 校验失败时给出通知并返回 `None`，调用方不得发请求
    pub fn begin_submit<D>(&mut self, draft: Result<D, ValidationError>) -> Option<D> {
        match draft {
            Ok(draft) => {
                self.phase = ScreenPhase::Submitting;
                Some(draft)
            }
            Err(err) => {
                self.notify(NoticeKind::Invalid, Some(err.to_string()));
                None
            }
        }
    }

    /// 返回 `true` 表示需要重新加载
    pub fn finish_submit(&mut self, mode: SubmitMode, result: AdminResult<()>) -> bool {
        let (ok, failed) = match mode {
            SubmitMode::Create => (NoticeKind::Created, NoticeKind::CreateFailed),
            SubmitMode::Update => (NoticeKind::Updated, NoticeKind::UpdateFailed),
        };
        self.settle(result, ok, failed)
    }

    pub fn begin_delete(&mut self) {
        self.phase = ScreenPhase::Submitting;
    }

    /// 失败时保留原快照
    pub fn finish_delete(&mut self, result: AdminResult<()>) -> bool {
        self.settle(result, NoticeKind::Deleted, NoticeKind::DeleteFailed)
    }

    fn settle(&mut self, result: AdminResult<()>, ok: NoticeKind, failed: NoticeKind) -> bool {
        match result {
            Ok(()) => {
                info!(entity = ?self.entity, outcome = ?ok, "screen mutation succeeded");
                self.notify(ok, None);
                true
            }
            Err(err) => {
                warn!(entity = ?self.entity, outcome = ?failed, error = %err, "screen mutation failed");
                self.notify(failed, Some(err.user_message()));
                self.phase = ScreenPhase::Loaded;
                false
            }
        }
    }
}

// =========================================================
// 状态容器 (State Cell)
// =========================================================

/// 持有 [`ScreenState`] 的可变容器
///
/// 返回 `None` 表示容器已失效（例如页面已卸载），控制器随即停止。
pub trait StateCell<S> {
    fn update_state<T>(&self, f: impl FnOnce(&mut ScreenState<S>) -> T) -> Option<T>;
}

impl<S> StateCell<S> for RefCell<ScreenState<S>> {
    fn update_state<T>(&self, f: impl FnOnce(&mut ScreenState<S>) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<S, Cell: StateCell<S> + ?Sized> StateCell<S> for &Cell {
    fn update_state<T>(&self, f: impl FnOnce(&mut ScreenState<S>) -> T) -> Option<T> {
        (**self).update_state(f)
    }
}

// =========================================================
// 控制器 (Controller)
// =========================================================

pub struct ScreenController<'a, R, C, Cell> {
    api: &'a ApiGateway<C>,
    cell: Cell,
    _resource: PhantomData<R>,
}

impl<'a, R, C, Cell> ScreenController<'a, R, C, Cell>
where
    R: ListResource,
    C: HttpClient,
    Cell: StateCell<R::Snapshot>,
{
    pub fn new(api: &'a ApiGateway<C>, cell: Cell) -> Self {
        Self {
            api,
            cell,
            _resource: PhantomData,
        }
    }

    pub async fn load(&self) {
        if self.cell.update_state(|s| s.begin_load()).is_none() {
            return;
        }
        let result = R::load(self.api).await;
        self.cell.update_state(|s| s.finish_load(result));
    }

    pub async fn create(&self, draft: Result<R::Draft, ValidationError>)
    where
        R: CreateResource,
    {
        let Some(Some(draft)) = self.cell.update_state(|s| s.begin_submit(draft)) else {
            return;
        };
        let result = R::create(self.api, &draft).await;
        if self.cell.update_state(|s| s.finish_submit(SubmitMode::Create, result)) == Some(true) {
            self.load().await;
        }
    }

    pub async fn update(&self, id: &str, patch: Result<R::Patch, ValidationError>)
    where
        R: UpdateResource,
    {
        let Some(Some(patch)) = self.cell.update_state(|s| s.begin_submit(patch)) else {
            return;
        };
        let result = R::update(self.api, id, &patch).await;
        if self.cell.update_state(|s| s.finish_submit(SubmitMode::Update, result)) == Some(true) {
            self.load().await;
        }
    }

    /// `confirm` 返回 `false` 时不发请求、不改状态
    pub async fn delete(&self, id: &str, confirm: impl FnOnce() -> bool)
    where
        R: DeleteResource,
    {
        if !confirm() {
            return;
        }
        if self.cell.update_state(|s| s.begin_delete()).is_none() {
            return;
        }
        let result = R::delete(self.api, id).await;
        if self.cell.update_state(|s| s.finish_delete(result)) == Some(true) {
            self.load().await;
        }
    }
}
