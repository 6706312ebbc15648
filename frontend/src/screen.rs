//! 页面控制器的信号绑定
//!
//! 核心库的 [`ScreenController`] 只认 [`StateCell`]，这里把它接到 `RwSignal` 上，
//! 并负责在事件处理函数里派发异步任务。

use crate::auth::{AuthContext, use_auth};
use crate::web;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::marker::PhantomData;
use teebook_admin::screen::{CreateResource, DeleteResource, ListResource, UpdateResource};
use teebook_admin::{Notice, ScreenController, ScreenPhase, ScreenState, StateCell};
use teebook_shared::ValidationError;

/// 页面卸载后信号失效，`try_update` 返回 `None`，控制器随之停止
pub struct SignalCell<S: Send + Sync + 'static>(RwSignal<ScreenState<S>>);

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn update_state<T>(&self, f: impl FnOnce(&mut ScreenState<S>) -> T) -> Option<T> {
        self.0.try_update(f)
    }
}

/// 一个页面的状态句柄
pub struct Screen<R: ListResource>
where
    R::Snapshot: Send + Sync + 'static,
{
    state: RwSignal<ScreenState<R::Snapshot>>,
    /// 事件处理函数里没有 Owner，挂载时先取出
    auth: AuthContext,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> Clone for Screen<R>
where
    R::Snapshot: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for Screen<R> where R::Snapshot: Send + Sync + 'static {}

impl<R> Screen<R>
where
    R: ListResource + 'static,
    R::Snapshot: Clone + Send + Sync + 'static,
{
    /// 创建状态并立即开始首次加载
    pub fn mount() -> Self {
        let screen = Self {
            state: RwSignal::new(ScreenState::new(R::ENTITY)),
            auth: use_auth(),
            _resource: PhantomData,
        };
        screen.reload();
        screen
    }

    pub fn snapshot(&self) -> R::Snapshot {
        self.state.with(|s| s.snapshot().clone())
    }

    /// 只读取快照的一部分，避免整体克隆
    pub fn with_snapshot<T>(&self, f: impl FnOnce(&R::Snapshot) -> T) -> T {
        self.state.with(|s| f(s.snapshot()))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.phase() == ScreenPhase::Loading)
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.is_busy())
    }

    pub fn notice(&self) -> Signal<Option<Notice>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.notice().cloned()))
    }

    pub fn dismiss(&self) -> Callback<u64> {
        let state = self.state;
        Callback::new(move |seq| {
            state.try_update(|s| s.dismiss_notice(seq));
        })
    }

    pub fn reload(&self) {
        let cell = SignalCell(self.state);
        let api = self.auth.gateway();
        spawn_local(async move {
            ScreenController::<R, _, _>::new(&api, cell).load().await;
        });
    }

    pub fn create(&self, draft: Result<R::Draft, ValidationError>)
    where
        R: CreateResource,
        R::Draft: 'static,
    {
        let cell = SignalCell(self.state);
        let api = self.auth.gateway();
        spawn_local(async move {
            ScreenController::<R, _, _>::new(&api, cell).create(draft).await;
        });
    }

    pub fn update(&self, id: String, patch: Result<R::Patch, ValidationError>)
    where
        R: UpdateResource,
        R::Patch: 'static,
    {
        let cell = SignalCell(self.state);
        let api = self.auth.gateway();
        spawn_local(async move {
            ScreenController::<R, _, _>::new(&api, cell).update(&id, patch).await;
        });
    }

    /// 先弹原生确认框，取消时什么都不做
    pub fn delete(&self, id: String, prompt: &'static str)
    where
        R: DeleteResource,
    {
        let cell = SignalCell(self.state);
        let api = self.auth.gateway();
        spawn_local(async move {
            ScreenController::<R, _, _>::new(&api, cell)
                .delete(&id, || web::confirm(prompt))
                .await;
        });
    }
}

