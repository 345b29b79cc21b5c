//! 行程管理的异步操作
//!
//! 每个变更操作（创建、更新、删除）成功后都会重新加载完整列表，
//! 这是接口约定的一部分而不是调用方的责任。
//! 没有取消机制：并发的加载以最后返回的结果为准。

use leptos::prelude::*;

use super::state::{Submission, TourManager};
use crate::api::TrekApi;
use crate::web::{FetchClient, HttpClient};

/// 持有 `TourManager` 的容器
pub trait TourStore {
    /// 修改状态并返回闭包结果；容器已释放时返回 None
    fn modify<R>(&self, f: impl FnOnce(&mut TourManager) -> R) -> Option<R>;
}

impl TourStore for RwSignal<TourManager> {
    fn modify<R>(&self, f: impl FnOnce(&mut TourManager) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Clone)]
pub struct ToursController<S, C = FetchClient> {
    store: S,
    api: TrekApi<C>,
}

impl<S: TourStore, C: HttpClient> ToursController<S, C> {
    pub fn new(store: S, api: TrekApi<C>) -> Self {
        Self { store, api }
    }

    /// 加载全部行程
    pub async fn load(&self) {
        self.store.modify(TourManager::begin_load);
        let result = self.api.get_all_tours().await;
        self.store.modify(|m| m.finish_load(result));
    }

    /// 提交对话框：创建或更新，成功后关闭对话框并重新加载
    pub async fn submit(&self) {
        let Some(submission) = self.store.modify(|m| m.submission()).flatten() else {
            return;
        };

        let result = match &submission {
            Submission::Create(draft) => self.api.create_tour(draft).await,
            Submission::Update(id, draft) => self.api.update_tour(*id, draft).await,
        }
        .map(drop);

        if self.store.modify(|m| m.finish_submit(result)) == Some(true) {
            self.load().await;
        }
    }

    /// 确认删除后才真正调用后端
    pub async fn confirm_delete(&self) {
        let Some(id) = self.store.modify(|m| m.confirm_delete()).flatten() else {
            return;
        };

        let result = self.api.delete_tour(id).await.map(drop);

        if self.store.modify(|m| m.finish_delete(result)) == Some(true) {
            self.load().await;
        }
    }
}

#[cfg(test)]
mod tests;
