//! 行程管理视图的状态机
//!
//! 纯状态转换，不做任何 I/O；异步调用由 `ToursController` 负责。
//! 内存中的列表不是权威数据，每次变更成功后都会整体重新加载。

use trek_admin_shared::{Tour, TourDraft, TourId};

use super::form_state::{TourField, TourForm};
use crate::error::{ApiResult, DELETE_TOUR_FAILED, LOAD_TOURS_FAILED, SAVE_TOUR_FAILED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit,
}

/// 视图当前所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error,
    DialogOpen(DialogMode),
    DeleteConfirm,
}

/// 打开中的表单对话框
#[derive(Debug, Clone, PartialEq)]
pub struct TourDialog {
    /// 编辑时为目标行程 ID
    pub editing: Option<TourId>,
    pub form: TourForm,
}

impl TourDialog {
    pub fn mode(&self) -> DialogMode {
        if self.editing.is_some() {
            DialogMode::Edit
        } else {
            DialogMode::Create
        }
    }
}

/// 提交对话框时要发出的调用
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(TourDraft),
    Update(TourId, TourDraft),
}

#[derive(Debug, Clone, Default)]
pub struct TourManager {
    tours: Vec<Tour>,
    loading: bool,
    error: Option<&'static str>,
    dialog: Option<TourDialog>,
    pending_delete: Option<Tour>,
}

impl TourManager {
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// 列表请求是否仍在进行，与对话框状态无关
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// 仅保存失败的消息，显示在表单对话框内
    pub fn submit_error(&self) -> Option<&'static str> {
        self.error.filter(|e| *e == SAVE_TOUR_FAILED)
    }

    /// 仅删除失败的消息，显示在确认对话框内
    pub fn delete_error(&self) -> Option<&'static str> {
        self.error.filter(|e| *e == DELETE_TOUR_FAILED)
    }

    fn clear_error(&mut self, message: &'static str) {
        if self.error == Some(message) {
            self.error = None;
        }
    }

    pub fn dialog(&self) -> Option<&TourDialog> {
        self.dialog.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&Tour> {
        self.pending_delete.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.pending_delete.is_some() {
            Phase::DeleteConfirm
        } else if let Some(dialog) = &self.dialog {
            Phase::DialogOpen(dialog.mode())
        } else if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Idle
        }
    }

    // --- 加载 ---

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// 列表与错误消息只会保留其一
    pub fn finish_load(&mut self, result: ApiResult<Vec<Tour>>) {
        self.loading = false;
        match result {
            Ok(tours) => {
                self.tours = tours;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load tours");
                self.tours.clear();
                self.error = Some(LOAD_TOURS_FAILED);
            }
        }
    }

    // --- 创建 / 编辑 ---

    pub fn open_create(&mut self) {
        self.clear_error(SAVE_TOUR_FAILED);
        self.dialog = Some(TourDialog {
            editing: None,
            form: TourForm::blank(),
        });
    }

    pub fn open_edit(&mut self, tour: &Tour) {
        self.clear_error(SAVE_TOUR_FAILED);
        self.dialog = Some(TourDialog {
            editing: Some(tour.id),
            form: TourForm::from_tour(tour),
        });
    }

    /// 更新表单中的一个字段；对话框未打开时忽略
    pub fn edit_form(&mut self, field: TourField, value: String) {
        if let Some(dialog) = &mut self.dialog {
            dialog.form.set(field, value);
        }
    }

    pub fn edit_form_with(&mut self, f: impl FnOnce(&mut TourForm)) {
        if let Some(dialog) = &mut self.dialog {
            f(&mut dialog.form);
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn submission(&self) -> Option<Submission> {
        let dialog = self.dialog.as_ref()?;
        let draft = dialog.form.to_draft();
        Some(match dialog.editing {
            Some(id) => Submission::Update(id, draft),
            None => Submission::Create(draft),
        })
    }

    /// 返回是否需要重新加载列表
    pub fn finish_submit(&mut self, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.dialog = None;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save tour");
                self.error = Some(SAVE_TOUR_FAILED);
                false
            }
        }
    }

    // --- 删除（需二次确认） ---

    pub fn request_delete(&mut self, tour: &Tour) {
        self.clear_error(DELETE_TOUR_FAILED);
        self.pending_delete = Some(tour.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&self) -> Option<TourId> {
        self.pending_delete.as_ref().map(|tour| tour.id)
    }

    /// 返回是否需要重新加载列表
    pub fn finish_delete(&mut self, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.pending_delete = None;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to delete tour");
                self.error = Some(DELETE_TOUR_FAILED);
                false
            }
        }
    }
}
