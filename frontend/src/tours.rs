//! 行程管理
//!
//! 状态机 (`state`)、表单 (`form_state`)、异步驱动 (`controller`) 与
//! 表格展示格式 (`display`) 分开，组件层只做绑定。

pub mod controller;
pub mod display;
pub mod form_state;
pub mod state;
