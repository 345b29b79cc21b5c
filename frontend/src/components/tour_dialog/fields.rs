//! 表单输入组件
//!
//! 每个输入框直接读写 `TourManager` 中打开的表单，按 `TourField` 寻址。

use leptos::prelude::*;
use trek_admin_shared::TourStatus;

use crate::tours::form_state::TourField;
use crate::tours::state::TourManager;

fn field_value(manager: RwSignal<TourManager>, field: TourField) -> String {
    manager.with(|m| {
        m.dialog()
            .map(|d| d.form.get(field).to_string())
            .unwrap_or_default()
    })
}

/// 单行输入框；`input_type` 默认为 text
#[component]
pub fn FormField(
    manager: RwSignal<TourManager>,
    field: TourField,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let bounds = field.input_bounds();

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type.unwrap_or("text")
                required=required
                min=bounds.map(|(min, _)| min.to_string())
                max=bounds.map(|(_, max)| max.to_string())
                on:input=move |ev| manager.update(|m| m.edit_form(field, event_target_value(&ev)))
                prop:value=move || field_value(manager, field)
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    manager: RwSignal<TourManager>,
    field: TourField,
    label: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <textarea
                rows="3"
                on:input=move |ev| manager.update(|m| m.edit_form(field, event_target_value(&ev)))
                prop:value=move || field_value(manager, field)
                class="textarea textarea-bordered w-full"
            ></textarea>
            {hint.map(|hint| view! {
                <label class="label">
                    <span class="label-text-alt text-base-content/50">{hint}</span>
                </label>
            })}
        </div>
    }
}

#[component]
pub fn StatusSelect(manager: RwSignal<TourManager>) -> impl IntoView {
    let current = move || {
        manager.with(|m| m.dialog().map(|d| d.form.status).unwrap_or_default())
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">"Status"</span>
            </label>
            <select
                class="select select-bordered w-full"
                on:change=move |ev| {
                    let status = TourStatus::from_form_value(&event_target_value(&ev));
                    manager.update(|m| m.edit_form_with(|form| form.status = status));
                }
            >
                <option value="active" selected=move || current() == TourStatus::Active>"Active"</option>
                <option value="inactive" selected=move || current() == TourStatus::Inactive>"Inactive"</option>
            </select>
        </div>
    }
}
