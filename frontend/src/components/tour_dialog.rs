//! 创建 / 编辑行程对话框
//!
//! 对话框是否打开完全由 `TourManager` 决定，组件只负责同步原生 `<dialog>`。

mod fields;

use leptos::prelude::*;

use self::fields::{FormField, StatusSelect, TextAreaField};
use crate::tours::form_state::TourField;
use crate::tours::state::{DialogMode, TourManager};

#[component]
pub fn TourDialog(
    manager: RwSignal<TourManager>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let mode = move || manager.with(|m| m.dialog().map(|d| d.mode()));

    Effect::new(move |_| {
        let open = mode().is_some();
        if let Some(dialog) = dialog_ref.get() {
            if open && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !open && dialog.open() {
                dialog.close();
            }
        }
    });

    let close = move || manager.update(TourManager::close_dialog);

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let is_edit = move || mode() == Some(DialogMode::Edit);

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| close()>
            <div class="modal-box w-11/12 max-w-3xl">
                <h3 class="font-bold text-lg">
                    {move || if is_edit() { "Edit Tour" } else { "Create New Tour" }}
                </h3>

                <form on:submit=submit class="space-y-4 mt-4">
                    {move || manager.with(TourManager::submit_error).map(|msg| view! {
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{msg}</span>
                        </div>
                    })}

                    <FormField manager=manager field=TourField::Name label="Name" required=true />
                    <TextAreaField manager=manager field=TourField::Description label="Description" />

                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                        <FormField manager=manager field=TourField::Altitude label="Altitude (m)" input_type="number" />
                        <FormField manager=manager field=TourField::Difficulty label="Difficulty (1-5)" input_type="number" />
                        <FormField manager=manager field=TourField::Distance label="Distance (km)" input_type="number" />
                        <FormField manager=manager field=TourField::Temperature label="Temperature" />
                        <FormField manager=manager field=TourField::Days label="Days" input_type="number" />
                        <FormField manager=manager field=TourField::Hours label="Hours" input_type="number" />
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <FormField manager=manager field=TourField::PriceOne label="Price (1 person)" input_type="number" />
                        <FormField manager=manager field=TourField::PriceCouple label="Price (couple)" input_type="number" />
                        <FormField manager=manager field=TourField::PriceThreeToFive label="Price (3-5)" input_type="number" />
                        <FormField manager=manager field=TourField::PriceSixPlus label="Price (6+)" input_type="number" />
                    </div>

                    <TextAreaField manager=manager field=TourField::Images label="Images" hint="Comma-separated URLs" />
                    <TextAreaField manager=manager field=TourField::Includes label="Includes" hint="Comma-separated" />
                    <TextAreaField manager=manager field=TourField::Recommendations label="Recommendations" hint="Comma-separated" />
                    <StatusSelect manager=manager />

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" class="btn btn-primary">
                            {move || if is_edit() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
