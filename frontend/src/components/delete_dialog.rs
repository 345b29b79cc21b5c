use leptos::prelude::*;

use crate::tours::state::TourManager;

/// 删除确认对话框；只有确认后才会调用后端
#[component]
pub fn DeleteDialog(
    manager: RwSignal<TourManager>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let pending_name = move || {
        manager.with(|m| m.pending_delete().map(|t| t.details.name.clone()))
    };

    Effect::new(move |_| {
        let open = pending_name().is_some();
        if let Some(dialog) = dialog_ref.get() {
            if open && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !open && dialog.open() {
                dialog.close();
            }
        }
    });

    let cancel = move || manager.update(TourManager::cancel_delete);

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| cancel()>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Confirm Delete"</h3>
                <p class="py-4">
                    {move || format!(
                        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                        pending_name().unwrap_or_default()
                    )}
                </p>
                {move || manager.with(TourManager::delete_error).map(|msg| view! {
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{msg}</span>
                    </div>
                })}
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| cancel()>"Cancel"</button>
                    <button type="button" class="btn btn-error" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </dialog>
    }
}
