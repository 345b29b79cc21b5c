//! 行程管理页

use leptos::prelude::*;
use leptos::task::spawn_local;
use trek_admin_shared::{Tour, TourStatus};

use crate::api::TrekApi;
use crate::auth::use_auth;
use crate::components::delete_dialog::DeleteDialog;
use crate::components::icons::{ArrowLeft, Pencil, Plus, Trash2};
use crate::components::tour_dialog::TourDialog;
use crate::tours::controller::ToursController;
use crate::tours::display;
use crate::tours::state::TourManager;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn ToursPage() -> impl IntoView {
    // 路由守卫保证此处已认证
    match use_auth().api() {
        Some(api) => view! { <ToursView api=api /> }.into_any(),
        None => view! { <></> }.into_any(),
    }
}

#[component]
fn ToursView(api: TrekApi) -> impl IntoView {
    let manager = RwSignal::new(TourManager::default());
    let controller = StoredValue::new(ToursController::new(manager, api));

    // 每个异步操作持有控制器的一份克隆
    let load = move || {
        let c = controller.get_value();
        spawn_local(async move { c.load().await });
    };
    let on_submit = move |_: ()| {
        let c = controller.get_value();
        spawn_local(async move { c.submit().await });
    };
    let on_confirm_delete = move |_: ()| {
        let c = controller.get_value();
        spawn_local(async move { c.confirm_delete().await });
    };

    load();

    let tours = move || manager.with(|m| m.tours().to_vec());
    let is_loading = move || manager.with(TourManager::is_loading);
    let error = move || manager.with(TourManager::error);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Link route=AppRoute::Dashboard class="btn btn-ghost btn-square">
                            <ArrowLeft attr:class="h-5 w-5" />
                        </Link>
                        <span class="text-xl font-bold px-2">"Tours Management"</span>
                    </div>
                    <div class="flex-none">
                        <button
                            class="btn btn-primary gap-2"
                            on:click=move |_| manager.update(TourManager::open_create)
                        >
                            <Plus attr:class="h-4 w-4" /> "Add New Tour"
                        </button>
                    </div>
                </div>

                <Show when=move || error().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <Show
                            when=move || !is_loading()
                            fallback=|| view! {
                                <div class="flex justify-center p-12">
                                    <span class="loading loading-spinner loading-lg text-primary"></span>
                                </div>
                            }
                        >
                            <div class="overflow-x-auto">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Difficulty"</th>
                                            <th>"Distance"</th>
                                            <th>"Duration"</th>
                                            <th>"Price"</th>
                                            <th>"Status"</th>
                                            <th class="text-right">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=tours
                                            key=|tour| tour.id
                                            children=move |tour| view! { <TourRow tour=tour manager=manager /> }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>

            <TourDialog manager=manager on_submit=on_submit />
            <DeleteDialog manager=manager on_confirm=on_confirm_delete />
        </div>
    }
}

#[component]
fn TourRow(tour: Tour, manager: RwSignal<TourManager>) -> impl IntoView {
    let details = &tour.details;
    let badge = match details.status {
        TourStatus::Active => "badge badge-success",
        TourStatus::Inactive => "badge badge-ghost",
    };

    let cells = view! {
        <td>
            <div class="font-bold">{details.name.clone()}</div>
            <div class="text-sm opacity-60">{display::excerpt(&details.description)}</div>
        </td>
        <td>{display::difficulty_label(details.difficulty)}</td>
        <td>{display::distance_label(details.distance)}</td>
        <td>{display::duration_label(&details.duration)}</td>
        <td>{display::price_label(&details.prices)}</td>
        <td><span class=badge>{details.status.as_str()}</span></td>
    };

    let edit_target = tour.clone();
    let delete_target = tour;

    view! {
        <tr>
            {cells}
            <td class="text-right space-x-2">
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    on:click=move |_| manager.update(|m| m.open_edit(&edit_target))
                >
                    <Pencil attr:class="h-4 w-4" />
                </button>
                <button
                    class="btn btn-ghost btn-sm btn-square text-error"
                    on:click=move |_| manager.update(|m| m.request_delete(&delete_target))
                >
                    <Trash2 attr:class="h-4 w-4" />
                </button>
            </td>
        </tr>
    }
}
