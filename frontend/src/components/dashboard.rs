use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Mountain};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

const WELCOME_MESSAGE: &str = "¡Bienvenido al panel de administración de Nevado Trek!";
const LOGOUT_LABEL: &str = "Cerrar Sesión";
const TOURS_LINK_LABEL: &str = "Gestionar Tours";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    // 登出后的跳转由路由服务处理
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Mountain attr:class="text-primary h-6 w-6" />
                        <span class="text-xl font-bold px-2">"Dashboard"</span>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> {LOGOUT_LABEL}
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <p class="text-lg">{WELCOME_MESSAGE}</p>
                        <div class="card-actions mt-4">
                            <Link route=AppRoute::Tours class="btn btn-primary">
                                {TOURS_LINK_LABEL}
                            </Link>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
