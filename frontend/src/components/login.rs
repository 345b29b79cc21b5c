use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页
///
/// 验证成功后无需手动跳转：路由服务监听认证状态并离开登录页。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (token, set_token) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let is_verifying = move || auth.state.with(|s| s.is_verifying);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        spawn_local(async move {
            if let Err(e) = login(&auth, token.get_untracked()).await {
                set_error_msg.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Nevado Trek Admin"</h1>
                        <p class="text-base-content/70">
                            "Enter your access token to continue"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.with(Option::is_some)>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="token">
                                <span class="label-text">"Access Token"</span>
                            </label>
                            <input
                                id="token"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_token.set(event_target_value(&ev))
                                prop:value=token
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_verifying>
                                {move || if is_verifying() {
                                    view! { <span class="loading loading-spinner"></span> "Verifying..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
