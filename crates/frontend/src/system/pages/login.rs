use crate::core::page::Page;
use crate::shared::browser;
use leptos::prelude::*;

/// Static login page. There is no backend: submitting the form simply
/// returns to the catalog.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("👤 Entrando como: {}", username.get());
        browser::navigate_to(Page::Catalog.href());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Portal Galáctico"</h1>
                <h2>"Inicia sesión"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input type="password" id="password" required />
                    </div>
                    <button type="submit">"Entrar"</button>
                </form>
            </div>
        </div>
    }
}
