use leptos::prelude::*;

/// Static profile page. It exists mainly as a navigation target: filters
/// requested from here go through the cross-page handoff.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <section class="profile">
            <h2>"Mi perfil cósmico"</h2>
            <div class="profile-card">
                <p class="profile-name">"Viajero interestelar"</p>
                <p class="profile-status">"Miembro del portal galáctico"</p>
            </div>
        </section>
    }
}
