use desktop_shell::{DesktopShell, ShellProvider};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="My Desk" />
        <Meta
            name="description"
            content="A retro desktop-style personal portfolio shell."
        />

        <main class="site-root">
            <ShellProvider>
                <DesktopShell />
            </ShellProvider>
        </main>
    }
}
