//! Topbar: signed-in identity and sign-out.

use hrshell_core::SessionBar;
use leptos::*;

use crate::frontend::app::ShellContext;
use crate::frontend::router::BrowserRouter;
use crate::frontend::sidebar::Icon;
use crate::icons::ShellIcon;

#[component]
pub fn Topbar() -> impl IntoView {
    let ShellContext { config, store, .. } = expect_context::<ShellContext>();
    let router = BrowserRouter::new();
    let bar = create_rw_signal(SessionBar::new(&config));

    // Hydrate once, after the first (placeholder) render.
    let hydrate_store = store.clone();
    create_effect(move |_| {
        bar.update(|bar| {
            bar.hydrate(&*hydrate_store);
        });
    });

    let sign_out = move |_| {
        bar.with_untracked(|bar| bar.sign_out(&*store, &router));
    };

    view! {
        <header class="flex h-16 items-center justify-between border-b bg-white px-6">
            <div class="flex items-center gap-4">
                <h2 class="text-xl font-semibold text-foreground">
                    {move || bar.with(SessionBar::greeting)}
                </h2>
            </div>
            <div class="flex items-center gap-4">
                <div class="flex items-center gap-2">
                    <div class="flex h-8 w-8 items-center justify-center rounded-full bg-primary text-primary-foreground">
                        <Icon icon=ShellIcon::User class="h-4 w-4"/>
                    </div>
                    <div class="text-sm">
                        <p class="font-medium">{move || bar.with(|bar| bar.display_name().to_string())}</p>
                        <p class="text-muted-foreground">
                            {move || bar.with(|bar| bar.role().map(str::to_string))}
                        </p>
                    </div>
                </div>
                <button
                    type="button"
                    class="inline-flex h-10 w-10 items-center justify-center rounded-md hover:bg-accent hover:text-accent-foreground"
                    title=config.sign_out_label.clone()
                    aria-label=config.sign_out_label.clone()
                    on:click=sign_out
                >
                    <Icon icon=ShellIcon::LogOut class="h-5 w-5"/>
                </button>
            </div>
        </header>
    }
}
