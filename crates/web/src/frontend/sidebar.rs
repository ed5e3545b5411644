//! Sidebar navigation component.

use leptos::*;
use leptos_router::A;

use crate::frontend::app::ShellContext;
use crate::frontend::router::BrowserRouter;
use crate::icons::{svg_body, ShellIcon, SVG_ATTRS};

/// Inline lucide glyph.
#[component]
pub fn Icon(icon: ShellIcon, #[prop(into)] class: String) -> impl IntoView {
    let mut svg = view! { <svg class=class aria-hidden="true" inner_html=svg_body(icon)></svg> };
    for (name, value) in SVG_ATTRS {
        svg = svg.attr(name, value);
    }
    svg
}

/// Brand header plus one link per navigation entry, highlighted by the
/// current pathname.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ShellContext { config, panel, .. } = expect_context::<ShellContext>();
    let pathname = BrowserRouter::new().pathname();

    view! {
        <div class="flex w-64 flex-col border-r bg-white">
            <div class="flex h-16 items-center border-b px-6">
                <h1 class="text-xl font-bold text-primary">{config.brand_title.clone()}</h1>
            </div>
            <nav class="flex-1 space-y-1 p-4" aria-label="Primary">
                {move || {
                    let current = pathname.get();
                    panel
                        .render(Some(&current))
                        .into_iter()
                        .map(|item| {
                            let class = item.class();
                            view! {
                                <A href=item.href class=class>
                                    <Icon icon=ShellIcon::Nav(item.icon) class="h-5 w-5"/>
                                    {item.label.into_owned()}
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}
