//! Workspace dashboard: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view
//! rendering.
//!
//! On first render a window resize listener is installed (and kept for the
//! lifetime of the page) so the sidebar collapses below the mobile
//! breakpoint; the initial viewport width is fed through the same message.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WorkspaceProps;
pub use state::{SectionTab, WorkspaceComponent};

impl Component for WorkspaceComponent {
    type Message = Msg;
    type Properties = WorkspaceProps;

    fn create(ctx: &Context<Self>) -> Self {
        let initial_office = ctx
            .props()
            .offices
            .first()
            .map(|office| office.id.clone())
            .unwrap_or_default();
        WorkspaceComponent::new(initial_office)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(width) = viewport_width() {
            ctx.link().send_message(Msg::ViewportChanged(width));
        }
        let link = ctx.link().clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(width) = viewport_width() {
                link.send_message(Msg::ViewportChanged(width));
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        // Listener lives for the rest of the page.
        closure.forget();
    }
}

fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
}
