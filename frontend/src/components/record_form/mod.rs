//! Record form wizard: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! the review sub-view, and helpers.
//!
//! Responsibilities
//! - Re-export the types the application shell needs (`Msg`,
//!   `RecordFormProps`, `SubmissionOutcome`, `RecordFormComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.

use yew::prelude::*;

pub mod helpers;
mod messages;
mod props;
mod review;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{RecordFormProps, SubmissionOutcome};
pub use state::RecordFormComponent;

impl Component for RecordFormComponent {
    type Message = Msg;
    type Properties = RecordFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        RecordFormComponent::new(&ctx.props().user)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
