//! Dynamic form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`FormManagerProps`, `FormManagerComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//!   Messages are the manager's own `FormEvent`s.
//! - Push the draft into `<select>` elements after each render, see
//!   `helpers::sync_select_values`.

use common::forms::FormEvent;
use yew::prelude::*;

mod helpers;
mod props;
mod state;
mod update;
mod view;

pub use helpers::install_unload_guard;
pub use props::FormManagerProps;
pub use state::FormManagerComponent;

impl Component for FormManagerComponent {
    type Message = FormEvent;
    type Properties = FormManagerProps;

    fn create(ctx: &Context<Self>) -> Self {
        FormManagerComponent::new(ctx.props().registry.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        helpers::sync_select_values(self);
    }
}
