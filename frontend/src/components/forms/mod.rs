//! Form / checklist page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `FormPageProps`, `FormPage`, `Mode`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fetch the persisted format of `owner_id` (and, when an
//!   organisation is given, its submission) and seed the store from them. A
//!   missing format starts an empty schema; a malformed one is reported and
//!   left untouched on the server.

use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod signature;
mod state;
mod table;
mod update;
mod view;

use common::store::SchemaStore;
use common::viewer::SubmissionState;
use helpers::show_toast;
pub use messages::Msg;
pub use props::FormPageProps;
pub use state::{FormPage, Mode};

use crate::api;

impl Component for FormPage {
    type Message = Msg;
    type Properties = FormPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        FormPage::new(ctx.props().initial_mode)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let owner_id = ctx.props().owner_id.to_string();
            let organisation_id = ctx.props().organisation_id.as_ref().map(|o| o.to_string());
            spawn_local(async move {
                match load(&owner_id, organisation_id.as_deref()).await {
                    Ok((store, submission)) => {
                        link.send_message(Msg::Loaded { store, submission });
                    }
                    Err(e) => link.send_message(Msg::LoadFailed(e)),
                }
            });
        }
    }
}

async fn load(
    owner_id: &str,
    organisation_id: Option<&str>,
) -> Result<(SchemaStore, SubmissionState), String> {
    let record = api::fetch_format(owner_id).await?;
    let store = SchemaStore::from_record(record.as_ref()).map_err(|e| e.to_string())?;
    if record.is_none() {
        show_toast("No saved format yet. Started an empty one.");
    }

    let submission = match organisation_id {
        Some(org) => {
            let record = api::fetch_submission(org, owner_id).await?;
            SubmissionState::load(record.as_ref()).map_err(|e| e.to_string())?
        }
        None => SubmissionState::default(),
    };
    Ok((store, submission))
}
