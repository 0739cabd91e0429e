use common::editor::SchemaVariant;
use web_sys::UrlSearchParams;
use yew::{html, AttrValue, Component, Context, Html};

use crate::components::forms::{FormPage, Mode};

/// Page parameters taken from the query string, e.g.
/// `/?owner=checklist-7&organisation=org-3&variant=checklist&mode=viewer`.
#[derive(Debug, Default, PartialEq)]
struct PageQuery {
    owner: Option<String>,
    organisation: Option<String>,
    variant: SchemaVariant,
    mode: Mode,
}

impl PageQuery {
    fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let Ok(params) = UrlSearchParams::new_with_str(&search) else {
            return Self::default();
        };
        let non_empty = |key: &str| params.get(key).filter(|v| !v.trim().is_empty());
        Self {
            owner: non_empty("owner"),
            organisation: non_empty("organisation"),
            variant: match non_empty("variant").as_deref() {
                Some("checklist") => SchemaVariant::Checklist,
                _ => SchemaVariant::Form,
            },
            mode: match non_empty("mode").as_deref() {
                Some("viewer") => Mode::Viewer,
                _ => Mode::Builder,
            },
        }
    }
}

pub struct App {
    query: PageQuery,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            query: PageQuery::from_location(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(owner) = &self.query.owner else {
            return html! {
                <div class="form-error">{"Open this page with an ?owner=<form or checklist id> parameter."}</div>
            };
        };
        html! {
            <div>
                <FormPage
                    owner_id={AttrValue::from(owner.clone())}
                    organisation_id={self.query.organisation.clone().map(AttrValue::from)}
                    variant={self.query.variant}
                    initial_mode={self.query.mode}
                />
            </div>
        }
    }
}
