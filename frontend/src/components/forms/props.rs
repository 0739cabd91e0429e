use common::editor::SchemaVariant;
use yew::prelude::*;

use super::state::Mode;

/// Properties for the `FormPage` component.
#[derive(Properties, PartialEq, Clone)]
pub struct FormPageProps {
    /// The form or checklist whose schema is edited / filled in.
    pub owner_id: AttrValue,

    /// Organisation filling in the schema. Without it the viewer is read-only,
    /// since submissions are scoped to an organisation.
    #[prop_or_default]
    pub organisation_id: Option<AttrValue>,

    /// Checklists additionally expose explicit cell identifiers in the editor.
    #[prop_or_default]
    pub variant: SchemaVariant,

    #[prop_or_default]
    pub initial_mode: Mode,
}
