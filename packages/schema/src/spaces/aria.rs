use super::{p, Definition, Space, N, NONE, SS};

pub(crate) static ARIA: Space = Space {
    name: "aria",
    transform: aria_transform,
    definitions: DEFINITIONS,
};

/// `ariaValueNow` → `aria-valuenow`; `role` stays `role`.
fn aria_transform(property: &str) -> String {
    match property.strip_prefix("aria") {
        Some(rest) if !rest.is_empty() => format!("aria-{}", rest.to_ascii_lowercase()),
        _ => property.to_string(),
    }
}

static DEFINITIONS: &[Definition] = &[
    p("ariaActiveDescendant", NONE),
    p("ariaAtomic", NONE),
    p("ariaAutoComplete", NONE),
    p("ariaBusy", NONE),
    p("ariaChecked", NONE),
    p("ariaColCount", N),
    p("ariaColIndex", N),
    p("ariaColSpan", N),
    p("ariaControls", SS),
    p("ariaCurrent", NONE),
    p("ariaDescribedBy", SS),
    p("ariaDetails", NONE),
    p("ariaDisabled", NONE),
    p("ariaDropEffect", SS),
    p("ariaErrorMessage", NONE),
    p("ariaExpanded", NONE),
    p("ariaFlowTo", SS),
    p("ariaGrabbed", NONE),
    p("ariaHasPopup", NONE),
    p("ariaHidden", NONE),
    p("ariaInvalid", NONE),
    p("ariaKeyShortcuts", NONE),
    p("ariaLabel", NONE),
    p("ariaLabelledBy", SS),
    p("ariaLevel", N),
    p("ariaLive", NONE),
    p("ariaModal", NONE),
    p("ariaMultiLine", NONE),
    p("ariaMultiSelectable", NONE),
    p("ariaOrientation", NONE),
    p("ariaOwns", SS),
    p("ariaPlaceholder", NONE),
    p("ariaPosInSet", N),
    p("ariaPressed", NONE),
    p("ariaReadOnly", NONE),
    p("ariaRelevant", NONE),
    p("ariaRequired", NONE),
    p("ariaRoleDescription", SS),
    p("ariaRowCount", N),
    p("ariaRowIndex", N),
    p("ariaRowSpan", N),
    p("ariaSelected", NONE),
    p("ariaSetSize", N),
    p("ariaSort", NONE),
    p("ariaValueMax", N),
    p("ariaValueMin", N),
    p("ariaValueNow", N),
    p("ariaValueText", NONE),
    p("role", NONE),
];
