//! Component categories drive which props are kept and which roll-ups are derived.

use usage_core::models::{PropValue, Props};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    Button,
    Input,
    Select,
    Modal,
    Feedback,
    Data,
    Generic,
}

/// Name fragments per category, checked in this order. Order matters:
/// `SelectInput` is a select, `IconButton` a button.
const NAME_RULES: &[(ComponentCategory, &[&str])] = &[
    (
        ComponentCategory::Modal,
        &["modal", "dialog", "drawer", "popover", "sheet"],
    ),
    (
        ComponentCategory::Select,
        &["select", "combobox", "dropdown", "autocomplete", "picker"],
    ),
    (
        ComponentCategory::Input,
        &["input", "textfield", "textarea", "checkbox", "radio", "switch", "field"],
    ),
    (ComponentCategory::Button, &["button", "link", "fab"]),
    (
        ComponentCategory::Feedback,
        &[
            "alert", "toast", "banner", "notification", "snackbar", "progress", "spinner",
            "skeleton", "tooltip",
        ],
    ),
    (
        ComponentCategory::Data,
        &["table", "grid", "list", "timeline", "tree", "chart"],
    ),
];

impl ComponentCategory {
    /// Case-insensitive lookup by component name; unknown names are generic.
    pub fn from_component_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        NAME_RULES
            .iter()
            .find(|(_, fragments)| fragments.iter().any(|f| lower.contains(f)))
            .map(|(category, _)| *category)
            .unwrap_or(Self::Generic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Select => "select",
            Self::Modal => "modal",
            Self::Feedback => "feedback",
            Self::Data => "data",
            Self::Generic => "generic",
        }
    }

    /// Keys retained after merging derived roll-ups into the raw props.
    pub fn allowed_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Button => &[
                "buttonType", "variant", "size", "type", "disabled", "loading", "fullWidth",
                "hasLeadingIcon", "hasTrailingIcon", "iconOnly",
            ],
            Self::Input => &[
                "type", "variant", "size", "disabled", "required", "readOnly", "hasError",
                "hasLabel", "hasHelperText", "hasPlaceholder", "hasLeadingIcon",
                "hasTrailingIcon",
            ],
            Self::Select => &[
                "variant", "size", "disabled", "required", "multiple", "searchable",
                "clearable", "hasError", "hasLabel", "hasOptions", "optionCount",
            ],
            Self::Modal => &[
                "variant", "size", "placement", "dismissible", "hasTitle", "hasFooter",
                "hasCloseButton",
            ],
            Self::Feedback => &[
                "variant", "severity", "status", "size", "dismissible", "hasTitle", "hasIcon",
                "hasAction",
            ],
            Self::Data => &[
                "variant", "size", "density", "sortable", "selectable", "paginated", "striped",
                "hasData", "rowCount",
            ],
            Self::Generic => &[
                "variant", "size", "color", "shape", "status", "type", "orientation", "disabled",
                "hasChildren",
            ],
        }
    }

    /// Boolean (and count) roll-ups computed from the raw props.
    pub fn derive(&self, props: &Props) -> Vec<(&'static str, PropValue)> {
        let flag = |v: bool| PropValue::Bool(v);
        let has_error = props.is_truthy("error") || props.is_truthy("errorMessage");
        let has_leading = props.has_any(&["leadingIcon", "startIcon", "icon", "prefix"]);
        let has_trailing = props.has_any(&["trailingIcon", "endIcon", "suffix"]);

        match self {
            Self::Button => {
                let has_content = props.has_any(&["children", "label", "text"]);
                vec![
                    ("hasLeadingIcon", flag(has_leading)),
                    ("hasTrailingIcon", flag(has_trailing)),
                    ("iconOnly", flag((has_leading || has_trailing) && !has_content)),
                ]
            }
            Self::Input => vec![
                ("hasError", flag(has_error)),
                ("hasLabel", flag(props.is_truthy("label"))),
                ("hasHelperText", flag(props.is_truthy("helperText"))),
                ("hasPlaceholder", flag(props.is_truthy("placeholder"))),
                ("hasLeadingIcon", flag(has_leading)),
                ("hasTrailingIcon", flag(has_trailing)),
            ],
            Self::Select => {
                let option_count = props.get("options").and_then(PropValue::array_len);
                let mut derived = vec![
                    ("hasError", flag(has_error)),
                    ("hasLabel", flag(props.is_truthy("label"))),
                    ("hasOptions", flag(option_count.is_some_and(|n| n > 0))),
                ];
                if let Some(n) = option_count {
                    derived.push(("optionCount", PropValue::from(n)));
                }
                derived
            }
            Self::Modal => vec![
                ("hasTitle", flag(props.has_any(&["title", "heading"]))),
                ("hasFooter", flag(props.has_any(&["footer", "actions"]))),
                ("hasCloseButton", flag(props.has_any(&["onClose", "onDismiss"]))),
            ],
            Self::Feedback => vec![
                ("hasTitle", flag(props.has_any(&["title", "heading"]))),
                ("hasIcon", flag(props.has("icon"))),
                ("hasAction", flag(props.has_any(&["action", "onAction"]))),
                (
                    "dismissible",
                    flag(props.is_truthy("dismissible") || props.has_any(&["onDismiss", "onClose"])),
                ),
            ],
            Self::Data => {
                let rows = ["data", "items", "rows"]
                    .iter()
                    .find_map(|k| props.get(k).and_then(PropValue::array_len));
                let mut derived = vec![("hasData", flag(rows.is_some_and(|n| n > 0)))];
                if let Some(n) = rows {
                    derived.push(("rowCount", PropValue::from(n)));
                }
                derived
            }
            Self::Generic => vec![("hasChildren", flag(props.has("children")))],
        }
    }
}
