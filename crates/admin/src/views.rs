//! Display models for the Theme Builder templates.

use dukkan_core::builder::{
    BuilderDraft, FieldKind, FieldSpec, Layout, PreviewDevice, SettingsCategory, ThemeSettings,
};
use dukkan_core::theme::ThemeKind;

/// One `<option>` of a choice field or select.
#[derive(Debug, Clone)]
pub struct ChoiceView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One editable settings field.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub category: &'static str,
    pub field: &'static str,
    pub label: &'static str,
    /// `color`, `number`, `toggle`, `choice`, `textarea`, `text` or `url`.
    pub input: &'static str,
    pub value: String,
    pub checked: bool,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub max_len: usize,
    pub choices: Vec<ChoiceView>,
}

impl FieldView {
    #[must_use]
    pub fn new(spec: &FieldSpec, settings: &ThemeSettings) -> Self {
        let value = settings
            .field_value(spec.category, spec.field)
            .unwrap_or_default();
        let mut view = Self {
            category: spec.category.key(),
            field: spec.field,
            label: spec.label,
            input: "text",
            checked: value == "true",
            value,
            min: 0,
            max: 0,
            step: 1,
            max_len: 0,
            choices: Vec::new(),
        };

        match spec.kind {
            FieldKind::Color => view.input = "color",
            FieldKind::Number { min, max, step } => {
                view.input = "number";
                view.min = min;
                view.max = max;
                view.step = step;
            }
            FieldKind::Toggle => view.input = "toggle",
            FieldKind::Choice(choices) => {
                view.input = "choice";
                view.choices = choices
                    .iter()
                    .map(|c| ChoiceView {
                        value: (*c).to_owned(),
                        label: (*c).replace('_', " "),
                        selected: *c == view.value,
                    })
                    .collect();
            }
            FieldKind::Text { max_len, multiline } => {
                view.input = if multiline { "textarea" } else { "text" };
                view.max_len = max_len;
            }
            FieldKind::Url { max_len } => {
                view.input = "url";
                view.max_len = max_len;
            }
        }
        view
    }
}

/// A settings panel: one category and its fields.
#[derive(Debug, Clone)]
pub struct PanelView {
    pub key: &'static str,
    pub label: &'static str,
    pub fields: Vec<FieldView>,
}

impl PanelView {
    /// Panels for every category, in display order.
    #[must_use]
    pub fn all(settings: &ThemeSettings) -> Vec<Self> {
        SettingsCategory::ALL
            .into_iter()
            .map(|category| Self {
                key: category.key(),
                label: category.display_name(),
                fields: category
                    .fields()
                    .map(|spec| FieldView::new(spec, settings))
                    .collect(),
            })
            .collect()
    }
}

/// One row of the section list.
#[derive(Debug, Clone)]
pub struct LayoutItemView {
    pub index: usize,
    pub key: &'static str,
    pub name: String,
    pub up: Option<usize>,
    pub down: Option<usize>,
}

impl LayoutItemView {
    #[must_use]
    pub fn list(layout: &Layout) -> Vec<Self> {
        let last = layout.len().saturating_sub(1);
        layout
            .components()
            .iter()
            .enumerate()
            .map(|(index, component)| Self {
                index,
                key: component.id.key(),
                name: component.name.clone(),
                up: index.checked_sub(1),
                down: (index < last).then_some(index + 1),
            })
            .collect()
    }

    /// Comma-separated keys, the format `layout/order` accepts.
    #[must_use]
    pub fn order(layout: &Layout) -> String {
        layout.ids().map(|id| id.key()).collect::<Vec<_>>().join(",")
    }
}

/// A device toggle button.
#[derive(Debug, Clone)]
pub struct DeviceView {
    pub key: &'static str,
    pub label: &'static str,
    pub size: String,
    pub active: bool,
}

impl DeviceView {
    #[must_use]
    pub fn all(draft: &BuilderDraft) -> Vec<Self> {
        PreviewDevice::ALL
            .into_iter()
            .map(|device| {
                let (width, height) = device.viewport();
                Self {
                    key: device.key(),
                    label: device.display_name(),
                    size: format!("{width}×{height}"),
                    active: device == draft.preview.device,
                }
            })
            .collect()
    }
}

/// Base theme options.
#[must_use]
pub fn theme_choices(current: ThemeKind) -> Vec<ChoiceView> {
    ThemeKind::ALL
        .into_iter()
        .map(|theme| ChoiceView {
            value: theme.slug().to_owned(),
            label: theme.display_name().to_owned(),
            selected: theme == current,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::builder::FIELDS;

    use super::*;

    #[test]
    fn test_panels_cover_every_field() {
        let settings = ThemeSettings::for_theme(ThemeKind::Tech);
        let panels = PanelView::all(&settings);
        assert_eq!(panels.len(), SettingsCategory::ALL.len());
        let total: usize = panels.iter().map(|p| p.fields.len()).sum();
        assert_eq!(total, FIELDS.len());
    }

    #[test]
    fn test_field_kinds_map_to_inputs() {
        let settings = ThemeSettings::for_theme(ThemeKind::Tech);
        let panels = PanelView::all(&settings);
        let field = |name: &str| {
            panels
                .iter()
                .flat_map(|p| p.fields.iter())
                .find(|f| f.field == name)
                .unwrap()
                .clone()
        };

        let primary = field("primary");
        assert_eq!(primary.input, "color");
        assert!(primary.value.starts_with('#'));

        let radius = field("radius_px");
        assert_eq!((radius.input, radius.min, radius.max), ("number", 0, 48));

        let hero = field("hero_style");
        assert_eq!(hero.input, "choice");
        assert_eq!(hero.choices.iter().filter(|c| c.selected).count(), 1);

        assert_eq!(field("custom_css").input, "textarea");
        assert_eq!(field("logo_url").input, "url");
        assert_eq!(field("shadows").input, "toggle");
    }

    #[test]
    fn test_layout_items_have_move_targets() {
        let layout = Layout::default();
        let items = LayoutItemView::list(&layout);
        assert_eq!(items.first().unwrap().up, None);
        assert_eq!(items.first().unwrap().down, Some(1));
        assert_eq!(items.last().unwrap().down, None);
        assert_eq!(
            LayoutItemView::order(&layout),
            "header,hero,categories,featured,newsletter,footer"
        );
    }
}
