pub const BACKBONE_TYPE: &str = "BackboneElement";
pub const EXTENSION_TYPE: &str = "Extension";
pub const CHOICE_SUFFIX: &str = "[x]";
pub const REFERENCE_PREFIX: &str = "Reference";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Resource,
    Backbone,
    Element,
    Extension,
    Choice,
    Reference,
}

impl IconKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IconKind::Resource => "resource",
            IconKind::Backbone => "backbone",
            IconKind::Element => "element",
            IconKind::Extension => "extension",
            IconKind::Choice => "choice",
            IconKind::Reference => "reference",
        }
    }
}

/// Picks the icon for a row. Rules are checked in order; the first match wins.
pub fn select_icon(type_name: &str, is_root: bool, has_children: bool) -> IconKind {
    if is_root {
        return IconKind::Resource;
    }
    match type_name {
        BACKBONE_TYPE => IconKind::Backbone,
        EXTENSION_TYPE => IconKind::Extension,
        _ if type_name.ends_with(CHOICE_SUFFIX) => IconKind::Choice,
        _ if type_name.starts_with(REFERENCE_PREFIX) => IconKind::Reference,
        _ if has_children => IconKind::Backbone,
        _ => IconKind::Element,
    }
}
