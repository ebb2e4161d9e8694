pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("form-inline", None), "form-inline");
        assert_eq!(merge_layout_class("form-inline", Some("")), "form-inline");
        assert_eq!(
            merge_layout_class("form-inline", Some("ml-auto")),
            "form-inline ml-auto"
        );
    }

    #[test]
    fn bool_tokens() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
