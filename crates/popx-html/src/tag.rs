//! Open/close/full tag assembly.
//!
//! Inner content is raw markup and passes through unescaped; only
//! attribute values are escaped (by [`Attributes::render_into`]).

use crate::attrs::Attributes;

/// Render an opening tag: `<name attr="value">`.
pub fn begin_tag(name: &str, attrs: &Attributes) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('<');
    out.push_str(name);
    attrs.render_into(&mut out);
    out.push('>');
    out
}

/// Render a closing tag: `</name>`.
pub fn end_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Render a full tag with raw inner content: `<name ...>inner</name>`.
pub fn tag(name: &str, inner: &str, attrs: &Attributes) -> String {
    let mut out = begin_tag(name, attrs);
    out.push_str(inner);
    out.push_str(&end_tag(name));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_tag_without_attributes() {
        assert_eq!(begin_tag("div", &Attributes::new()), "<div>");
    }

    #[test]
    fn begin_tag_with_attributes() {
        let attrs = Attributes::new().attr("id", "pop1").class("popover");
        assert_eq!(
            begin_tag("div", &attrs),
            r#"<div id="pop1" class="popover">"#
        );
    }

    #[test]
    fn end_tag_closes() {
        assert_eq!(end_tag("span"), "</span>");
    }

    #[test]
    fn full_tag_with_empty_inner() {
        let attrs = Attributes::new().class("arrow");
        assert_eq!(tag("div", "", &attrs), r#"<div class="arrow"></div>"#);
    }

    #[test]
    fn inner_content_is_not_escaped() {
        let attrs = Attributes::new();
        assert_eq!(
            tag("button", "&times;", &attrs),
            "<button>&times;</button>"
        );
    }
}
