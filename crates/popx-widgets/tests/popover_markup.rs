#![forbid(unsafe_code)]

//! Integration tests: full open/close markup assembly for the popover
//! dialog, and the asset registrations the close half performs.

use popx_assets::{AssetManifest, PageAssets, PluginOptions};
use popx_html::Attributes;
use popx_widgets::{ButtonSpec, ContextType, PopoverConfig, PopoverX, ScopedWidget, Size};

fn render(config: PopoverConfig, body: &str) -> (String, PageAssets) {
    let mut assets = PageAssets::with_framework_bundles();
    let mut widget = PopoverX::new(config);
    let mut out = widget.open();
    out.push_str(body);
    out.push_str(&widget.close(&mut assets));
    (out, assets)
}

#[test]
fn full_round_trip_markup() {
    let config = PopoverConfig::new()
        .context(ContextType::Danger)
        .size(Size::Large)
        .header("Hi")
        .footer("Bye")
        .close_button(ButtonSpec::new())
        .toggle_button(ButtonSpec::new().label("Open"))
        .id("pop1");

    let mut assets = PageAssets::with_framework_bundles();
    let mut widget = PopoverX::new(config);

    let expected_open = concat!(
        "<button type=\"button\" data-toggle=\"popover-x\" data-placement=\"right\" data-target=\"#pop1\">Open</button>\n",
        "<div role=\"dialog\" id=\"pop1\" class=\"popover popover-danger popover-lg\">\n",
        "<div class=\"arrow\"></div><div class=\"popover-title\">\n",
        "<button type=\"button\" data-dismiss=\"popover-x\" aria-hidden=\"true\" class=\"close\">&times;</button>\n",
        "Hi\n",
        "</div>\n",
        "<div class=\"popover-content\">\n",
    );
    assert_eq!(widget.open(), expected_open);

    let expected_close = concat!(
        "\n",
        "\n",
        "</div>\n",
        "<div class=\"popover-footer\">\n",
        "Bye\n",
        "</div>\n",
        "</div>",
    );
    assert_eq!(widget.close(&mut assets), expected_close);
}

#[test]
fn suppressed_toggle_renders_no_toggle_fragment() {
    let (markup, _) = render(PopoverConfig::new().id("p"), "");
    assert!(markup.starts_with("\n<div role=\"dialog\""));
    assert!(!markup.contains("data-toggle"));
}

#[test]
fn suppressed_toggle_requests_inline_plugin_init() {
    let (_, assets) = render(PopoverConfig::new().id("p"), "");
    assert_eq!(
        assets.plugin_inits(),
        &[r#"jQuery('#p').popoverX({"show":false});"#.to_owned()]
    );
}

#[test]
fn present_toggle_skips_inline_plugin_init() {
    let config = PopoverConfig::new().id("p").toggle_button(ButtonSpec::new());
    let (markup, assets) = render(config, "");
    assert!(markup.contains(r##"data-target="#p""##));
    assert!(assets.plugin_inits().is_empty());
}

#[test]
fn bundle_is_registered_on_every_close() {
    let mut assets = PageAssets::with_framework_bundles();
    for i in 0..3 {
        let mut widget = PopoverX::new(PopoverConfig::new().id(format!("p{i}")));
        let _ = widget.open();
        let _ = widget.close(&mut assets);
    }
    // Deduplication is the registry's job; the bundle appears once.
    let count = assets
        .registered()
        .iter()
        .filter(|name| *name == "popover-x")
        .count();
    assert_eq!(count, 1);
    assert_eq!(assets.plugin_inits().len(), 3);
}

#[test]
fn header_without_close_button_is_plain_wrapped_content() {
    let config = PopoverConfig::new()
        .id("p")
        .header("Hi")
        .without_close_button();
    let (markup, _) = render(config, "");
    assert!(markup.contains("<div class=\"popover-title\">\nHi\n</div>"));
    assert!(!markup.contains("data-dismiss"));
}

#[test]
fn close_button_alone_still_renders_header_block() {
    let config = PopoverConfig::new().id("p");
    let (markup, _) = render(config, "");
    assert!(markup.contains("popover-title"));
    assert!(markup.contains("&times;"));
}

#[test]
fn no_header_and_no_close_button_renders_no_header_block() {
    let config = PopoverConfig::new().id("p").without_close_button();
    let (markup, _) = render(config, "");
    assert!(!markup.contains("popover-title"));
}

#[test]
fn container_class_reflects_context_and_size() {
    let (markup, _) = render(
        PopoverConfig::new().id("p").context(ContextType::Success),
        "",
    );
    assert!(markup.contains(r#"class="popover popover-success""#));

    let (markup, _) = render(
        PopoverConfig::new()
            .id("p")
            .context(ContextType::Success)
            .size(Size::Medium),
        "",
    );
    assert!(markup.contains(r#"class="popover popover-success popover-md""#));
}

#[test]
fn caller_body_content_lands_between_halves() {
    let (markup, _) = render(PopoverConfig::new().id("p"), "Say hello...");
    let content_open = markup.find("<div class=\"popover-content\">").expect("body open");
    let body = markup.find("Say hello...").expect("body content");
    assert!(content_open < body);
}

#[test]
fn configured_body_is_emitted_by_close() {
    let (markup, _) = render(PopoverConfig::new().id("p").body("configured body"), "");
    assert!(markup.contains("\nconfigured body\n</div>"));
}

#[test]
fn generated_ids_are_unique_per_widget() {
    let (first, _) = render(PopoverConfig::new(), "");
    let (second, _) = render(PopoverConfig::new(), "");
    let extract = |markup: &str| {
        let start = markup.find("id=\"").expect("id rendered") + 4;
        let end = markup[start..].find('"').expect("closing quote") + start;
        markup[start..end].to_owned()
    };
    assert_ne!(extract(&first), extract(&second));
}

#[test]
fn disabled_plugin_options_render_empty_object() {
    let config = PopoverConfig::new()
        .id("p")
        .plugin_options(PluginOptions::disabled());
    let (_, assets) = render(config, "");
    assert_eq!(assets.plugin_inits(), &["jQuery('#p').popoverX({});".to_owned()]);
}

#[test]
fn page_assets_emit_popover_files() {
    let (_, assets) = render(PopoverConfig::new().id("p"), "");
    let head = assets.head_markup(false).expect("framework bundles seeded");
    assert!(head.contains("bootstrap-popover-x.css"));
    let body_end = assets.body_end_markup(false).expect("framework bundles seeded");
    assert!(body_end.contains("bootstrap-popover-x.js"));
    assert!(body_end.contains("jQuery('#p')"));
}

#[test]
fn unknown_framework_bundles_surface_at_resolution_only() {
    // An empty registry lacks the framework bundle definitions; widget
    // rendering must still succeed.
    let mut assets = PageAssets::new();
    let mut widget = PopoverX::new(PopoverConfig::new().id("p"));
    let _ = widget.open();
    let _ = widget.close(&mut assets);
    assert!(assets.is_registered("popover-x"));
    assert!(assets.css_files(false).is_err());
}

#[test]
fn custom_tags_flow_through_header_and_footer() {
    let config = PopoverConfig::new()
        .id("p")
        .without_close_button()
        .header("Title")
        .header_attrs(Attributes::new().attr("tag", "h4"))
        .footer("Done")
        .footer_attrs(Attributes::new().attr("tag", "footer"));
    let (markup, _) = render(config, "");
    assert!(markup.contains("<h4 class=\"popover-title\">\nTitle\n</h4>"));
    assert!(markup.contains("<footer class=\"popover-footer\">\nDone\n</footer>"));
}

#[test]
fn manifest_registered_matches_shipped_bundle() {
    let (_, assets) = render(PopoverConfig::new().id("p"), "");
    let expected = AssetManifest::popover_x();
    assert!(assets.is_registered(&expected.name));
}
