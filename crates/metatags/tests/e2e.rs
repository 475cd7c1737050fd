//! End-to-end tests for metatags.
//!
//! These tests build complete `<head>` blocks and check the rendered text.

use metatags::{Attributes, Category, Config, MetaTags};
use serde::Serialize;

#[derive(Serialize)]
struct Article {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    headline: String,
    url: String,
}

fn article() -> Article {
    Article {
        context: "https://schema.org",
        kind: "Article",
        headline: "Hello".to_string(),
        url: "https://example.com/posts/hello".to_string(),
    }
}

#[test]
fn test_full_head_pretty() {
    let mut tags = MetaTags::new();
    tags.json_ld(&article()).expect("serialize article");
    tags.stylesheet("/main.css", None)
        .og("title", "Hello")
        .twitter("card", "summary")
        .charset("utf-8")
        .title("Hello")
        .description("First post");

    let expected = concat!(
        "<title>Hello</title>\n",
        "    <meta charset=\"utf-8\">\n",
        "    <meta name=\"description\" content=\"First post\">\n",
        "    <meta property=\"og:title\" content=\"Hello\">\n",
        "    <meta name=\"twitter:card\" content=\"summary\">\n",
        "    <link rel=\"stylesheet\" href=\"/main.css\" type=\"text/css\">\n",
        "    <script type=\"application/ld+json\">{\n",
        "    \"@context\": \"https://schema.org\",\n",
        "    \"@type\": \"Article\",\n",
        "    \"headline\": \"Hello\",\n",
        "    \"url\": \"https://example.com/posts/hello\"\n",
        "}</script>\n",
    );

    assert_eq!(tags.render(&[]), expected);
}

#[test]
fn test_full_head_minimized() {
    let mut tags = MetaTags::with_options(None, true);
    tags.title("Hello").og("type", "article");
    tags.json_ld(&article()).expect("serialize article");

    assert_eq!(
        tags.render(&[]),
        concat!(
            "<title>Hello</title>",
            "<meta property=\"og:type\" content=\"article\">",
            "<script type=\"application/ld+json\">",
            "{\"@context\":\"https://schema.org\",\"@type\":\"Article\",",
            "\"headline\":\"Hello\",\"url\":\"https://example.com/posts/hello\"}",
            "</script>",
        )
    );
}

#[test]
fn test_minimized_json_ld_has_unescaped_slashes() {
    let mut tags = MetaTags::with_options(None, true);
    tags.json_ld(&serde_json::json!({"@type": "Article", "url": "https://x/y"}))
        .expect("serialize");

    let html = tags.render(&[]);
    assert_eq!(
        html,
        r#"<script type="application/ld+json">{"@type":"Article","url":"https://x/y"}</script>"#
    );
    assert!(!html.contains("\\/"));
    assert!(!html.contains('\n'));
}

#[test]
fn test_render_is_idempotent() {
    let mut tags = MetaTags::new();
    tags.title("T").meta("author", "Me").script("x()");

    let first = tags.render(&[]);
    let second = tags.render(&[]);
    assert_eq!(first, second);
    assert_eq!(tags.to_string(), first);
}

#[test]
fn test_default_order_ignores_call_order() {
    let mut tags = MetaTags::new();
    tags.script("x()").title("T");

    let html = tags.render(&[]);
    let title = html.find("<title>").expect("title rendered");
    let script = html.find("<script>").expect("script rendered");
    assert!(title < script);
}

#[test]
fn test_insertion_order_within_group() {
    let mut tags = MetaTags::new();
    tags.og("title", "A").og("description", "B").og("title", "A");

    assert_eq!(
        tags.render(&[Category::Og]),
        concat!(
            "<meta property=\"og:title\" content=\"A\">\n",
            "    <meta property=\"og:description\" content=\"B\">\n",
            "    <meta property=\"og:title\" content=\"A\">\n",
        )
    );
}

#[test]
fn test_custom_indentation_shape() {
    let mut tags = MetaTags::with_options(Some("  "), false);
    tags.title("T").meta("author", "Me").meta("robots", "all");

    let html = tags.render(&[]);
    assert!(html.ends_with('\n'));
    assert!(!html.ends_with("\n\n"));

    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(!lines[0].starts_with(' '));
    for line in &lines[1..] {
        assert!(line.starts_with("  "));
        assert!(!line.starts_with("   "));
    }
}

#[test]
fn test_render_subset_without_matches_is_empty() {
    let mut tags = MetaTags::new();
    tags.title("T");

    assert_eq!(tags.render(&[Category::Script]), "");
    assert_eq!(tags.render_names(&["script"]), "");
}

#[test]
fn test_render_empty_builder() {
    assert_eq!(MetaTags::new().render(&[]), "");
    assert_eq!(MetaTags::with_options(None, true).render(&[]), "");
}

#[test]
fn test_render_custom_order_and_repeats() {
    let mut tags = MetaTags::new();
    tags.title("T").style("a{}");

    assert_eq!(
        tags.render(&[Category::Style, Category::Title, Category::Style]),
        concat!(
            "<style type=\"text/css\">a{}</style>\n",
            "    <title>T</title>\n",
            "    <style type=\"text/css\">a{}</style>\n",
        )
    );
}

#[test]
fn test_nested_indentation_is_untouched() {
    let mut tags = MetaTags::with_options(Some("\t"), false);
    tags.title("T");
    tags.json_ld(&serde_json::json!({"a": 1})).expect("serialize");

    assert_eq!(
        tags.render(&[]),
        "<title>T</title>\n\t<script type=\"application/ld+json\">{\n    \"a\": 1\n}</script>\n"
    );
}

#[test]
fn test_attribute_rules_through_builder() {
    let mut tags = MetaTags::new();
    tags.link(
        "preconnect",
        "https://fonts.example.com",
        Attributes::new()
            .with("crossorigin", true)
            .with("disabled", false)
            .with("title", "")
            .with("data-priority", "0"),
    );

    assert_eq!(
        tags.render(&[]),
        "<link rel=\"preconnect\" href=\"https://fonts.example.com\" crossorigin data-priority=\"0\">\n"
    );
}

#[test]
fn test_stylesheet_omits_media() {
    let mut tags = MetaTags::new();
    tags.stylesheet("a.css", None);

    let link = &tags.group(Category::Link).expect("link group").tags()[0];
    assert!(link.contains(r#"rel="stylesheet""#));
    assert!(link.contains(r#"type="text/css""#));
    assert!(link.contains(r#"href="a.css""#));
    assert!(!link.contains("media"));
}

#[test]
fn test_builder_from_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config_path = dir.path().join("metatags.toml");
    std::fs::write(
        &config_path,
        r#"
[render]
indentation = "  "
order = ["link", "title"]
"#,
    )
    .expect("write");

    let config = Config::load(&config_path).expect("load config");
    let mut tags = MetaTags::from_config(&config);
    tags.title("T").favicon("/favicon.ico", Some("image/x-icon")).og("x", "y");

    assert_eq!(
        tags.render(&[]),
        "<link rel=\"icon\" href=\"/favicon.ico\" type=\"image/x-icon\">\n  <title>T</title>\n"
    );
    assert_eq!(
        tags.render(&[Category::Og]),
        "<meta property=\"og:x\" content=\"y\">\n"
    );
}
