use std::fmt::Write as _;

use crate::engine::Feature;

/// Renders the hover popup content for a point marker: title, city, then the
/// contact affordances that have a non-empty value on the feature.
pub fn popup_html(feature: &Feature) -> String {
    let title = feature.prop_str("title").unwrap_or_default();
    let city = feature.prop_str("city").unwrap_or_default();

    let mut html = String::new();
    let _ = write!(html, "<h4>{title}</h4><div>{city}</div>");

    if let Some(facebook) = non_empty(feature, "facebook") {
        push_link(&mut html, facebook, true, "facebook-icon", "connect via facebook");
    }
    if let Some(twitter) = non_empty(feature, "twitter") {
        push_link(&mut html, twitter, true, "twitter-icon", "connect via twitter");
    }
    if let Some(email) = non_empty(feature, "email") {
        let href = format!("mailto:{email}");
        push_link(&mut html, &href, false, "email-icon", "connect via email");
    }
    if let Some(url) = non_empty(feature, "url") {
        push_link(&mut html, url, true, "link-icon", "visit website");
    }

    html
}

fn non_empty<'a>(feature: &'a Feature, key: &str) -> Option<&'a str> {
    feature.prop_str(key).filter(|v| !v.is_empty())
}

fn push_link(html: &mut String, href: &str, blank: bool, icon: &str, label: &str) {
    let target = if blank { " target=\"_blank\"" } else { "" };
    let _ = write!(
        html,
        "<div><a href=\"{href}\"{target}><span class=\"{icon}\"></span>\
         <span class=\"connect-text-popover\">{label}</span></a></div>"
    );
}
