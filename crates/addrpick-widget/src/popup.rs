//! Popup content for a resolved address.
//!
//! Each optional field is either present and bound, or absent and its
//! fragment is left out of the output entirely.

use addrpick_core::SupplierInfo;
use askama::Template;

#[derive(Template)]
#[template(
    source = r#"<div class="info"><div class="addr"><strong>Address</strong><br><span data-bind="address">{{ address }}</span></div>
{%- if let Some(name) = name -%}
<div class="net"><strong>Network operator</strong><br>
{%- if let Some(logo) = logo -%}
<img data-bind="logo" alt="" src="{{ logo }}">
{%- endif -%}
<div data-bind="name">{{ name }}</div>
{%- if let Some(phone) = phone -%}
<div data-bind="phone">{{ phone }}</div>
{%- endif -%}
{%- if let Some(href) = website_href -%}
<a data-bind="website" target="_blank" rel="noopener" href="{{ href }}">{{ website_text }}</a>
{%- endif -%}
</div>
{%- else -%}
<div class="net"><strong>Network operator</strong><br><em>(disabled or not found)</em></div>
{%- endif -%}
</div>"#,
    ext = "html"
)]
struct PopupTemplate<'a> {
    address: &'a str,
    name: Option<&'a str>,
    phone: Option<&'a str>,
    website_href: Option<&'a str>,
    website_text: &'a str,
    logo: Option<&'a str>,
}

/// Supplier fields after presence checks and formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierFields {
    pub name: String,
    /// Already formatted for display, e.g. `Phone: 70 15 15 60`.
    pub phone: Option<String>,
    /// `(href, text)`; the href always carries a scheme.
    pub website: Option<(String, String)>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSection {
    Supplier(SupplierFields),
    /// No supplier: the lookup is disabled, found nothing, or failed.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub address: String,
    pub network: NetworkSection,
}

impl PopupContent {
    #[must_use]
    pub fn build(address: &str, supplier: Option<&SupplierInfo>) -> Self {
        let network = match supplier {
            Some(info) => NetworkSection::Supplier(SupplierFields {
                name: info.name.clone(),
                phone: info
                    .phone_number
                    .as_deref()
                    .map(|number| format!("Phone: {number}")),
                website: info
                    .website
                    .as_deref()
                    .map(|site| (website_href(site), site.to_owned())),
                logo_url: info.logo_url.clone(),
            }),
            None => NetworkSection::NotFound,
        };
        Self {
            address: address.to_owned(),
            network,
        }
    }

    #[must_use]
    pub fn has_supplier(&self) -> bool {
        matches!(self.network, NetworkSection::Supplier(_))
    }

    /// Renders the popup as an HTML fragment. All text is escaped.
    ///
    /// # Errors
    ///
    /// Returns the template engine's error if rendering fails.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        let fields = match &self.network {
            NetworkSection::Supplier(fields) => Some(fields),
            NetworkSection::NotFound => None,
        };
        let website = fields.and_then(|f| f.website.as_ref());
        PopupTemplate {
            address: &self.address,
            name: fields.map(|f| f.name.as_str()),
            phone: fields.and_then(|f| f.phone.as_deref()),
            website_href: website.map(|(href, _)| href.as_str()),
            website_text: website.map_or("", |(_, text)| text.as_str()),
            logo: fields.and_then(|f| f.logo_url.as_deref()),
        }
        .render()
    }
}

/// Prefixes `https://` unless the value already starts with `http`.
#[must_use]
pub fn website_href(website: &str) -> String {
    if website.starts_with("http") {
        website.to_owned()
    } else {
        format!("https://{website}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND_NOTE: &str = "(disabled or not found)";

    fn render(popup: &PopupContent) -> String {
        popup.to_html().expect("popup template renders")
    }

    fn radius() -> SupplierInfo {
        SupplierInfo {
            name: "Radius Elnet A/S".to_owned(),
            phone_number: Some("70 15 15 60".to_owned()),
            website: Some("www.radiuselnet.dk".to_owned()),
            logo_url: Some("https://cdn.example.com/radius.png".to_owned()),
        }
    }

    #[test]
    fn website_href_adds_scheme_only_when_missing() {
        assert_eq!(website_href("radiuselnet.dk"), "https://radiuselnet.dk");
        assert_eq!(website_href("http://cerius.dk"), "http://cerius.dk");
        assert_eq!(website_href("https://n1.dk"), "https://n1.dk");
    }

    #[test]
    fn full_supplier_binds_every_field() {
        let popup = PopupContent::build("Rådhuspladsen 1, 1550 København V", Some(&radius()));
        let NetworkSection::Supplier(fields) = &popup.network else {
            panic!("expected supplier section");
        };
        assert_eq!(fields.phone.as_deref(), Some("Phone: 70 15 15 60"));
        assert_eq!(
            fields.website,
            Some((
                "https://www.radiuselnet.dk".to_owned(),
                "www.radiuselnet.dk".to_owned()
            ))
        );

        let html = render(&popup);
        assert!(html.contains("<span data-bind=\"address\">Rådhuspladsen 1, 1550 København V</span>"));
        assert!(html.contains("<div data-bind=\"name\">Radius Elnet A"));
        assert!(html.contains("<div data-bind=\"phone\">Phone: 70 15 15 60</div>"));
        assert!(html.contains("<a data-bind=\"website\" target=\"_blank\" rel=\"noopener\" href=\"https:"));
        assert!(html.contains("www.radiuselnet.dk</a>"));
        assert!(html.contains("<img data-bind=\"logo\" alt=\"\" src=\"https:"));
        assert!(html.contains("radius.png\">"));
        assert!(!html.contains(NOT_FOUND_NOTE));
    }

    #[test]
    fn absent_fields_are_omitted_not_rendered_empty() {
        let info = SupplierInfo {
            name: "Cerius A/S".to_owned(),
            phone_number: None,
            website: None,
            logo_url: None,
        };
        let html = render(&PopupContent::build("Algade 1, 4000 Roskilde", Some(&info)));
        assert!(html.contains("data-bind=\"name\""));
        assert!(!html.contains("data-bind=\"phone\""));
        assert!(!html.contains("data-bind=\"website\""));
        assert!(!html.contains("data-bind=\"logo\""));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn no_supplier_renders_fallback() {
        let popup = PopupContent::build("Algade 1, 4000 Roskilde", None);
        assert!(!popup.has_supplier());
        let html = render(&popup);
        assert!(html.contains("<strong>Network operator</strong><br><em>(disabled or not found)</em></div></div>"));
        assert!(!html.contains("data-bind=\"name\""));
    }

    #[test]
    fn text_is_html_escaped() {
        let info = SupplierInfo {
            name: "<script>alert('x')</script> & Co".to_owned(),
            phone_number: None,
            website: Some("example.dk/?a=1&b=\"2\"".to_owned()),
            logo_url: None,
        };
        let html = render(&PopupContent::build("A & B <st>", Some(&info)));
        assert!(html.contains("A &amp; B &lt;st&gt;"));
        assert!(html.contains("&lt;script&gt;alert("));
        assert!(!html.contains("alert('x')"));
        assert!(html.contains("a=1&amp;b=&quot;2&quot;\""));
        assert!(!html.contains("<script>"));
    }
}
