use serde_json::{Value, json};

use crate::config::SiteConfig;

/// JSON-LD blocks describing the studio, rendered into `<head>`.
pub fn structured_data(site: &SiteConfig) -> Vec<String> {
    vec![
        script_safe(&organization(site)),
        script_safe(&service(site)),
    ]
}

pub fn organization(site: &SiteConfig) -> Value {
    let base_url = site.url.trim_end_matches('/');

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.name,
        "legalName": site.legal_name,
        "url": site.url,
        "logo": format!("{base_url}/static/logo.svg"),
        "description": "AI Integration & Software Development Company",
        "foundingDate": site.founded.to_string(),
        "founder": {
            "@type": "Person",
            "name": site.founder,
        },
        "address": {
            "@type": "PostalAddress",
            "addressLocality": site.locality,
            "addressRegion": site.region,
            "addressCountry": site.country,
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "email": site.contact_email,
            "contactType": "customer service",
        },
        "sameAs": site.same_as,
    })
}

pub fn service(site: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "serviceType": "AI Integration & Development",
        "provider": {
            "@type": "Organization",
            "name": site.name,
        },
        "areaServed": "Worldwide",
        "description": "Custom AI integration, LLM solutions, and intelligent software development services.",
    })
}

// Serialized JSON is emitted unescaped inside <script>, so "</" must not appear.
fn script_safe(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
