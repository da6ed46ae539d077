use super::{escape_html, format_date};
use crate::domain::listing::model::ListingItem;

/// Render one listing item as a post-card fragment. Every externally
/// sourced text field is escaped; a missing thumbnail becomes a placeholder
/// glyph rather than an empty `src`.
pub fn render_card(item: &ListingItem) -> String {
    let title = escape_html(&item.title);
    let author = escape_html(&item.author);
    let excerpt = escape_html(&item.summary_text);
    let href = escape_html(&item.link.href());
    let target = if item.link.is_external() {
        r#" target="_blank" rel="noopener""#
    } else {
        ""
    };

    let image_html = match item.thumbnail_url.as_deref() {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="post-card-image" loading="lazy">"#,
            escape_html(url),
            title
        ),
        None => concat!(
            r#"<div class="post-card-image post-card-placeholder">"#,
            r#"<i class="fas fa-newspaper fa-4x text-muted"></i>"#,
            "</div>"
        )
        .to_string(),
    };

    let mut meta = format!(r#"<i class="fas fa-user"></i> {}"#, author);
    if let Some(date) = &item.published_at {
        meta.push_str(&format!(
            r#"<span class="mx-2">|</span><i class="fas fa-calendar"></i> {}"#,
            format_date(date)
        ));
    }
    if let Some(views) = item.views.filter(|v| *v > 0) {
        meta.push_str(&format!(
            r#"<span class="mx-2">|</span><i class="fas fa-eye"></i> {}"#,
            views
        ));
    }

    let mut extras = String::new();
    if let Some(region) = &item.region {
        extras.push_str(&format!(
            r#"<span class="badge bg-primary mb-2">{}</span>"#,
            escape_html(region)
        ));
    }
    if let Some(address) = &item.address {
        extras.push_str(&format!(
            r#"<div class="post-card-location"><i class="fas fa-map-marker-alt me-2"></i>{}</div>"#,
            escape_html(address)
        ));
    }
    if let Some(tel) = &item.tel {
        extras.push_str(&format!(
            r#"<div class="post-card-tel"><i class="fas fa-phone me-2"></i>{}</div>"#,
            escape_html(tel)
        ));
    }

    format!(
        r#"<article class="post-card">{image}<div class="post-card-body"><a href="{slug}.html" class="post-category">{category}</a><a href="{href}"{target} class="post-title">{title}</a><div class="post-meta">{meta}</div>{extras}<p class="post-excerpt">{excerpt}</p><a href="{href}"{target} class="read-more">원문 보기 <i class="fas fa-arrow-right"></i></a></div></article>"#,
        image = image_html,
        slug = item.category.slug(),
        category = escape_html(item.category.name()),
        href = href,
        target = target,
        title = title,
        meta = meta,
        extras = extras,
        excerpt = excerpt,
    )
}
