use super::escape_html;
use crate::domain::sidebar::CategoryEntry;

/// Render the category sidebar list. Independent of the listing filter;
/// counts come straight from the category document.
pub fn render_sidebar(categories: &[CategoryEntry]) -> String {
    let mut html = String::new();
    for category in categories {
        html.push_str(&format!(
            r#"<li class="mb-2"><a href="{slug}.html" class="text-decoration-none"><i class="fas {icon} me-2"></i>{name}<span class="float-end badge bg-secondary">{count}</span></a></li>"#,
            slug = escape_html(&category.slug),
            icon = escape_html(&category.icon),
            name = escape_html(&category.name),
            count = category.count,
        ));
    }
    html
}
