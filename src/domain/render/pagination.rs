use crate::domain::listing::paginator::PageInfo;

fn page_button(page: usize, label: &str, disabled: bool, active: bool) -> String {
    let mut classes = String::from("page-item");
    if disabled {
        classes.push_str(" disabled");
    }
    if active {
        classes.push_str(" active");
    }
    format!(
        r##"<li class="{}"><a class="page-link" href="#" data-page="{}">{}</a></li>"##,
        classes, page, label
    )
}

const ELLIPSIS: &str =
    r#"<li class="page-item disabled"><span class="page-link">...</span></li>"#;

/// Render the page-navigation widget: prev/next (disabled at the
/// boundaries), the windowed page numbers, and first/last buttons with
/// ellipsis placeholders when the window does not reach them.
pub fn render_pagination(info: &PageInfo) -> String {
    if info.total_pages <= 1 {
        return String::new();
    }

    let mut html = String::new();

    html.push_str(&page_button(
        info.current_page.saturating_sub(1).max(1),
        r#"<i class="fas fa-chevron-left"></i>"#,
        !info.has_prev,
        false,
    ));

    if info.show_first {
        html.push_str(&page_button(1, "1", false, false));
        if info.leading_ellipsis {
            html.push_str(ELLIPSIS);
        }
    }

    for &page in &info.window_pages {
        html.push_str(&page_button(
            page,
            &page.to_string(),
            false,
            page == info.current_page,
        ));
    }

    if info.show_last {
        if info.trailing_ellipsis {
            html.push_str(ELLIPSIS);
        }
        html.push_str(&page_button(
            info.total_pages,
            &info.total_pages.to_string(),
            false,
            false,
        ));
    }

    html.push_str(&page_button(
        std::cmp::min(info.current_page + 1, info.total_pages),
        r#"<i class="fas fa-chevron-right"></i>"#,
        !info.has_next,
        false,
    ));

    html
}
