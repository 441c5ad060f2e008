use crate::config::site_config::SiteConfig;
use crate::core::state::{PageView, ReadyPage};
use chrono::Datelike;

/// 終端機版本的頁面輸出，與 HTML 渲染共用同一份渲染決策。
pub fn render_page(view: &PageView<'_>, site: &SiteConfig) -> String {
    match view {
        PageView::Loading => "Loading data...".to_string(),
        PageView::Error(message) => format!("Error: {}", message),
        PageView::Pending => "Loading content...".to_string(),
        PageView::Ready(page) => ready_text(page, site),
    }
}

fn ready_text(page: &ReadyPage<'_>, site: &SiteConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n", page.profile.name, page.profile.title));
    out.push_str(&format!("[{}]\n", site.availability_text()));

    out.push_str("\n== About Me ==\n");
    out.push_str(&format!("{}\n", page.profile.summary));

    out.push_str("\n== Experience ==\n");
    for entry in page.experience {
        out.push_str(&format!(
            "* {} @ {} ({})\n    {}\n",
            entry.role, entry.company, entry.years, entry.description
        ));
    }

    out.push_str("\n== Skills ==\n");
    let badges: Vec<String> = page.skills.iter().map(|s| format!("[{}]", s)).collect();
    out.push_str(&format!("{}\n", badges.join(" ")));

    out.push_str("\n== Projects ==\n");
    for project in page.projects {
        out.push_str(&format!(
            "* {} -> {}\n    {}\n",
            project.title, project.link, project.description
        ));
    }

    out.push_str(&format!("\n== {} ==\n{}\n", site.contact_heading(), site.contact_blurb()));

    let year = chrono::Local::now().year();
    out.push_str(&format!(
        "\n(c) {} {}. Crafted with precision & passion.\n",
        year, page.profile.name
    ));

    out
}
