use crate::config::site_config::SiteConfig;
use crate::core::state::{PageView, ReadyPage};
use chrono::Datelike;

// 整頁樣式。深色漸層背景、漂浮光球、hero 標題的 glitch 效果。
const PAGE_STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: 'Segoe UI', system-ui, sans-serif;
  background: linear-gradient(135deg, #020617, #2e1065 55%, #0f172a);
  color: #f8fafc;
  min-height: 100vh;
  overflow-x: hidden;
}
.orb {
  position: fixed;
  border-radius: 50%;
  opacity: 0.2;
  filter: blur(2px);
  pointer-events: none;
  animation: float 6s ease-in-out infinite;
}
.orb-1 { top: 5rem; left: 5rem; width: 8rem; height: 8rem; background: linear-gradient(90deg, #22d3ee, #a855f7); }
.orb-2 { top: 15rem; right: 8rem; width: 6rem; height: 6rem; background: linear-gradient(90deg, #f472b6, #3b82f6); animation-delay: 2s; }
.orb-3 { bottom: 10rem; left: 25%; width: 5rem; height: 5rem; background: linear-gradient(90deg, #4ade80, #06b6d4); animation-delay: 4s; }
.orb-4 { bottom: 5rem; right: 5rem; width: 4rem; height: 4rem; background: linear-gradient(90deg, #facc15, #f472b6); animation-delay: 1s; }
@keyframes float {
  0%, 100% { transform: translate(-10px, -20px) scale(1); }
  50% { transform: translate(10px, 20px) scale(1.1); }
}
section { padding: 8rem 1.5rem; max-width: 72rem; margin: 0 auto; position: relative; }
.hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; text-align: center; }
.badge-pill {
  display: inline-block; margin: 0 auto 2rem; padding: 0.5rem 1.5rem;
  border: 1px solid rgba(168, 85, 247, 0.3); border-radius: 9999px;
  background: linear-gradient(90deg, rgba(168, 85, 247, 0.2), rgba(34, 211, 238, 0.2));
  color: #67e8f9; font-size: 0.875rem;
  animation: pulse-glow 3s infinite;
}
@keyframes pulse-glow {
  0%, 100% { box-shadow: 0 0 20px rgba(147, 51, 234, 0.3); }
  50% { box-shadow: 0 0 40px rgba(59, 130, 246, 0.3); }
}
.hero h1 {
  font-size: 4.5rem;
  background: linear-gradient(90deg, #22d3ee, #c084fc, #f472b6);
  -webkit-background-clip: text; background-clip: text; color: transparent;
}
.hero h1:hover { animation: glitch 0.3s linear; }
@keyframes glitch {
  25% { text-shadow: 2px 0 0 #ff0080, -2px 0 0 #00ffff; }
  75% { text-shadow: -2px 0 0 #ff0080, 2px 0 0 #00ffff; }
}
.hero .title { margin-top: 1.5rem; font-size: 1.75rem; font-weight: 300; color: #cbd5e1; }
.hero .actions { margin-top: 3rem; display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.button {
  display: inline-block; padding: 0.75rem 2rem; border-radius: 9999px;
  color: #fff; text-decoration: none; font-weight: 500;
  background: linear-gradient(90deg, #9333ea, #0891b2);
}
.button.outline {
  background: transparent; border: 1px solid rgba(168, 85, 247, 0.5); color: #d8b4fe;
}
h2 {
  text-align: center; font-size: 3rem; margin-bottom: 4rem;
  background: linear-gradient(90deg, #22d3ee, #c084fc);
  -webkit-background-clip: text; background-clip: text; color: transparent;
}
.card {
  background: linear-gradient(135deg, rgba(30, 41, 59, 0.5), rgba(88, 28, 135, 0.5));
  border: 1px solid rgba(168, 85, 247, 0.3); border-radius: 0.75rem;
  backdrop-filter: blur(12px); padding: 2rem; margin-bottom: 2rem;
}
.card h3 { font-size: 1.5rem; }
.card .company { color: #67e8f9; font-weight: 500; margin: 0.25rem 0; }
.card .years { color: #d8b4fe; font-size: 0.875rem; float: right; }
.card p { color: #cbd5e1; line-height: 1.7; margin-top: 1rem; }
.experience-entry { max-width: 42rem; }
.experience-entry.left { margin-right: auto; }
.experience-entry.right { margin-left: auto; }
.skills-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr)); gap: 1.5rem; }
.skill-badge {
  padding: 1rem 1.5rem; text-align: center; border-radius: 0.5rem;
  border: 1px solid rgba(74, 222, 128, 0.3); color: #86efac;
  background: linear-gradient(90deg, rgba(51, 65, 85, 0.5), rgba(22, 101, 52, 0.5));
}
.project-link { float: right; }
.contact { text-align: center; }
.contact p { color: #cbd5e1; font-size: 1.25rem; max-width: 42rem; margin: 0 auto 3rem; }
footer {
  padding: 3rem 1.5rem; border-top: 1px solid rgba(168, 85, 247, 0.3);
  display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem;
  color: #94a3b8;
}
footer .remote { color: #d8b4fe; font-size: 0.875rem; }
.placeholder {
  min-height: 100vh; display: flex; align-items: center; justify-content: center;
  font-size: 1.25rem; color: #cbd5e1;
}
.placeholder.error { color: #fca5a5; }
"#;

/// 將渲染決策轉為完整 HTML 文件。純函數，呼叫端決定寫到哪裡。
pub fn render_page(view: &PageView<'_>, site: &SiteConfig) -> String {
    match view {
        PageView::Loading => placeholder_document("Loading", "Loading data...", false),
        PageView::Error(message) => {
            placeholder_document("Error", &format!("Error: {}", message), true)
        }
        PageView::Pending => placeholder_document("Loading", "Loading content...", false),
        PageView::Ready(page) => ready_document(page, site),
    }
}

fn placeholder_document(title: &str, message: &str, error: bool) -> String {
    let class = if error {
        "placeholder error"
    } else {
        "placeholder"
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n\
         <div class=\"{}\">{}</div>\n</body>\n</html>\n",
        escape_html(title),
        PAGE_STYLE,
        class,
        escape_html(message)
    )
}

fn ready_document(page: &ReadyPage<'_>, site: &SiteConfig) -> String {
    let mut body = String::new();
    body.push_str(
        "<div class=\"orb orb-1\"></div>\n<div class=\"orb orb-2\"></div>\n\
         <div class=\"orb orb-3\"></div>\n<div class=\"orb orb-4\"></div>\n",
    );
    hero_section(&mut body, page, site);
    about_section(&mut body, page);
    experience_section(&mut body, page);
    skills_section(&mut body, page);
    projects_section(&mut body, page);
    contact_section(&mut body, site);
    footer_section(&mut body, page);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(&site.page_title_for(&page.profile.name)),
        PAGE_STYLE,
        body
    )
}

fn hero_section(body: &mut String, page: &ReadyPage<'_>, site: &SiteConfig) {
    body.push_str(&format!(
        "<section class=\"hero\">\n\
         <span class=\"badge-pill\">{}</span>\n\
         <h1>{}</h1>\n\
         <div class=\"title\">{}</div>\n\
         <div class=\"actions\">\n\
         <a class=\"button\" href=\"#contact\">Contact Me</a>\n\
         <a class=\"button outline\" href=\"#projects\">View Projects</a>\n\
         </div>\n\
         </section>\n",
        escape_html(site.availability_text()),
        escape_html(&page.profile.name),
        escape_html(&page.profile.title),
    ));
}

fn about_section(body: &mut String, page: &ReadyPage<'_>) {
    body.push_str(&format!(
        "<section id=\"about\">\n<h2>About Me</h2>\n\
         <div class=\"card\"><p>{}</p></div>\n</section>\n",
        escape_html(&page.profile.summary)
    ));
}

fn experience_section(body: &mut String, page: &ReadyPage<'_>) {
    body.push_str("<section id=\"experience\">\n<h2>Experience</h2>\n");
    for (index, entry) in page.experience.iter().enumerate() {
        // 與原始版面相同，左右交錯排列
        let side = if index % 2 == 0 { "left" } else { "right" };
        body.push_str(&format!(
            "<div class=\"card experience-entry {}\">\n\
             <span class=\"years\">{}</span>\n\
             <h3>{}</h3>\n\
             <div class=\"company\">{}</div>\n\
             <p>{}</p>\n\
             </div>\n",
            side,
            escape_html(&entry.years),
            escape_html(&entry.role),
            escape_html(&entry.company),
            escape_html(&entry.description),
        ));
    }
    body.push_str("</section>\n");
}

fn skills_section(body: &mut String, page: &ReadyPage<'_>) {
    body.push_str("<section id=\"skills\">\n<h2>Skills</h2>\n<div class=\"card\">\n<div class=\"skills-grid\">\n");
    for skill in page.skills {
        body.push_str(&format!(
            "<div class=\"skill-badge\">{}</div>\n",
            escape_html(skill)
        ));
    }
    body.push_str("</div>\n</div>\n</section>\n");
}

fn projects_section(body: &mut String, page: &ReadyPage<'_>) {
    body.push_str("<section id=\"projects\">\n<h2>Projects</h2>\n");
    for project in page.projects {
        body.push_str(&format!(
            "<div class=\"card\">\n\
             <a class=\"button outline project-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View</a>\n\
             <h3>{}</h3>\n\
             <p>{}</p>\n\
             </div>\n",
            escape_html(&project.link),
            escape_html(&project.title),
            escape_html(&project.description),
        ));
    }
    body.push_str("</section>\n");
}

fn contact_section(body: &mut String, site: &SiteConfig) {
    body.push_str(&format!(
        "<section id=\"contact\" class=\"contact\">\n\
         <h2>{}</h2>\n\
         <p>{}</p>\n\
         <a class=\"button\" href=\"mailto:\">{}</a>\n\
         </section>\n",
        escape_html(site.contact_heading()),
        escape_html(site.contact_blurb()),
        escape_html(site.contact_cta()),
    ));
}

fn footer_section(body: &mut String, page: &ReadyPage<'_>) {
    let year = chrono::Local::now().year();
    body.push_str(&format!(
        "<footer>\n\
         <span>&copy; {} {}. Crafted with precision &amp; passion.</span>\n\
         <span class=\"remote\">Open to remote opportunities</span>\n\
         </footer>\n",
        year,
        escape_html(&page.profile.name),
    ));
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
