use crate::core::models::{EngagementDirs, ReportPaths, REPORT_CSS_FILE};
use crate::utils::fs::write_file;
use anyhow::Result;
use minijinja::{context, Environment};

pub const STYLESHEET: &str = "pre { font-family: monospace; white-space: pre-wrap; }";

// Scan text goes in through `safe`: it is embedded verbatim, markup included.
const REPORT_TEMPLATE: &str = r#"
<html>
<head>
    <link rel='stylesheet' type='text/css' href='{{ stylesheet }}'>
</head>
<body>
    <br>
    <h1 style='text-align:center;'>{{ title }}</h1>
    <div style='display: block; margin-left: auto; width: 80%;'>
        <pre>{{ output|safe }}</pre>
    </div>
</body>
</html>
"#;

pub fn render_html(title: &str, output: &str) -> Result<String> {
    let env = Environment::new();
    let template = env.template_from_str(REPORT_TEMPLATE)?;
    let rendered = template.render(context! {
        stylesheet => REPORT_CSS_FILE,
        title => title,
        output => output,
    })?;
    Ok(rendered)
}

/// Write the HTML page and its stylesheet next to the scan output,
/// replacing whatever a previous run left there.
pub fn write_report(dirs: &EngagementDirs, title: &str, output: &str) -> Result<ReportPaths> {
    let paths = ReportPaths {
        html: dirs.report_html(),
        css: dirs.report_css(),
    };

    let html = render_html(title, output)?;
    write_file(&paths.html, html.as_bytes())?;
    write_file(&paths.css, STYLESHEET.as_bytes())?;

    tracing::info!("Report written to {:?}", paths.html);
    Ok(paths)
}
