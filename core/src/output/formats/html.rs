use crate::error::ReportError;
use crate::filesystem::files::read_text_file;
use crate::query::engine::{cell, ReportSet};
use log::error;

/// Packaged template relative to the working directory
pub(crate) const DEFAULT_TEMPLATE: &str = "templates/report.html";

/// Token in the template that the rendered table replaces
const PLACEHOLDER: &str = "{{TABLE_CONTENT}}";

/// Output to `html` format. The rendered table is substituted into the
/// template at its placeholder token
pub(crate) fn html_format(report: &ReportSet, template: &str) -> Result<Vec<u8>, ReportError> {
    let template_result = read_text_file(template);
    let template_data = match template_result {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Could not read HTML template at {template}: {err:?}");
            return Err(ReportError::TemplateUnreadable(template.to_string()));
        }
    };

    if !template_data.contains(PLACEHOLDER) {
        error!("[output] HTML template at {template} has no {PLACEHOLDER} placeholder");
        return Err(ReportError::TemplateUnreadable(template.to_string()));
    }

    let document = template_data.replace(PLACEHOLDER, &render_table(report));
    Ok(document.into_bytes())
}

/// Render the record set as table markup with a fixed id so stylesheets can
/// target it
fn render_table(report: &ReportSet) -> String {
    let mut markup = String::from("<table id=\"task-report\">\n<thead>\n<tr>");
    for column in &report.columns {
        markup.push_str("<th>");
        markup.push_str(&html_escape(column));
        markup.push_str("</th>");
    }
    markup.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &report.rows {
        markup.push_str("<tr>");
        for column in &report.columns {
            markup.push_str("<td>");
            markup.push_str(&html_escape(&cell(row, column)));
            markup.push_str("</td>");
        }
        markup.push_str("</tr>\n");
    }

    markup.push_str("</tbody>\n</table>");
    markup
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
