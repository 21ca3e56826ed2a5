// ABOUTME: Printable document generation for the termconf application
// ABOUTME: Lays out every rendered section in a linear page with header, footer and QR code

use crate::conference::ConferenceConfig;
use crate::sections::SectionMap;

/// QR code library, loaded by reference rather than bundled
pub const QR_SCRIPT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/qrcodejs/1.0.0/qrcode.min.js";

const PRINT_CSS: &str = r#"
    body { font-family: Georgia, 'Times New Roman', serif; max-width: 800px; margin: 0 auto; padding: 2em; color: #111; line-height: 1.5; }
    .conference-header { text-align: center; border-bottom: 2px solid #111; margin-bottom: 2em; padding-bottom: 1em; }
    .conference-header h1 { margin: 0; font-size: 2.2em; }
    .conference-header .subtitle { font-size: 1.2em; margin: 0.3em 0; }
    .conference-header .meta { color: #444; margin: 0; }
    .program-section { page-break-before: always; break-before: page; }
    .program-section:first-of-type { page-break-before: auto; break-before: auto; }
    .program-section h2 { border-bottom: 1px solid #999; padding-bottom: 0.2em; }
    img { max-width: 100%; height: auto; }
    table { border-collapse: collapse; width: 100%; margin: 1em 0; }
    th, td { border: 1px solid #999; padding: 0.4em 0.6em; text-align: left; }
    tr:nth-child(even) td { background: #f2f2f2; }
    .print-footer { display: flex; justify-content: space-between; align-items: center; border-top: 1px solid #999; margin-top: 3em; padding-top: 1em; font-size: 0.85em; }
    #qrcode img, #qrcode canvas { width: 96px; height: 96px; }
    @media print {
        body { padding: 0 0 140px 0; }
        .print-footer { position: fixed; bottom: 0; left: 0; right: 0; background: #fff; margin: 0; padding: 0.5em 1em; }
        a { color: #111; text-decoration: none; }
    }
"#;

const ORIGIN_SCRIPT: &str = r#"
    document.addEventListener('DOMContentLoaded', function () {
        var link = document.getElementById('source-url');
        var origin = window.location.origin;
        if (link && origin && origin !== 'null') {
            link.href = origin;
            link.textContent = origin;
        }
        var target = link ? link.href : origin;
        if (typeof QRCode !== 'undefined') {
            new QRCode(document.getElementById('qrcode'), { text: target, width: 96, height: 96 });
        }
    });
"#;

/// Build the printable document.
///
/// Sections appear in map order, each headed by its navigation label (or
/// its raw key when no navigation entry matches).
pub fn generate_print_html(
    config: &ConferenceConfig,
    rendered: &SectionMap,
    generated_on: &str,
) -> String {
    let conference = &config.conference;
    let date_range = conference.date_range();
    let source_url = config.source_url();

    let mut doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"UTF-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    doc.push_str(&format!(
        "<title>{} - {}</title>\n",
        conference.title, conference.subtitle
    ));
    doc.push_str("<style>");
    doc.push_str(PRINT_CSS);
    doc.push_str("</style>\n");
    doc.push_str(&format!("<script src=\"{}\"></script>\n", QR_SCRIPT_URL));
    doc.push_str("</head>\n<body>\n");

    doc.push_str("<header class=\"conference-header\">\n");
    doc.push_str(&format!("<h1>{}</h1>\n", conference.title));
    doc.push_str(&format!("<p class=\"subtitle\">{}</p>\n", conference.subtitle));
    doc.push_str(&format!(
        "<p class=\"meta\">{} &middot; {}</p>\n",
        date_range, conference.location
    ));
    doc.push_str("</header>\n<main>\n");

    for (key, html) in rendered.iter() {
        doc.push_str("<section class=\"program-section\">\n");
        doc.push_str(&format!("<h2>{}</h2>\n", config.section_label(key)));
        doc.push_str(html);
        doc.push_str("\n</section>\n");
    }

    doc.push_str("</main>\n<footer class=\"print-footer\">\n<div class=\"footer-text\">\n");
    doc.push_str(&format!("<strong>{}</strong><br>\n", conference.title));
    doc.push_str(&format!("{}<br>\n", date_range));
    doc.push_str(&format!("Generated {}<br>\n", generated_on));
    doc.push_str(&format!(
        "<a id=\"source-url\" href=\"{url}\">{url}</a>\n",
        url = source_url
    ));
    doc.push_str("</div>\n<div id=\"qrcode\"></div>\n</footer>\n");

    doc.push_str("<script>");
    doc.push_str(ORIGIN_SCRIPT);
    doc.push_str("</script>\n</body>\n</html>");

    doc
}
