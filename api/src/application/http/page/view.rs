use std::fmt::Write as _;

use axum::response::Html;
use base64::{Engine as _, engine::general_purpose};
use calorie_tracker_core::domain::{
    food_analysis::entities::AnalysisOutcome,
    image::entities::{ImageFormat, ImageSource, SelectedImage},
    session::entities::Session,
};

const STYLE: &str = r#"
    body { background-color: #111; color: #eee; font-family: 'Arial', sans-serif; margin: 0; }
    main { max-width: 720px; margin: 0 auto; padding: 24px; }
    .main-header { font-size: 2.5em; font-weight: bold; text-align: center; margin-bottom: 20px; }
    .tabs > input { display: none; }
    .tabs > label { display: inline-block; padding: 8px 16px; cursor: pointer; border-bottom: 2px solid transparent; }
    .tabs > input:checked + label { border-bottom-color: #e44; }
    .tab-panel { display: none; padding: 16px 0; }
    #tab-capture:checked ~ #panel-capture, #tab-upload:checked ~ #panel-upload { display: block; }
    .response-text { font-size: 1.1em; line-height: 1.5; text-align: justify; white-space: pre-wrap; }
    .info { background: #1c2b3a; padding: 12px 16px; border-radius: 6px; }
    .error { background: #3a1c1c; padding: 12px 16px; border-radius: 6px; white-space: pre-wrap; }
    figure { margin: 0 0 20px 0; text-align: center; }
    img { max-width: 100%; border-radius: 10px; box-shadow: 0px 4px 6px rgba(0, 0, 0, 0.1); }
"#;

/// Renders the whole page for `session`. `notice` is an error raised by the
/// current request that did not change the session.
pub fn render_page(root_path: &str, session: &Session, notice: Option<&str>) -> Html<String> {
    let selected = session.selected_image.as_ref();
    let upload_active = selected.is_some_and(|image| image.source == ImageSource::Upload);

    let mut body = String::new();
    body.push_str(r#"<div class="main-header">Calorie Tracker: AI-Powered Food Insights</div>"#);
    body.push_str(&render_tabs(root_path, upload_active));

    if let Some(notice) = notice {
        body.push_str(&render_error(notice));
    }

    match selected {
        Some(image) => {
            body.push_str(&render_preview(image));
            body.push_str(&render_results(root_path, session.last_outcome.as_ref()));
        }
        None => {
            body.push_str(&render_outcome(&AnalysisOutcome::no_selection()));
        }
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Calorie Tracker</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🍎</text></svg>">
<style>{STYLE}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#
    ))
}

fn render_tabs(root_path: &str, upload_active: bool) -> String {
    let (capture_checked, upload_checked) = if upload_active {
        ("", " checked")
    } else {
        (" checked", "")
    };

    format!(
        r#"<div class="tabs">
<input type="radio" name="tab" id="tab-capture"{capture_checked}><label for="tab-capture">📷 Capture Image</label>
<input type="radio" name="tab" id="tab-upload"{upload_checked}><label for="tab-upload">📁 Upload Image</label>
<section class="tab-panel" id="panel-capture">
<h4>Use your camera to take a picture</h4>
<form method="post" action="{root}/images/capture" enctype="multipart/form-data">
<label>Take a picture of your food <input type="file" name="image" accept="image/*" capture="environment" onchange="this.form.submit()"></label>
<noscript><button type="submit">Use picture</button></noscript>
</form>
</section>
<section class="tab-panel" id="panel-upload">
<h4>Browse and upload an image from your device</h4>
<form method="post" action="{root}/images/upload" enctype="multipart/form-data">
<label>Choose an image... <input type="file" name="image" accept=".jpg,.jpeg,.png,image/jpeg,image/png" onchange="this.form.submit()"></label>
<noscript><button type="submit">Upload</button></noscript>
</form>
</section>
</div>
"#,
        root = escape_html(root_path),
    )
}

fn render_preview(image: &SelectedImage) -> String {
    // Bytes the browser cannot decode get no preview; the results region
    // carries the processing error instead.
    let Some(format) = ImageFormat::sniff(&image.data) else {
        return String::new();
    };

    format!(
        r#"<figure><img src="data:{};base64,{}" alt="Selected Image"><figcaption>Selected Image</figcaption></figure>
"#,
        format.mime_type(),
        general_purpose::STANDARD.encode(&image.data)
    )
}

fn render_results(root_path: &str, outcome: Option<&AnalysisOutcome>) -> String {
    let mut html = String::new();

    if let Some(outcome) = outcome {
        html.push_str(&render_outcome(outcome));
    }

    let _ = write!(
        html,
        r#"<form method="post" action="{}/analysis"><button type="submit">Analyze again</button></form>
"#,
        escape_html(root_path)
    );

    html
}

fn render_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::NoSelection { message } => {
            format!("<div class=\"info\">{}</div>\n", escape_html(message))
        }
        AnalysisOutcome::Completed { text } => format!(
            "<h3>Nutritional Analysis</h3>\n<div class=\"response-text\">{}</div>\n",
            escape_html(text)
        ),
        AnalysisOutcome::Failed { message } => render_error(message),
    }
}

fn render_error(message: &str) -> String {
    format!("<div class=\"error\">Error: {}</div>\n", escape_html(message))
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
