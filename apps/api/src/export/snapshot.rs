//! Snapshot exporter: the mounted VisualTree wrapped in a standalone page.

use thiserror::Error;

use crate::export::{artifact_file_name, Artifact, HTML_CONTENT_TYPE};
use crate::layout::tree::escape_text;
use crate::layout::VisualTree;

const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700\
                          &family=Merriweather:wght@300;400;700&display=swap";

const BOOTSTRAP_CSS: &str = "\
*,*::before,*::after{box-sizing:border-box}
html,body{margin:0;padding:0}
body{background:#fff;color:#0f172a;font-family:'Inter',sans-serif;\
-webkit-print-color-adjust:exact;print-color-adjust:exact}
h1,h2,h3,h4,p,ul{margin-top:0}
a{color:inherit}
img{display:block;max-width:100%}";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Nothing to export: no preview is mounted")]
    NothingMounted,
}

/// Builds the standalone HTML artifact from whatever tree is mounted.
///
/// Photos are already data URLs inside the tree, so the output needs nothing
/// beyond the remote font stylesheet.
pub fn export_snapshot(
    mounted: Option<&VisualTree>,
    full_name: &str,
) -> Result<Artifact, SnapshotError> {
    let tree = mounted.ok_or(SnapshotError::NothingMounted)?;
    let html = snapshot_document(tree, full_name);
    Ok(Artifact {
        file_name: artifact_file_name(full_name, "html"),
        content_type: HTML_CONTENT_TYPE,
        bytes: html.into_bytes(),
    })
}

fn snapshot_document(tree: &VisualTree, full_name: &str) -> String {
    let fonts = FONTS_HREF.replace('&', "&amp;");
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - CV</title>\n\
         <link href=\"{fonts}\" rel=\"stylesheet\">\n\
         <style>\n{BOOTSTRAP_CSS}\n</style>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape_text(full_name),
        body = tree.to_html(),
    )
}
