use std::io::{self, Write};

use crossterm::{clipboard::CopyToClipboard, execute};

use crate::calendar::ProjectId;

pub fn share_link(base_url: &str, project: &ProjectId) -> String {
    format!("{}/share/{}", base_url.trim_end_matches('/'), project)
}

/// Write `text` to the system clipboard through the terminal (OSC 52).
pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, CopyToClipboard::to_clipboard_from(text))?;
    out.flush()
}
