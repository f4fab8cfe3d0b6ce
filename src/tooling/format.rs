//! Text formatting for tree and file listings.

use crate::error::ApiError;
use crate::file::FileHandle;
use crate::fs::FileSystem;
use crate::tree::DirectoryNode;
use chrono::{DateTime, Local};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Render a tree with box-drawing connectors, directories first.
pub fn format_tree_text(node: &DirectoryNode) -> String {
    let mut out = format!("{}\n", node.path().display());
    write_children(node, "", &mut out);
    out.push_str(&format!(
        "\n{} directories, {} files\n",
        node.total_directories(),
        node.total_files()
    ));
    out
}

fn write_children(node: &DirectoryNode, prefix: &str, out: &mut String) {
    let total = node.subdirectories().len() + node.files().len();
    let mut index = 0;
    for dir in node.subdirectories() {
        index += 1;
        let last = index == total;
        out.push_str(&format!(
            "{}{}{}/\n",
            prefix,
            connector(last),
            dir.path().display()
        ));
        let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        write_children(dir, &child_prefix, out);
    }
    for file in node.files() {
        index += 1;
        out.push_str(&format!("{}{}{}\n", prefix, connector(index == total), file.name()));
    }
}

fn connector(last: bool) -> &'static str {
    if last {
        "└── "
    } else {
        "├── "
    }
}

/// Table of files with size and modification time under a heading.
pub fn format_files_table(
    fs: &dyn FileSystem,
    title: &str,
    files: &[FileHandle],
) -> Result<String, ApiError> {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Ext", "Size", "Modified"]);
    for file in files {
        let meta = file.stat(fs)?;
        let modified = meta
            .modified
            .map(|t| {
                DateTime::<Local>::from(t)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            file.name(),
            file.ext().to_string(),
            meta.len.to_string(),
            modified,
        ]);
    }
    Ok(format!(
        "{}\n\n{}\n{} files",
        format_section_heading(title),
        table,
        files.len()
    ))
}
