//! Print the folder tree.

use explorer_core::error::AppError;
use explorer_entity::FolderNode;

use crate::output::{self, OutputFormat};

/// Execute the tree command
pub async fn execute(
    config_path: &str,
    server: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let explorer = crate::source::open(config, server).await?;
    let roots = explorer.get_folder_tree().await?;

    match format {
        OutputFormat::Json => output::print_item(&roots, format),
        OutputFormat::Table => {
            if roots.is_empty() {
                println!("No folders found.");
            }
            for line in render_tree(&roots) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// One line per folder, children indented under their parent.
pub fn render_tree(roots: &[FolderNode]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stack: Vec<(&FolderNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        lines.push(format!("{}{}/", "  ".repeat(depth), node.folder.name));
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_entity::Folder;

    #[test]
    fn test_render_tree_indents_children() {
        let root = Folder::new("Root", None);
        let docs = Folder::new("Documents", Some(&root));
        let work = Folder::new("Work", Some(&docs));
        let music = Folder::new("Music", Some(&root));

        let mut docs_node = FolderNode::new(docs);
        docs_node.children.push(FolderNode::new(work));
        let mut root_node = FolderNode::new(root);
        root_node.children = vec![docs_node, FolderNode::new(music)];

        assert_eq!(
            render_tree(&[root_node]),
            ["Root/", "  Documents/", "    Work/", "  Music/"]
        );
    }
}
