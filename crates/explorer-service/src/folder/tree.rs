//! Flat folder list to nested tree reconstruction.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use explorer_entity::{Folder, FolderNode, FolderTree};

/// Siblings grouped by parent id, each group ordered by name.
fn index_by_parent(folders: &[Folder]) -> HashMap<Option<Uuid>, Vec<&Folder>> {
    let mut index: HashMap<Option<Uuid>, Vec<&Folder>> = HashMap::new();
    for folder in folders {
        index.entry(folder.parent_id).or_default().push(folder);
    }
    for siblings in index.values_mut() {
        siblings.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    }
    index
}

fn children_of<'a>(
    index: &'a HashMap<Option<Uuid>, Vec<&'a Folder>>,
    parent_id: Option<Uuid>,
) -> std::slice::Iter<'a, &'a Folder> {
    index.get(&parent_id).map(Vec::as_slice).unwrap_or(&[]).iter()
}

struct Frame<'a> {
    folder: &'a Folder,
    pending: std::slice::Iter<'a, &'a Folder>,
    built: Vec<FolderNode>,
}

/// Build the folder tree from every folder record.
///
/// Root nodes are the folders without a parent. Folders whose parent is
/// missing (and folders caught in a parent cycle) are reachable from no
/// root and are left out. Every node starts collapsed. The input is not
/// modified and order does not matter. Assembly uses an explicit stack,
/// so arbitrarily deep chains are fine.
pub fn build_tree(folders: &[Folder]) -> FolderTree {
    let index = index_by_parent(folders);

    let mut placed: HashSet<Uuid> = HashSet::with_capacity(folders.len());
    let mut roots = Vec::new();

    for &root in children_of(&index, None) {
        if !placed.insert(root.id) {
            continue;
        }
        let mut stack = vec![Frame {
            folder: root,
            pending: children_of(&index, Some(root.id)),
            built: Vec::new(),
        }];

        while let Some(top) = stack.last_mut() {
            if let Some(&child) = top.pending.next() {
                if placed.insert(child.id) {
                    stack.push(Frame {
                        folder: child,
                        pending: children_of(&index, Some(child.id)),
                        built: Vec::new(),
                    });
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let node = FolderNode {
                folder: done.folder.clone(),
                is_open: false,
                children: done.built,
            };
            match stack.last_mut() {
                Some(parent) => parent.built.push(node),
                None => roots.push(node),
            }
        }
    }

    FolderTree {
        roots,
        total_folders: placed.len() as u64,
    }
}

/// Folders whose parent id does not resolve to any folder in `folders`.
pub fn find_orphans(folders: &[Folder]) -> Vec<&Folder> {
    let ids: HashSet<Uuid> = folders.iter().map(|f| f.id).collect();
    folders
        .iter()
        .filter(|f| f.parent_id.is_some_and(|p| !ids.contains(&p)))
        .collect()
}
