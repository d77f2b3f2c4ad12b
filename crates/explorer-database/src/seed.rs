//! Sample folder hierarchy and files used for demos and local development.

use tracing::info;

use explorer_core::result::AppResult;
use explorer_core::traits::repository::Repository;
use explorer_entity::{File, Folder};

use crate::store::{FolderStore, Stores};

/// Counts of records written by [`seed_sample_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub folders: usize,
    pub files: usize,
}

const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Remove every folder (and with it every file), then write the sample
/// hierarchy.
pub async fn seed_sample_data(stores: &Stores) -> AppResult<SeedSummary> {
    clear(stores).await?;

    let root = Folder::new("Root", None);
    let documents = Folder::new("Documents", Some(&root)).with_path("/documents");
    let pictures = Folder::new("Pictures", Some(&root)).with_path("/pictures");
    let music = Folder::new("Music", Some(&root)).with_path("/music");
    let projects = Folder::new("Projects", Some(&documents)).with_path("/documents/projects");
    let work = Folder::new("Work", Some(&documents)).with_path("/documents/work");
    let vacation = Folder::new("Vacation", Some(&pictures)).with_path("/pictures/vacation");
    let vue = Folder::new("Vue Projects", Some(&projects)).with_path("/documents/projects/vue");
    let react =
        Folder::new("React Projects", Some(&projects)).with_path("/documents/projects/react");

    // Parents first so every parent reference resolves on save.
    let folders = [
        &root, &documents, &pictures, &music, &projects, &work, &vacation, &vue, &react,
    ];
    for folder in folders {
        stores.folders.save(folder).await?;
    }

    let files = [
        File::new("readme.txt", root.id, 1024, "text/plain"),
        File::new("welcome.md", root.id, 2048, "text/markdown"),
        File::new("project-plan.pdf", projects.id, 2_048_576, "application/pdf"),
        File::new("requirements.docx", projects.id, 1_048_576, DOCX),
        File::new("budget.xlsx", work.id, 524_288, XLSX),
        File::new("vacation-photo-1.jpg", pictures.id, 5_242_880, "image/jpeg"),
        File::new("screenshot.png", pictures.id, 2_097_152, "image/png"),
        File::new("beach.jpg", vacation.id, 6_291_456, "image/jpeg"),
        File::new("song-1.mp3", music.id, 8_388_608, "audio/mpeg"),
        File::new("song-2.mp3", music.id, 9_437_184, "audio/mpeg"),
    ];
    for file in &files {
        stores.files.save(file).await?;
    }

    let summary = SeedSummary {
        folders: folders.len(),
        files: files.len(),
    };
    info!(folders = summary.folders, files = summary.files, "Seeded sample data");
    Ok(summary)
}

async fn clear(stores: &Stores) -> AppResult<()> {
    let existing = stores.folders.find_all().await?;
    let mut removed = 0usize;
    for folder in existing.iter().filter(|f| f.is_root()) {
        if stores.folders.delete(folder.id).await? {
            removed += 1;
        }
    }
    // Anything not reachable from a root (orphans, cycles) goes too.
    for folder in &existing {
        if stores.folders.delete(folder.id).await? {
            removed += 1;
        }
    }
    if removed > 0 {
        info!(removed, "Cleared existing folders before seeding");
    }
    Ok(())
}
