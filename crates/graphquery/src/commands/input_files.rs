use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The files found beneath a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct InputFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<anyhow::Error>,
}

/// Normalizes extension args so that both `graphql` and `.graphql` work.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_owned())
        .collect()
}

/// Recursively collects every file at or under `roots` whose extension is in
/// `exts`.
///
/// A single file root is always included, even when its extension doesn't
/// match: naming a file explicitly is taken as intent to process it.
pub(crate) fn collect(roots: &[PathBuf], exts: &HashSet<String>) -> InputFiles {
    log::debug!("Scanning {} input paths...", roots.len());
    let mut found = InputFiles::default();

    for root in roots {
        if root.is_file() {
            push_canonical(&mut found, root);
            continue;
        }

        for entry in WalkDir::new(root.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {root:#?}."
                    );
                    found.errors.push(e.into());
                    continue;
                },
            };

            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }

            let matches_ext = path
                .extension()
                .is_some_and(|ext| exts.contains(ext.to_string_lossy().as_ref()));
            if matches_ext {
                log::trace!("Found GraphQL file at {path:#?}.");
                push_canonical(&mut found, path);
            } else {
                log::trace!("Skipping non-GraphQL file: {path:#?}.");
                found.num_skipped += 1;
            }
        }
    }

    log::debug!("Found {} GraphQL files.", found.paths.len());
    found
}

fn push_canonical(found: &mut InputFiles, path: &Path) {
    match std::fs::canonicalize(path) {
        Ok(path) => found.paths.push(path),
        Err(e) => found.errors.push(
            anyhow::Error::new(e).context(format!("failed to resolve {}", path.display())),
        ),
    }
}
