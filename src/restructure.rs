//! Restructure orchestration
//!
//! A [`Restructurer`] runs the fixed step sequence against one base path:
//! directory layout, component copies, utility copies, recursive media
//! copies, descriptor generation, documentation generation, and the legacy
//! directory report. Every step is idempotent and the whole run can be
//! repeated without changing the resulting tree.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::descriptors::{self, DeployDescriptor, PackageDescriptor, DEPLOY_FILE, PACKAGE_FILE};
use crate::error::RestageResult;
use crate::fs::{copy_if_exists, copy_tree, ensure_dir, write_text};
use crate::manifest::{
    CopySet, COMPONENT_SET, DIRECTORY_PLAN, LEGACY_DIRS, MEDIA_SOURCES, UTILITY_SET,
};
use crate::templates::{GITIGNORE, GITIGNORE_FILE, README, README_FILE, TECHNICAL_DOC, TECHNICAL_FILE};

/// Result of one fixed-list copy step
#[derive(Debug, Default, Clone, Serialize)]
pub struct CopyOutcome {
    /// File names copied to the destination
    pub copied: Vec<String>,
    /// File names absent at the source, skipped without error
    pub skipped: Vec<String>,
}

/// Everything one run did, in step order
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunReport {
    /// Directories ensured, relative to the base path
    pub directories: Vec<String>,
    pub components: CopyOutcome,
    pub utilities: CopyOutcome,
    /// Media files copied, as destination paths relative to the base path
    pub media: Vec<String>,
    /// Descriptor files written
    pub descriptors: Vec<String>,
    /// Documentation files written
    pub docs: Vec<String>,
    /// Legacy directories still present (reported, never deleted)
    pub legacy_present: Vec<String>,
}

/// Executes the restructure steps against a base path
#[derive(Debug, Clone)]
pub struct Restructurer {
    base: PathBuf,
}

impl Restructurer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Step 1: create the target directory layout
    pub fn create_directories(&self) -> RestageResult<Vec<String>> {
        let mut created = Vec::new();
        for (main_dir, subdirs) in DIRECTORY_PLAN {
            ensure_dir(&self.base.join(main_dir))?;
            created.push((*main_dir).to_string());
            for subdir in *subdirs {
                ensure_dir(&self.base.join(main_dir).join(subdir))?;
                created.push(format!("{main_dir}/{subdir}"));
            }
        }
        Ok(created)
    }

    /// Step 2: copy A-Frame components from the campus tour project
    pub fn copy_components(&self) -> RestageResult<CopyOutcome> {
        self.copy_set(&COMPONENT_SET)
    }

    /// Step 3: copy WebXR utility scripts from the samples project
    pub fn copy_utilities(&self) -> RestageResult<CopyOutcome> {
        self.copy_set(&UTILITY_SET)
    }

    fn copy_set(&self, set: &CopySet) -> RestageResult<CopyOutcome> {
        let mut outcome = CopyOutcome::default();
        let source_dir = self.base.join(set.source_dir);

        if set.requires_source_dir && !source_dir.is_dir() {
            outcome.skipped = set.files.iter().map(|f| (*f).to_string()).collect();
            return Ok(outcome);
        }

        let dest_dir = self.base.join(set.dest_dir);
        for file in set.files {
            let src = source_dir.join(file);
            if copy_if_exists(&src, &dest_dir.join(file))? {
                outcome.copied.push((*file).to_string());
            } else {
                outcome.skipped.push((*file).to_string());
            }
        }
        Ok(outcome)
    }

    /// Step 4: recursively relocate legacy media trees under `public/`
    pub fn copy_media(&self) -> RestageResult<Vec<String>> {
        let mut copied = Vec::new();
        for media in MEDIA_SOURCES {
            let relocated = copy_tree(
                &self.base.join(media.source_dir),
                &self.base.join(media.dest_dir),
            )?;
            for rel in relocated {
                copied.push(format!("{}/{}", media.dest_dir, rel.display()));
            }
        }
        Ok(copied)
    }

    /// Step 5: write the package and deployment descriptors
    pub fn write_descriptors(&self) -> RestageResult<Vec<String>> {
        write_text(
            &self.base.join(PACKAGE_FILE),
            &descriptors::render(&PackageDescriptor::default())?,
        )?;
        write_text(
            &self.base.join(DEPLOY_FILE),
            &descriptors::render(&DeployDescriptor::default())?,
        )?;
        Ok(vec![PACKAGE_FILE.to_string(), DEPLOY_FILE.to_string()])
    }

    /// Step 6: write the README, ignore file, and technical documentation
    pub fn write_docs(&self) -> RestageResult<Vec<String>> {
        write_text(&self.base.join(README_FILE), README)?;
        write_text(&self.base.join(GITIGNORE_FILE), GITIGNORE)?;
        // write_text creates docs/ first
        write_text(&self.base.join(TECHNICAL_FILE), TECHNICAL_DOC)?;
        Ok(vec![
            README_FILE.to_string(),
            GITIGNORE_FILE.to_string(),
            TECHNICAL_FILE.to_string(),
        ])
    }

    /// Step 7: report legacy directories that are now redundant
    ///
    /// Deletion is out of scope for this tool; callers get the list and
    /// nothing on disk changes.
    pub fn legacy_directories(&self) -> Vec<String> {
        LEGACY_DIRS
            .iter()
            .filter(|dir| self.base.join(dir).is_dir())
            .map(|dir| (*dir).to_string())
            .collect()
    }

    /// Run all steps in order and collect the report
    pub fn run(&self) -> RestageResult<RunReport> {
        Ok(RunReport {
            directories: self.create_directories()?,
            components: self.copy_components()?,
            utilities: self.copy_utilities()?,
            media: self.copy_media()?,
            descriptors: self.write_descriptors()?,
            docs: self.write_docs()?,
            legacy_present: self.legacy_directories(),
        })
    }
}
