//! Binary artifact planning
//!
//! Builds the ordered list of binary artifacts a target produces. The
//! primary launcher executable always comes first; the active platform
//! backend may append platform-mandated extras after it.

use crate::link_mode::LinkMode;
use crate::platform::Platform;
use crate::targets::TargetKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of binary artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryKind {
    Executable,
    DynamicLibrary,
    StaticLibrary,
}

/// One compiled/linked output unit of a target
///
/// Immutable once appended to the target's binary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySpec {
    /// Artifact kind
    pub kind: BinaryKind,
    /// Final output paths, one per architecture or sub-target
    pub output_paths: Vec<PathBuf>,
    /// Directory for object files and other intermediates
    pub intermediate_dir: PathBuf,
    /// Modules compiled into this binary
    pub module_names: Vec<String>,
    /// Whether the import library is produced as a separate artifact
    pub creates_import_library: bool,
    /// Whether the binary exports symbols for other binaries to import
    pub allows_exports: bool,
}

impl BinarySpec {
    /// Check the artifact against the pass's link mode: monolithic output
    /// neither exports symbols nor splits off an import library
    pub fn is_consistent_with(&self, link_mode: LinkMode) -> bool {
        match link_mode {
            LinkMode::Monolithic => !self.creates_import_library && !self.allows_exports,
            LinkMode::Modular => true,
        }
    }
}

/// Build the target's primary launcher executable.
///
/// Modular binaries export symbols and split off their import library so
/// engine modules can link back against the executable; monolithic binaries
/// do neither.
pub fn build_primary_binary(
    kind: TargetKind,
    link_mode: LinkMode,
    output_paths: Vec<PathBuf>,
    intermediate_dir: PathBuf,
) -> BinarySpec {
    BinarySpec {
        kind: BinaryKind::Executable,
        output_paths,
        intermediate_dir,
        module_names: kind
            .bootstrap_modules()
            .iter()
            .map(|m| m.to_string())
            .collect(),
        creates_import_library: !link_mode.is_monolithic(),
        allows_exports: !link_mode.is_monolithic(),
    }
}

/// Platform backend collaborator.
///
/// Invoked exactly once per pass, after the primary artifact is in place,
/// to append platform-mandated binaries (launcher shims and the like). The
/// resolver treats appended artifacts as opaque; only their position after
/// the primary is guaranteed.
pub trait PlatformBackend {
    fn setup_binaries(&self, platform: Platform, binaries: &mut Vec<BinarySpec>);
}

/// Backend for platforms that mandate no extra binaries
pub struct NullBackend;

impl PlatformBackend for NullBackend {
    fn setup_binaries(&self, _platform: Platform, _binaries: &mut Vec<BinarySpec>) {}
}
