//! Global compile/link environment derivation
//!
//! Each target kind contributes a fixed patch of environment overrides on
//! top of a base environment. Patches are merged last-writer-wins per field;
//! merging the same patch twice leaves the environment unchanged.

use serde::{Deserialize, Serialize};

/// Environment overrides contributed by a target kind
///
/// `None` fields leave the base environment value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnvironmentPatch {
    /// Compile editor support
    pub build_editor: Option<bool>,
    /// Compile editor-only data paths
    pub build_editor_only_data: Option<bool>,
    /// Target runs against cooked (pre-processed) content only
    pub requires_cooked_data: Option<bool>,
    /// Compile against the full engine rather than standalone
    pub compile_against_engine: Option<bool>,
    /// Compile server-side code
    pub with_server_code: Option<bool>,
    /// Strip rarely used engine subsystems
    pub lean_and_mean: Option<bool>,
    /// Linker must verify exported symbols were emitted
    pub has_exports: Option<bool>,
    /// Preprocessor definitions, in application order
    pub definitions: Vec<String>,
}

/// Resolved compile/link environment for one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEnvironment {
    pub build_editor: bool,
    pub build_editor_only_data: bool,
    pub requires_cooked_data: bool,
    pub compile_against_engine: bool,
    pub with_server_code: bool,
    pub lean_and_mean: bool,
    pub has_exports: bool,
    /// Preprocessor definitions, ordered; one entry per definition name
    pub definitions: Vec<String>,
}

impl Default for TargetEnvironment {
    /// Base environment before any kind-specific patch: the permissive
    /// editor-style defaults that patches subtract from
    fn default() -> Self {
        Self {
            build_editor: true,
            build_editor_only_data: true,
            requires_cooked_data: false,
            compile_against_engine: false,
            with_server_code: true,
            lean_and_mean: false,
            has_exports: true,
            definitions: Vec::new(),
        }
    }
}

impl TargetEnvironment {
    /// Merge a patch into this environment, last writer wins per field
    pub fn apply(&mut self, patch: &EnvironmentPatch) {
        if let Some(v) = patch.build_editor {
            self.build_editor = v;
        }
        if let Some(v) = patch.build_editor_only_data {
            self.build_editor_only_data = v;
        }
        if let Some(v) = patch.requires_cooked_data {
            self.requires_cooked_data = v;
        }
        if let Some(v) = patch.compile_against_engine {
            self.compile_against_engine = v;
        }
        if let Some(v) = patch.with_server_code {
            self.with_server_code = v;
        }
        if let Some(v) = patch.lean_and_mean {
            self.lean_and_mean = v;
        }
        if let Some(v) = patch.has_exports {
            self.has_exports = v;
        }
        for definition in &patch.definitions {
            self.add_definition(definition);
        }
    }

    /// Add a preprocessor definition, replacing any existing definition of
    /// the same name in place
    pub fn add_definition(&mut self, definition: &str) {
        let name = definition_name(definition);
        if let Some(existing) = self
            .definitions
            .iter_mut()
            .find(|d| definition_name(d) == name)
        {
            *existing = definition.to_string();
        } else {
            self.definitions.push(definition.to_string());
        }
    }

    /// Look up a definition by name, returning the full `NAME=VALUE` entry
    pub fn definition(&self, name: &str) -> Option<&str> {
        self.definitions
            .iter()
            .find(|d| definition_name(d) == name)
            .map(|d| d.as_str())
    }
}

/// The name part of a `NAME` or `NAME=VALUE` definition
fn definition_name(definition: &str) -> &str {
    definition.split('=').next().unwrap_or(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_like_patch() -> EnvironmentPatch {
        EnvironmentPatch {
            build_editor: Some(false),
            build_editor_only_data: Some(false),
            requires_cooked_data: Some(true),
            compile_against_engine: Some(true),
            with_server_code: Some(false),
            lean_and_mean: Some(true),
            has_exports: Some(false),
            definitions: vec!["FORGE_GAME=1".to_string()],
        }
    }

    #[test]
    fn test_apply_patch() {
        let mut env = TargetEnvironment::default();
        env.apply(&client_like_patch());

        assert!(!env.build_editor);
        assert!(!env.build_editor_only_data);
        assert!(env.requires_cooked_data);
        assert!(env.compile_against_engine);
        assert!(!env.with_server_code);
        assert!(env.lean_and_mean);
        assert!(!env.has_exports);
        assert_eq!(env.definitions, ["FORGE_GAME=1"]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let patch = client_like_patch();

        let mut once = TargetEnvironment::default();
        once.apply(&patch);

        let mut twice = TargetEnvironment::default();
        twice.apply(&patch);
        twice.apply(&patch);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_none_fields_keep_base_values() {
        let mut env = TargetEnvironment::default();
        env.apply(&EnvironmentPatch {
            build_editor: Some(false),
            ..Default::default()
        });

        assert!(!env.build_editor);
        // untouched by the patch
        assert!(env.with_server_code);
        assert!(env.has_exports);
    }

    #[test]
    fn test_definition_last_writer_wins() {
        let mut env = TargetEnvironment::default();
        env.add_definition("FORGE_GAME=1");
        env.add_definition("WITH_TELEMETRY=1");
        env.add_definition("FORGE_GAME=0");

        assert_eq!(env.definitions, ["FORGE_GAME=0", "WITH_TELEMETRY=1"]);
        assert_eq!(env.definition("FORGE_GAME"), Some("FORGE_GAME=0"));
    }

    #[test]
    fn test_definition_lookup_missing() {
        let env = TargetEnvironment::default();
        assert_eq!(env.definition("FORGE_GAME"), None);
    }
}
