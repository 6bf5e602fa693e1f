//! What a run launches: interpreter candidates, module, and manifest name.

pub const DEFAULT_RUNTIME_NAME: &str = "Python";

/// Package module whose `__main__` guard starts the editor.
pub const DEFAULT_MODULE: &str = "eventeditor.timeline";

/// Dependency manifest named in the launch failure message. Never read.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Interpreter names tried in order when none is configured.
#[must_use]
pub fn default_interpreters() -> Vec<String> {
    let names: &[&str] = if cfg!(windows) {
        &["python", "py"]
    } else {
        &["python", "python3"]
    };
    names.iter().map(ToString::to_string).collect()
}

/// Immutable description of the launch. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    interpreters: Vec<String>,
    runtime_name: String,
    module: String,
    manifest: String,
}

impl Default for LaunchTarget {
    fn default() -> Self {
        Self {
            interpreters: default_interpreters(),
            runtime_name: DEFAULT_RUNTIME_NAME.to_string(),
            module: DEFAULT_MODULE.to_string(),
            manifest: DEFAULT_MANIFEST.to_string(),
        }
    }
}

impl LaunchTarget {
    /// Replace the interpreter candidates. Blank entries are dropped; an
    /// all-blank list keeps the current candidates.
    pub fn with_interpreters<I, S>(mut self, interpreters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cleaned: Vec<String> = interpreters
            .into_iter()
            .map(Into::into)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if !cleaned.is_empty() {
            self.interpreters = cleaned;
        }
        self
    }

    pub fn with_runtime_name(mut self, runtime_name: impl Into<String>) -> Self {
        replace_if_present(&mut self.runtime_name, runtime_name.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        replace_if_present(&mut self.module, module.into());
        self
    }

    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        replace_if_present(&mut self.manifest, manifest.into());
        self
    }

    #[must_use]
    pub fn interpreters(&self) -> &[String] {
        &self.interpreters
    }

    #[must_use]
    pub fn runtime_name(&self) -> &str {
        &self.runtime_name
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn manifest(&self) -> &str {
        &self.manifest
    }

    /// Arguments passed to the interpreter to start the module.
    #[must_use]
    pub fn module_args(&self) -> Vec<String> {
        vec!["-m".to_string(), self.module.clone()]
    }
}

fn replace_if_present(slot: &mut String, value: String) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        *slot = trimmed.to_string();
    }
}
