//! Module metadata lookup
//!
//! Some UI entry points are not present in every host build. Mods that
//! target them search the loaded modules' type tables by name instead of
//! linking against them directly. The registry exposes a snapshot of
//! that metadata; enumerating it can fail on partially loaded modules,
//! which callers are expected to tolerate.

use bitflags::bitflags;

/// Error type for module metadata enumeration
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("Module metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("Failed to enumerate types in '{module}': {reason}")]
    TypeEnumeration { module: String, reason: String },
}

bitflags! {
    /// Accessibility and dispatch flags for a method
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MethodBinding: u32 {
        const PUBLIC = 0x01;
        const NON_PUBLIC = 0x02;
        const STATIC = 0x04;
        const INSTANCE = 0x08;
    }
}

/// A method exposed by a type
#[derive(Debug, Clone)]
pub struct MethodInfo {
    pub name: String,
    pub binding: MethodBinding,
}

impl MethodInfo {
    pub fn new(name: impl Into<String>, binding: MethodBinding) -> Self {
        Self {
            name: name.into(),
            binding,
        }
    }
}

/// A type exposed by a module
#[derive(Debug, Clone)]
pub struct TypeInfo {
    /// Simple name without namespace
    pub name: String,
    pub namespace: Option<String>,
    pub methods: Vec<MethodInfo>,
}

impl TypeInfo {
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.map(str::to_string),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Namespace-qualified dotted name, or the simple name for types in
    /// the global namespace
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    /// Find a method by name whose binding intersects the given mask
    pub fn find_method(&self, name: &str, mask: MethodBinding) -> Option<&MethodInfo> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.binding.intersects(mask))
    }
}

/// A loaded code module and the types it declares
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    pub name: String,
    pub types: Vec<TypeInfo>,
}

impl ModuleInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeInfo) -> Self {
        self.types.push(ty);
        self
    }
}

/// Snapshot view of the host's loaded modules
pub trait ModuleRegistry: Send + Sync {
    fn modules(&self) -> Result<Vec<ModuleInfo>, ModuleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(TypeInfo::new(None, "TimeControls").full_name(), "TimeControls");
        assert_eq!(
            TypeInfo::new(Some("Game.Ui"), "TimeControls").full_name(),
            "Game.Ui.TimeControls"
        );
    }

    #[test]
    fn test_find_method_respects_binding_mask() {
        let ty = TypeInfo::new(None, "TimeControls")
            .with_method(MethodInfo::new(
                "DoTimeControls",
                MethodBinding::NON_PUBLIC | MethodBinding::STATIC,
            ))
            .with_method(MethodInfo::new(
                "Reset",
                MethodBinding::PUBLIC | MethodBinding::INSTANCE,
            ));

        assert!(ty.find_method("DoTimeControls", MethodBinding::all()).is_some());
        assert!(ty
            .find_method("DoTimeControls", MethodBinding::PUBLIC)
            .is_none());
        assert!(ty.find_method("Missing", MethodBinding::all()).is_none());
    }
}
