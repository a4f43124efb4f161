//! Shader registry: names to opaque handles, handles to WGSL sources.
//!
//! Meshes only ever see the [`ShaderLookup`] trait. The concrete
//! [`ShaderLibrary`] also hands its sources to `MeshPass` so pipelines can be
//! compiled per handle.

/// WGSL source of the built-in position + color shader.
pub const BASIC_WGSL: &str = include_str!("../../../assets/shaders/basic.wgsl");

/// Name the built-in shader is registered under.
pub const BASIC_SHADER: &str = "Basic";

/// Opaque program handle returned by a [`ShaderLookup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderHandle(pub u32);

/// Resolves a shader name to a handle. Shared read-only across meshes.
pub trait ShaderLookup: Send + Sync {
    fn resolve(&self, name: &str) -> Option<ShaderHandle>;
}

/// A list of named WGSL programs. Handles are registration indices.
#[derive(Debug, Default, Clone)]
pub struct ShaderLibrary {
    entries: Vec<(String, &'static str)>,
}

impl ShaderLibrary {
    /// An empty library. `resolve` fails for every name.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library holding the built-in `"Basic"` shader.
    pub fn with_builtins() -> Self {
        let mut lib = Self::new();
        lib.register(BASIC_SHADER, BASIC_WGSL);
        lib
    }

    /// Adds (or replaces) the program called `name`.
    pub fn register(&mut self, name: impl Into<String>, source: &'static str) -> ShaderHandle {
        let name = name.into();
        if let Some(idx) = self.entries.iter().position(|(n, _)| *n == name) {
            log::debug!("replacing shader '{name}'");
            self.entries[idx].1 = source;
            return ShaderHandle(idx as u32);
        }
        self.entries.push((name, source));
        ShaderHandle(self.entries.len() as u32 - 1)
    }

    pub fn source(&self, handle: ShaderHandle) -> Option<&'static str> {
        self.entries.get(handle.0 as usize).map(|(_, src)| *src)
    }

    /// `(handle, name, source)` for every registered program.
    pub fn iter(&self) -> impl Iterator<Item = (ShaderHandle, &str, &'static str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (name, src))| (ShaderHandle(i as u32), name.as_str(), *src))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ShaderLookup for ShaderLibrary {
    fn resolve(&self, name: &str) -> Option<ShaderHandle> {
        self.entries
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| ShaderHandle(i as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_resolve_basic() {
        let lib = ShaderLibrary::with_builtins();
        let handle = lib.resolve(BASIC_SHADER).unwrap();
        assert_eq!(lib.source(handle), Some(BASIC_WGSL));
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(ShaderLibrary::new().resolve("Basic"), None);
        assert_eq!(ShaderLibrary::with_builtins().resolve("Phong"), None);
    }

    #[test]
    fn re_registering_keeps_the_handle() {
        let mut lib = ShaderLibrary::with_builtins();
        let first = lib.resolve(BASIC_SHADER).unwrap();
        let again = lib.register(BASIC_SHADER, "// replaced");
        assert_eq!(first, again);
        assert_eq!(lib.source(again), Some("// replaced"));
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn basic_source_has_both_entry_points() {
        assert!(BASIC_WGSL.contains("fn vs_main"));
        assert!(BASIC_WGSL.contains("fn fs_main"));
        assert!(BASIC_WGSL.contains("wire"));
    }
}
