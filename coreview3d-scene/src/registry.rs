//! Scene object registry
//!
//! A type-keyed factory with an explicit create/dispose contract. Each
//! logical scene object is keyed by a stable, content-independent string
//! (hole id plus role, never a hash of props), and the registry owns the
//! geometry resources behind that key. Recomputation driven by the host's
//! update loop runs the full diff in [`SceneObjectRegistry::sync`]; the
//! registry is always an instance, never a process-wide singleton, so tests
//! can run independent registries side by side.

use crate::builder::{ColoredSegment, PointMarker};
use coreview3d_core::{Bounds, Error, Point3d, Result};
use std::collections::HashMap;

/// Inputs handed to a scene object builder
#[derive(Debug, Clone, Default)]
pub struct SceneProps {
    pub segments: Vec<ColoredSegment>,
    pub markers: Vec<PointMarker>,
    pub bounds: Option<Bounds>,
}

/// Renderable geometry as a tagged variant.
///
/// A flat data model instead of an object hierarchy: disposal walks the
/// owned buffers per variant, and grouping is expressed through registry
/// keys rather than parent pointers.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneGeometry {
    LineSet(Vec<ColoredSegment>),
    MarkerSet(Vec<PointMarker>),
    Grid { bounds: Bounds, spacing: f64 },
    BoundingBox(Bounds),
    Axes { origin: Point3d, length: f64 },
}

impl SceneGeometry {
    /// Release the buffers owned by this geometry
    fn release(&mut self) {
        match self {
            SceneGeometry::LineSet(segments) => segments.clear(),
            SceneGeometry::MarkerSet(markers) => markers.clear(),
            SceneGeometry::Grid { .. }
            | SceneGeometry::BoundingBox(_)
            | SceneGeometry::Axes { .. } => {}
        }
    }
}

/// Constructs geometry for one scene object type
pub trait SceneObjectBuilder: Send + Sync {
    fn build(&self, props: &SceneProps) -> Result<SceneGeometry>;
}

impl<F> SceneObjectBuilder for F
where
    F: Fn(&SceneProps) -> Result<SceneGeometry> + Send + Sync,
{
    fn build(&self, props: &SceneProps) -> Result<SceneGeometry> {
        self(props)
    }
}

/// Owning handle to a live scene object.
///
/// The geometry behind the handle belongs to the registry entry, never to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObjectHandle {
    pub key: String,
    pub type_name: String,
}

/// A desired scene object, as declared by the host per update
#[derive(Debug, Clone)]
pub struct SceneObjectSpec {
    pub key: String,
    pub type_name: String,
    pub props: SceneProps,
}

/// Outcome of a [`SceneObjectRegistry::sync`] diff
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: Vec<String>,
    pub disposed: Vec<String>,
    pub unchanged: usize,
}

struct LiveObject {
    type_name: String,
    geometry: SceneGeometry,
}

/// Type-keyed scene object factory with deterministic lifecycle
#[derive(Default)]
pub struct SceneObjectRegistry {
    builders: HashMap<String, Box<dyn SceneObjectBuilder>>,
    live: HashMap<String, LiveObject>,
}

impl SceneObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder for a type tag.
    ///
    /// Re-registering a type overwrites the previous builder; that is a
    /// warning-level event, not an error.
    pub fn register_type(&mut self, type_name: &str, builder: Box<dyn SceneObjectBuilder>) {
        if self.builders.insert(type_name.to_string(), builder).is_some() {
            log::warn!("scene object type {type_name:?} re-registered, previous builder replaced");
        }
    }

    /// Create a scene object under a stable key.
    ///
    /// # Errors
    /// [`Error::UnknownType`] if the type was never registered;
    /// [`Error::InvalidData`] if the key already has a live object (the old
    /// object must be disposed before a new one shares its key, so two
    /// resource sets for the same logical object never coexist).
    pub fn create(
        &mut self,
        type_name: &str,
        key: &str,
        props: &SceneProps,
    ) -> Result<SceneObjectHandle> {
        let builder = self
            .builders
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;

        if self.live.contains_key(key) {
            return Err(Error::InvalidData(format!(
                "scene object key {key:?} is already live; dispose it first"
            )));
        }

        let geometry = builder.build(props)?;
        self.live.insert(
            key.to_string(),
            LiveObject {
                type_name: type_name.to_string(),
                geometry,
            },
        );
        Ok(SceneObjectHandle {
            key: key.to_string(),
            type_name: type_name.to_string(),
        })
    }

    /// Dispose a scene object, releasing its geometry.
    ///
    /// Idempotent: disposing an already-disposed handle is a no-op, because
    /// the scene diff that triggers disposal can race with component
    /// teardown triggering it again.
    pub fn dispose(&mut self, handle: &SceneObjectHandle) {
        self.dispose_key(&handle.key);
    }

    fn dispose_key(&mut self, key: &str) {
        if let Some(mut object) = self.live.remove(key) {
            object.geometry.release();
        }
    }

    /// Apply a declarative object list as a full diff.
    ///
    /// Objects absent from the live set are created, live objects absent
    /// from the list are disposed, and objects present in both are left
    /// untouched. Disposal runs before creation so a key is never
    /// double-allocated across the transition.
    pub fn sync(&mut self, desired: &[SceneObjectSpec]) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        let stale: Vec<String> = self
            .live
            .keys()
            .filter(|key| !desired.iter().any(|spec| spec.key == **key))
            .cloned()
            .collect();
        for key in stale {
            self.dispose_key(&key);
            report.disposed.push(key);
        }

        for spec in desired {
            if self.live.contains_key(&spec.key) {
                report.unchanged += 1;
            } else {
                self.create(&spec.type_name, &spec.key, &spec.props)?;
                report.created.push(spec.key.clone());
            }
        }

        Ok(report)
    }

    /// Geometry behind a live key, if any
    pub fn get(&self, key: &str) -> Option<&SceneGeometry> {
        self.live.get(key).map(|object| &object.geometry)
    }

    /// Type tag of a live key, if any
    pub fn type_of(&self, key: &str) -> Option<&str> {
        self.live.get(key).map(|object| object.type_name.as_str())
    }

    /// Number of live scene objects
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True if no scene object is live
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_builder() -> Box<dyn SceneObjectBuilder> {
        Box::new(|props: &SceneProps| Ok(SceneGeometry::LineSet(props.segments.clone())))
    }

    fn spec(key: &str) -> SceneObjectSpec {
        SceneObjectSpec {
            key: key.to_string(),
            type_name: "lines".to_string(),
            props: SceneProps::default(),
        }
    }

    #[test]
    fn test_create_unknown_type_fails() {
        let mut registry = SceneObjectRegistry::new();
        let result = registry.create("lines", "drillhole:DH-001", &SceneProps::default());
        assert!(matches!(result, Err(Error::UnknownType(_))));
    }

    #[test]
    fn test_create_and_dispose() {
        let mut registry = SceneObjectRegistry::new();
        registry.register_type("lines", line_builder());

        let handle = registry
            .create("lines", "drillhole:DH-001", &SceneProps::default())
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.type_of("drillhole:DH-001"), Some("lines"));

        registry.dispose(&handle);
        assert!(registry.is_empty());
        assert!(registry.get("drillhole:DH-001").is_none());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut registry = SceneObjectRegistry::new();
        registry.register_type("lines", line_builder());
        let handle = registry
            .create("lines", "drillhole:DH-001", &SceneProps::default())
            .unwrap();

        registry.dispose(&handle);
        let after_first = registry.len();
        registry.dispose(&handle);
        assert_eq!(registry.len(), after_first);
    }

    #[test]
    fn test_duplicate_key_create_fails_while_live() {
        let mut registry = SceneObjectRegistry::new();
        registry.register_type("lines", line_builder());
        let handle = registry
            .create("lines", "drillhole:DH-001", &SceneProps::default())
            .unwrap();
        assert!(registry
            .create("lines", "drillhole:DH-001", &SceneProps::default())
            .is_err());

        // Disposing frees the key for reuse
        registry.dispose(&handle);
        assert!(registry
            .create("lines", "drillhole:DH-001", &SceneProps::default())
            .is_ok());
    }

    #[test]
    fn test_reregistering_a_type_overwrites() {
        let mut registry = SceneObjectRegistry::new();
        registry.register_type("lines", line_builder());
        registry.register_type(
            "lines",
            Box::new(|_: &SceneProps| Ok(SceneGeometry::MarkerSet(Vec::new()))),
        );
        registry
            .create("lines", "drillhole:DH-001", &SceneProps::default())
            .unwrap();
        assert_eq!(
            registry.get("drillhole:DH-001"),
            Some(&SceneGeometry::MarkerSet(Vec::new()))
        );
    }

    #[test]
    fn test_sync_applies_full_diff() {
        let mut registry = SceneObjectRegistry::new();
        registry.register_type("lines", line_builder());

        let report = registry
            .sync(&[spec("drillhole:DH-001"), spec("drillhole:DH-002")])
            .unwrap();
        assert_eq!(report.created.len(), 2);
        assert!(report.disposed.is_empty());

        // DH-002 toggled off, DH-003 toggled on, DH-001 untouched
        let report = registry
            .sync(&[spec("drillhole:DH-001"), spec("drillhole:DH-003")])
            .unwrap();
        assert_eq!(report.created, vec!["drillhole:DH-003".to_string()]);
        assert_eq!(report.disposed, vec!["drillhole:DH-002".to_string()]);
        assert_eq!(report.unchanged, 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_sync_to_empty_disposes_everything() {
        let mut registry = SceneObjectRegistry::new();
        registry.register_type("lines", line_builder());
        registry.sync(&[spec("a"), spec("b"), spec("c")]).unwrap();

        let report = registry.sync(&[]).unwrap();
        assert_eq!(report.disposed.len(), 3);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_repeated_sync_is_stable() {
        // High-frequency recomputation must not leak or rebuild
        let mut registry = SceneObjectRegistry::new();
        registry.register_type("lines", line_builder());

        let desired = [spec("drillhole:DH-001")];
        registry.sync(&desired).unwrap();
        for _ in 0..100 {
            let report = registry.sync(&desired).unwrap();
            assert!(report.created.is_empty());
            assert!(report.disposed.is_empty());
            assert_eq!(report.unchanged, 1);
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_independent_registries_do_not_share_types() {
        let mut first = SceneObjectRegistry::new();
        first.register_type("lines", line_builder());

        let mut second = SceneObjectRegistry::new();
        assert!(second
            .create("lines", "drillhole:DH-001", &SceneProps::default())
            .is_err());
    }
}
