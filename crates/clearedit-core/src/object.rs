//! Object model: stable IDs, naming, and parent-child ownership.
//!
//! Every widget (and any other long-lived entity) registers itself in a
//! process-wide [`ObjectRegistry`] on construction and is removed again when
//! dropped. The registry stores the ownership tree and debug names; the
//! objects themselves stay wherever the application keeps them.
//!
//! # Key Types
//!
//! - [`ObjectId`] - Stable handle to a registered object
//! - [`Object`] - Trait implemented by everything with an identity
//! - [`ObjectBase`] - Embeddable helper that registers/unregisters itself
//! - [`ObjectRegistry`] / [`SharedObjectRegistry`] - The arena itself

use std::any::TypeId;
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A unique identifier for an object in the registry.
    ///
    /// `ObjectId`s are stable handles that remain valid even as the object
    /// tree changes. They become invalid when the object is destroyed.
    pub struct ObjectId;
}

/// Errors that can occur during object operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID is invalid or has been destroyed.
    InvalidObjectId,
    /// Attempted to set an object as its own parent/ancestor.
    CircularParentage,
    /// The object registry is not initialized.
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidObjectId => write!(f, "Invalid or destroyed object ID"),
            Self::CircularParentage => {
                write!(f, "Cannot set an object as its own parent or ancestor")
            }
            Self::RegistryNotInitialized => write!(f, "Object registry not initialized"),
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Internal data stored in the registry for each object.
struct ObjectData {
    /// Human-readable name for debugging and lookup.
    name: String,
    /// The type ID of the concrete Object implementation.
    type_id: TypeId,
    /// The type name for debugging.
    type_name: &'static str,
    /// Parent object (if any).
    parent: Option<ObjectId>,
    /// Child objects (owned).
    children: Vec<ObjectId>,
}

impl ObjectData {
    fn new(type_id: TypeId, type_name: &'static str) -> Self {
        Self {
            name: String::new(),
            type_id,
            type_name,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The central registry that manages all objects and their relationships.
///
/// Uses arena-based storage via SlotMap for stable object IDs and efficient
/// parent-child relationship management.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectData>,
}

impl ObjectRegistry {
    /// Create a new empty object registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: Object + 'static>(&mut self) -> ObjectId {
        let data = ObjectData::new(TypeId::of::<T>(), std::any::type_name::<T>());
        let id = self.objects.insert(data);
        tracing::trace!(target: "clearedit_core::object", ?id, type_name = std::any::type_name::<T>(), "registered object");
        id
    }

    /// Remove an object and all its children from the registry.
    ///
    /// Destroying a parent also destroys all of its children.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let descendants = self.collect_descendants(id)?;
        tracing::trace!(target: "clearedit_core::object", ?id, descendant_count = descendants.len(), "destroying object tree");

        // Remove from the parent's children list.
        if let Some(data) = self.objects.get(id) {
            if let Some(parent_id) = data.parent {
                if let Some(parent_data) = self.objects.get_mut(parent_id) {
                    parent_data.children.retain(|&child| child != id);
                }
            }
        }

        // Destroy all descendants (children first, then self).
        for child_id in descendants {
            self.objects.remove(child_id);
        }
        self.objects.remove(id);

        Ok(())
    }

    /// Collect all descendant IDs in depth-first order (children before parents).
    fn collect_descendants(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(
        &self,
        id: ObjectId,
        result: &mut Vec<ObjectId>,
    ) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check if an object exists in the registry.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Set the parent of an object.
    ///
    /// This handles removing from the old parent and adding to the new parent.
    /// Passing `None` makes the object a root object.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::InvalidObjectId);
        }

        if let Some(parent_id) = new_parent {
            if !self.objects.contains_key(parent_id) {
                return Err(ObjectError::InvalidObjectId);
            }
            // Reject cycles: the new parent must not be the object itself or
            // any of its descendants.
            if parent_id == id || self.is_descendant_of(parent_id, id) {
                return Err(ObjectError::CircularParentage);
            }
        }

        // Detach from the old parent.
        let old_parent = self.objects[id].parent;
        if let Some(old_parent_id) = old_parent {
            if let Some(old_parent_data) = self.objects.get_mut(old_parent_id) {
                old_parent_data.children.retain(|&child| child != id);
            }
        }

        // Attach to the new parent.
        self.objects[id].parent = new_parent;
        if let Some(parent_id) = new_parent {
            self.objects[parent_id].children.push(id);
        }

        Ok(())
    }

    /// Check whether `id` is a descendant of `ancestor`.
    fn is_descendant_of(&self, id: ObjectId, ancestor: ObjectId) -> bool {
        let mut current = self.objects.get(id).and_then(|d| d.parent);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.objects.get(parent_id).and_then(|d| d.parent);
        }
        false
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the children of an object.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.children.clone())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the debug name of an object.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.objects
            .get(id)
            .map(|d| d.name.clone())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set the debug name of an object.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.name = name;
        Ok(())
    }

    /// Find a direct child of `id` by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child_id in &data.children {
            if let Some(child_data) = self.objects.get(child_id) {
                if child_data.name == name {
                    return Ok(Some(child_id));
                }
            }
        }
        Ok(None)
    }

    /// Get the concrete type name an object was registered with.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Check whether an object was registered as type `T`.
    pub fn is_type<T: Object + 'static>(&self, id: ObjectId) -> bool {
        self.objects
            .get(id)
            .map(|d| d.type_id == TypeId::of::<T>())
            .unwrap_or(false)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper around [`ObjectRegistry`] for shared access.
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: Object + 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Remove an object and all its children.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if an object exists.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set the parent of an object.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of an object.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id)
    }

    /// Get the debug name of an object.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id)
    }

    /// Set the debug name of an object.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().find_child_by_name(id, name)
    }

    /// Get the concrete type name an object was registered with.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<SharedObjectRegistry> = OnceLock::new();

/// Initialize the global object registry.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_global_registry() {
    let _ = GLOBAL_REGISTRY.set(SharedObjectRegistry::new());
}

/// Access the global object registry.
///
/// Returns an error if [`init_global_registry`] has not been called.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    GLOBAL_REGISTRY
        .get()
        .ok_or(ObjectError::RegistryNotInitialized)
}

/// The base trait for everything with an identity in the object tree.
pub trait Object: std::any::Any + Send + Sync {
    /// Get this object's unique ID.
    fn object_id(&self) -> ObjectId;
}

/// Embeddable helper that registers an object on construction and removes it
/// from the registry when dropped.
///
/// # Example
///
/// ```
/// use clearedit_core::{init_global_registry, Object, ObjectBase, ObjectId};
///
/// struct Node {
///     base: ObjectBase,
/// }
///
/// impl Node {
///     fn new() -> Self {
///         Self { base: ObjectBase::new::<Self>() }
///     }
/// }
///
/// impl Object for Node {
///     fn object_id(&self) -> ObjectId {
///         self.base.id()
///     }
/// }
///
/// init_global_registry();
/// let node = Node::new();
/// assert!(clearedit_core::global_registry().unwrap().contains(node.object_id()));
/// ```
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new ObjectBase, registering the object in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("Object registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// Get the object's ID.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name from the registry.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name in the registry.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }

    /// Get the parent object ID.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get child object IDs.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, name: &str) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.find_child_by_name(self.id, name))
            .ok()
            .flatten()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

static_assertions::assert_impl_all!(SharedObjectRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct TestObject {
        base: ObjectBase,
    }

    impl TestObject {
        fn new() -> Self {
            Self {
                base: ObjectBase::new::<Self>(),
            }
        }
    }

    impl Object for TestObject {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_register_and_contains() {
        setup();
        let obj = TestObject::new();
        let registry = global_registry().unwrap();
        assert!(registry.contains(obj.object_id()));
    }

    #[test]
    fn test_drop_unregisters() {
        setup();
        let id = {
            let obj = TestObject::new();
            obj.object_id()
        };
        let registry = global_registry().unwrap();
        assert!(!registry.contains(id));
    }

    #[test]
    fn test_name_roundtrip() {
        setup();
        let obj = TestObject::new();
        obj.base.set_name("field_one");
        assert_eq!(obj.base.name(), "field_one");
    }

    #[test]
    fn test_parent_child() {
        setup();
        let parent = TestObject::new();
        let child = TestObject::new();
        child.base.set_parent(Some(parent.object_id())).unwrap();

        assert_eq!(child.base.parent(), Some(parent.object_id()));
        assert_eq!(parent.base.children(), vec![child.object_id()]);
    }

    #[test]
    fn test_find_child_by_name() {
        setup();
        let parent = TestObject::new();
        let child = TestObject::new();
        child.base.set_name("needle");
        child.base.set_parent(Some(parent.object_id())).unwrap();

        assert_eq!(
            parent.base.find_child_by_name("needle"),
            Some(child.object_id())
        );
        assert_eq!(parent.base.find_child_by_name("missing"), None);
    }

    #[test]
    fn test_circular_parentage_rejected() {
        setup();
        let a = TestObject::new();
        let b = TestObject::new();
        b.base.set_parent(Some(a.object_id())).unwrap();

        let registry = global_registry().unwrap();
        assert_eq!(
            registry.set_parent(a.object_id(), Some(b.object_id())),
            Err(ObjectError::CircularParentage)
        );
        assert_eq!(
            registry.set_parent(a.object_id(), Some(a.object_id())),
            Err(ObjectError::CircularParentage)
        );
    }

    #[test]
    fn test_destroy_cascades_to_children() {
        setup();
        let registry = global_registry().unwrap();

        // Build the tree with raw registry handles so drop order is ours.
        let parent_id = registry.register::<TestObject>();
        let child_id = registry.register::<TestObject>();
        registry.set_parent(child_id, Some(parent_id)).unwrap();

        registry.destroy(parent_id).unwrap();
        assert!(!registry.contains(parent_id));
        assert!(!registry.contains(child_id));
    }

    #[test]
    fn test_invalid_id_errors() {
        setup();
        let registry = global_registry().unwrap();
        let id = {
            let obj = TestObject::new();
            obj.object_id()
        };
        assert_eq!(registry.parent(id), Err(ObjectError::InvalidObjectId));
        assert_eq!(registry.object_name(id), Err(ObjectError::InvalidObjectId));
    }
}
