//! Caller-owned shape storage
//!
//! The factory gives up ownership of every shape it creates. A physics world
//! that wants to share shapes between bodies keeps them here and hands out
//! [`ShapeHandle`]s instead of references.

use std::collections::HashMap;

use super::shapes::CollisionShape;
use crate::foundation::collections::{HandleMap, ShapeHandle};

/// Shape store with stable handles and optional names
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HandleMap<ShapeHandle, CollisionShape>,
    names: HashMap<String, ShapeHandle>,
}

impl ShapeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a shape and return its handle
    pub fn insert(&mut self, shape: impl Into<CollisionShape>) -> ShapeHandle {
        let shape = shape.into();
        let kind = shape.kind();
        let handle = self.shapes.insert(shape);
        log::debug!("Registered {} shape as {:?}", kind, handle);
        handle
    }

    /// Store a shape under `name`
    ///
    /// If the name was already bound, it now points at the new shape; the old
    /// shape stays reachable through its own handle.
    pub fn insert_named(&mut self, name: impl Into<String>, shape: impl Into<CollisionShape>) -> ShapeHandle {
        let name = name.into();
        let handle = self.insert(shape);
        if let Some(previous) = self.names.insert(name.clone(), handle) {
            log::debug!("Shape name '{}' rebound from {:?} to {:?}", name, previous, handle);
        }
        handle
    }

    /// Shape behind a handle
    pub fn get(&self, handle: ShapeHandle) -> Option<&CollisionShape> {
        self.shapes.get(handle)
    }

    /// Mutable shape behind a handle, e.g. to add children to a compound
    pub fn get_mut(&mut self, handle: ShapeHandle) -> Option<&mut CollisionShape> {
        self.shapes.get_mut(handle)
    }

    /// Handle currently bound to `name`
    pub fn handle_of(&self, name: &str) -> Option<ShapeHandle> {
        self.names.get(name).copied()
    }

    /// Shape currently bound to `name`
    pub fn get_named(&self, name: &str) -> Option<&CollisionShape> {
        self.handle_of(name).and_then(|handle| self.get(handle))
    }

    /// Remove a shape, dropping any names bound to it
    pub fn remove(&mut self, handle: ShapeHandle) -> Option<CollisionShape> {
        let shape = self.shapes.remove(handle)?;
        self.names.retain(|_, bound| *bound != handle);
        log::debug!("Removed {} shape {:?}", shape.kind(), handle);
        Some(shape)
    }

    /// Number of stored shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All stored shapes with their handles
    pub fn iter(&self) -> impl Iterator<Item = (ShapeHandle, &CollisionShape)> {
        self.shapes.iter()
    }

    /// All bound names with their handles
    pub fn names(&self) -> impl Iterator<Item = (&str, ShapeHandle)> {
        self.names.iter().map(|(name, handle)| (name.as_str(), *handle))
    }
}
