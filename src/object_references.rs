//! Object reference list management.
//!
//! References are compared by full structural equality: two references that
//! differ in any field, including one having a `uid` and the other not, are
//! distinct entries and can coexist in the same list.

use k8s_openapi::api::core::v1::ObjectReference;
use kube::Resource;
use tracing::{debug, trace};

/// Find the first reference structurally equal to `find`.
pub fn find_object_reference<'a>(
    objects: &'a [ObjectReference],
    find: &ObjectReference,
) -> Option<&'a ObjectReference> {
    objects.iter().find(|object| *object == find)
}

/// Find every reference with the same apiVersion and kind as `find`.
///
/// Structurally distinct references to the same kind can coexist in a list,
/// so this returns all of them in list order.
pub fn find_object_references<'a>(
    objects: &'a [ObjectReference],
    find: &ObjectReference,
) -> Vec<&'a ObjectReference> {
    objects
        .iter()
        .filter(|object| object.api_version == find.api_version && object.kind == find.kind)
        .collect()
}

/// Append `new_object` unless a structurally equal reference is present.
pub fn set_object_reference(objects: &mut Vec<ObjectReference>, new_object: ObjectReference) {
    if find_object_reference(objects, &new_object).is_some() {
        trace!(
            kind = new_object.kind.as_deref().unwrap_or_default(),
            name = new_object.name.as_deref().unwrap_or_default(),
            "Object reference already present"
        );
        return;
    }

    debug!(
        kind = new_object.kind.as_deref().unwrap_or_default(),
        name = new_object.name.as_deref().unwrap_or_default(),
        "Adding object reference"
    );
    objects.push(new_object);
}

/// Record a reference to `object`.
///
/// The reference carries the object's kind, apiVersion, namespace, name, uid
/// and resourceVersion, so a newer resourceVersion yields a new entry.
pub fn set_object_reference_for<K>(objects: &mut Vec<ObjectReference>, object: &K)
where
    K: Resource<DynamicType = ()>,
{
    set_object_reference(objects, object.object_ref(&()));
}

/// Remove every reference structurally equal to `rm_object`.
pub fn remove_object_reference(objects: &mut Vec<ObjectReference>, rm_object: &ObjectReference) {
    let before = objects.len();
    objects.retain(|object| object != rm_object);

    let removed = before - objects.len();
    if removed > 0 {
        debug!(
            kind = rm_object.kind.as_deref().unwrap_or_default(),
            name = rm_object.name.as_deref().unwrap_or_default(),
            removed,
            "Removed object references"
        );
    }
}
