//! Field-level patch helpers.
//!
//! Update requests carry `Option` fields where `None` means "leave
//! unchanged". These helpers answer the two questions the update flow asks
//! about each field: did the caller change it, and what is its value after
//! the patch is applied.

/// `true` when `new` is present and differs from `current`.
pub fn changed<T: PartialEq + ?Sized>(new: Option<&T>, current: &T) -> bool {
    new.is_some_and(|value| value != current)
}

/// The value a field will hold once the patch is applied.
pub fn patched<'a, T: ?Sized>(new: Option<&'a T>, current: &'a T) -> &'a T {
    new.unwrap_or(current)
}

/// Whether a row found by unique key blocks an update of `target_id`.
///
/// Finding the row being updated itself is never a conflict.
pub fn conflicts_with<Id: PartialEq>(found_id: Option<Id>, target_id: Id) -> bool {
    found_id.is_some_and(|id| id != target_id)
}
