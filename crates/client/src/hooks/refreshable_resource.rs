use std::{future::Future, marker::PhantomData};

use dioxus::prelude::*;

/// Handle that re-runs a resource created with [`use_refreshable_resource`].
///
/// `T` is the resource's output type and selects which resource is refreshed.
pub struct RefreshHandle<T: 'static> {
    trigger: Signal<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Clone for RefreshHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RefreshHandle<T> {}

impl<T: 'static> RefreshHandle<T> {
    pub fn refresh(&mut self) {
        self.trigger.write();
    }
}

/// `use_resource`, plus a context entry that lets descendants re-run it.
///
/// ```rust,ignore
/// // Parent
/// let groups = use_refreshable_resource(move || async move { fetch().await });
///
/// // Any descendant, with the same output type
/// let mut refresh = use_refresh_resource::<Result<Vec<Group>, ApiError>>();
/// refresh.refresh();
/// ```
pub fn use_refreshable_resource<T, F>(mut future: impl FnMut() -> F + 'static) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let handle = use_context_provider(|| RefreshHandle::<T> {
        trigger: Signal::new(()),
        _marker: PhantomData,
    });
    use_resource(move || {
        handle.trigger.read();
        future()
    })
}

/// See [`use_refreshable_resource`]. Panics if no ancestor provides a resource of type `T`.
pub fn use_refresh_resource<T: 'static>() -> RefreshHandle<T> {
    use_context::<RefreshHandle<T>>()
}
