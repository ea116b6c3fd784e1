// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable keys for elements that can only be compared, not hashed.
//!
//! DOM elements have identity (`===`) but no hash, so the detector registry
//! cannot key on them directly. [`ElementKeys`] hands out a small
//! [`ElementKey`] per distinct element and maps it back. [`attach_keyed`] and
//! [`detach_keyed`] keep those keys in step with the detector's registry.

use longpress::{Binding, Error, Host, LongPress, PressTrace};

/// Registry key standing in for one element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(u32);

impl ElementKey {
    /// A key no element is ever assigned.
    pub const UNASSIGNED: Self = Self(0);

    /// The raw key.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Identity map from elements to [`ElementKey`]s.
///
/// Lookups are linear; a page rarely has more than a handful of long-press
/// targets alive at once.
#[derive(Clone, Debug)]
pub struct ElementKeys<T> {
    entries: Vec<(ElementKey, T)>,
    last: u32,
}

impl<T> Default for ElementKeys<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementKeys<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last: 0,
        }
    }

    /// The element behind `key`.
    #[must_use]
    pub fn element(&self, key: ElementKey) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, element)| element)
    }

    /// Forget `key`, returning its element.
    pub fn remove_key(&mut self, key: ElementKey) -> Option<T> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.swap_remove(index).1)
    }

    /// Number of keyed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no element is keyed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: PartialEq> ElementKeys<T> {
    /// The key of `element`, if it has one.
    #[must_use]
    pub fn key_of(&self, element: &T) -> Option<ElementKey> {
        self.entries
            .iter()
            .find(|(_, e)| e == element)
            .map(|(k, _)| *k)
    }

    /// The key of `element`, assigning a fresh one if needed.
    ///
    /// The boolean is `true` when the key was just assigned.
    pub fn get_or_insert(&mut self, element: &T) -> (ElementKey, bool)
    where
        T: Clone,
    {
        if let Some(key) = self.key_of(element) {
            return (key, false);
        }
        self.last += 1;
        let key = ElementKey(self.last);
        self.entries.push((key, element.clone()));
        (key, true)
    }
}

/// A [`Host`] whose registry is keyed through an [`ElementKeys`] map.
pub trait KeyedHost: Host<Element = ElementKey> {
    /// The platform element type.
    type Target: Clone + PartialEq;

    /// The key map.
    fn keys(&self) -> &ElementKeys<Self::Target>;

    /// The key map, mutably.
    fn keys_mut(&mut self) -> &mut ElementKeys<Self::Target>;
}

/// Attach `binding` to `element`, assigning it a key if it has none.
///
/// # Errors
///
/// [`Error::InvalidCallback`] if the binding has no callback. A key assigned
/// by this call is released again; an existing attachment keeps its key.
pub fn attach_keyed<H, T>(
    lp: &mut LongPress<H, T>,
    element: &H::Target,
    binding: Binding,
) -> Result<(), Error<ElementKey>>
where
    H: KeyedHost,
    T: PressTrace<ElementKey>,
{
    let (key, fresh) = lp.host_mut().keys_mut().get_or_insert(element);
    let attached = lp.attach(key, binding);
    if attached.is_err() && fresh {
        lp.host_mut().keys_mut().remove_key(key);
    }
    attached
}

/// Detach `element` and release its key.
///
/// # Errors
///
/// [`Error::MissingContext`] if `element` is not attached. An element that
/// never had a key is reported as [`ElementKey::UNASSIGNED`].
pub fn detach_keyed<H, T>(
    lp: &mut LongPress<H, T>,
    element: &H::Target,
) -> Result<(), Error<ElementKey>>
where
    H: KeyedHost,
    T: PressTrace<ElementKey>,
{
    let key = lp
        .host()
        .keys()
        .key_of(element)
        .unwrap_or(ElementKey::UNASSIGNED);
    lp.detach(&key)?;
    lp.host_mut().keys_mut().remove_key(key);
    Ok(())
}
