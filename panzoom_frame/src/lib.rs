// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Frame: a registry of per-frame hooks.
//!
//! Animation-loop hosts call [`FrameHooks::tick`] once per rendered frame;
//! every subscribed hook runs synchronously, in subscription order, with
//! mutable access to a caller-provided context (typically the session that
//! owns the camera).
//!
//! Subscribing returns an opaque [`FrameToken`]. Unsubscribing takes the
//! token rather than the closure, so identical closures never alias.
//!
//! ```rust
//! use panzoom_frame::FrameHooks;
//!
//! let mut hooks = FrameHooks::<u32>::new();
//! let counter = hooks.subscribe(|frames: &mut u32| *frames += 1);
//! let doubler = hooks.subscribe(|frames: &mut u32| *frames *= 2);
//!
//! let mut frames = 0;
//! hooks.tick(&mut frames);
//! assert_eq!(frames, 2);
//!
//! assert!(hooks.unsubscribe(doubler));
//! hooks.tick(&mut frames);
//! assert_eq!(frames, 3);
//!
//! // Tokens are single-use.
//! assert!(!hooks.unsubscribe(doubler));
//! assert!(hooks.contains(counter));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle identifying one subscription in a [`FrameHooks`] registry.
///
/// Tokens are unique for the lifetime of the registry that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

type Hook<C> = Box<dyn FnMut(&mut C)>;

/// Ordered set of hooks run once per frame.
pub struct FrameHooks<C> {
    hooks: Vec<(FrameToken, Hook<C>)>,
    next_token: u64,
}

impl<C> FrameHooks<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hooks: Vec::new(),
            next_token: 0,
        }
    }

    /// Adds a hook to run after all previously subscribed hooks.
    pub fn subscribe(&mut self, hook: impl FnMut(&mut C) + 'static) -> FrameToken {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        self.hooks.push((token, Box::new(hook)));
        tracing::debug!(token = token.0, hooks = self.hooks.len(), "frame hook subscribed");
        token
    }

    /// Removes the hook identified by `token`.
    ///
    /// Returns `false` if the token is unknown or was already removed.
    pub fn unsubscribe(&mut self, token: FrameToken) -> bool {
        let Some(index) = self.hooks.iter().position(|(t, _)| *t == token) else {
            return false;
        };
        self.hooks.remove(index);
        tracing::debug!(token = token.0, hooks = self.hooks.len(), "frame hook removed");
        true
    }

    /// Returns `true` if `token` is still subscribed.
    #[must_use]
    pub fn contains(&self, token: FrameToken) -> bool {
        self.hooks.iter().any(|(t, _)| *t == token)
    }

    /// Number of subscribed hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` when no hook is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs every hook once, in subscription order.
    pub fn tick(&mut self, context: &mut C) {
        for (_, hook) in &mut self.hooks {
            hook(context);
        }
    }
}

impl<C> Default for FrameHooks<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for FrameHooks<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameHooks")
            .field(
                "tokens",
                &self.hooks.iter().map(|(t, _)| t.0).collect::<Vec<_>>(),
            )
            .field("next_token", &self.next_token)
            .finish()
    }
}
