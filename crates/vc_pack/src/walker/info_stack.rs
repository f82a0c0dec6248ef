use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use vc_reflect::info::TypeInfo;

/// Helper struct for managing a stack of [`TypeInfo`] instances.
///
/// Tracks the path from the root to the value being walked. Entries are
/// only popped on success, so after a failure the stack ends at the value
/// that failed.
#[derive(Default, Clone)]
pub(super) struct TypeInfoStack {
    stack: Vec<&'static TypeInfo>,
}

impl TypeInfoStack {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, type_info: &'static TypeInfo) {
        self.stack.push(type_info);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }
}

impl Debug for TypeInfoStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut iter = self.stack.iter();

        if let Some(first) = iter.next() {
            writeln!(f, "`{}`", first.type_path())?;
        }

        for info in iter {
            writeln!(f, " -> `{}`", info.type_path())?;
        }

        Ok(())
    }
}
