use crate::error::{PackError, PackResult};

// -----------------------------------------------------------------------------
// DepthGuard

/// Limits the nesting of values during one write.
///
/// Every nested value calls [`enter`](DepthGuard::enter) before it is written
/// and [`exit`](DepthGuard::exit) afterwards, on error paths too. Reflected
/// values cannot form true cycles, so the limit only trips on very deep data,
/// but it keeps the walker from overflowing the stack.
///
/// # Examples
///
/// ```
/// use vc_pack::{DepthGuard, PackError};
///
/// let mut guard = DepthGuard::new(1);
/// guard.enter("outer").unwrap();
/// assert_eq!(
///     guard.enter("inner"),
///     Err(PackError::DepthExceeded { max_depth: 1, type_path: "inner" }),
/// );
/// guard.exit();
/// assert_eq!(guard.depth(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DepthGuard {
    depth: usize,
    max_depth: usize,
}

impl DepthGuard {
    #[inline]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Current nesting depth.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Enters one level, failing if the limit is already reached.
    pub fn enter(&mut self, type_path: &'static str) -> PackResult<()> {
        if self.depth >= self.max_depth {
            log::warn!(
                "max depth {} exceeded at `{type_path}`, possible circular reference",
                self.max_depth,
            );
            return Err(PackError::DepthExceeded {
                max_depth: self.max_depth,
                type_path,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level.
    #[inline]
    pub fn exit(&mut self) {
        debug_assert!(self.depth > 0, "unbalanced `DepthGuard::exit`");
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::DepthGuard;

    #[test]
    fn balanced() {
        let mut guard = DepthGuard::new(3);
        for _ in 0..3 {
            guard.enter("x").unwrap();
        }
        assert!(guard.enter("x").is_err());
        assert_eq!(guard.depth(), 3);
        for _ in 0..3 {
            guard.exit();
        }
        assert_eq!(guard.depth(), 0);
        assert!(guard.enter("x").is_ok());
    }

    #[test]
    fn zero_limit_rejects_root() {
        let mut guard = DepthGuard::new(0);
        assert!(guard.enter("root").is_err());
        assert_eq!(guard.max_depth(), 0);
    }
}
