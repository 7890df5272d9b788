use serde::Serialize;
use std::{error, fmt};

///
/// ErrorTree
///
/// Flat aggregate of descriptor validation issues. Validation keeps
/// collecting so a single pass reports every problem on a model.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    issues: Vec<String>,
}

impl error::Error for ErrorTree {}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add(&mut self, issue: impl fmt::Display) {
        self.issues.push(issue.to_string());
    }

    /// Merge another tree's issues under a route prefix.
    pub fn merge(&mut self, route: &str, other: Self) {
        for issue in other.issues {
            self.issues.push(format!("{route}: {issue}"));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Consume the tree, yielding `Err(self)` when any issue was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
            first = false;
        }
        Ok(())
    }
}

/// Record a formatted issue on an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///
