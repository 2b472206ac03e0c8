use std::path::PathBuf;

/// Base directory that request targets are resolved against.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Appends `target` to the root verbatim.
    ///
    /// No normalization happens: `..` segments are passed through to the
    /// filesystem, so a target can reach outside the root. A root without a
    /// trailing slash joined with a target without a leading one runs the
    /// two names together, just as plain concatenation would.
    pub fn resolve(&self, target: &str) -> PathBuf {
        let mut path = self.root.clone().into_os_string();
        path.push(target);
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_without_normalizing() {
        let root = DocumentRoot::new("/srv/www");

        assert_eq!(root.resolve("/a.txt"), PathBuf::from("/srv/www/a.txt"));
        assert_eq!(
            root.resolve("/../etc/passwd"),
            PathBuf::from("/srv/www/../etc/passwd")
        );
        assert_eq!(root.resolve("x"), PathBuf::from("/srv/wwwx"));
    }
}
