/// Read-only access to application resources, as lines of text.
///
/// The manifest reader resolves its resource through this seam so hosts can
/// back it by the filesystem, a classpath-style lookup, or a test stub.
pub trait AppFileProvider: Send + Sync {
    /// Contents of the named resource, or `None` when it does not exist.
    fn file_contents(&self, path: &str) -> Option<Vec<String>>;

    /// Absolute location the named resource resolves to, whether or not it
    /// exists. Used for diagnostics only.
    fn absolute_path(&self, path: &str) -> String;
}
