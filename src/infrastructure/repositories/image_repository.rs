/// Repository for image URL allocation.
/// Abstracts the underlying image provider.
///
/// Implementations are responsible for:
/// - Keeping allocations distinct across the whole process where possible
/// - Degrading to a duplicate URL instead of failing when the candidate
///   space runs dry
/// - Provider-specific dimension conventions per category
pub trait ImageRepository: Send + Sync {
    /// Allocate an image URL for a category
    ///
    /// The optional `id` identifies the content card the URL is for; it is
    /// carried into diagnostics when allocation degrades.
    fn allocate(&self, category: &str, id: Option<u64>) -> String;
}
