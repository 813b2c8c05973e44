/// Configuration options for the streaming JSON serializer.
///
/// Both fields tune initial allocations only; the buffer and the nesting
/// stack grow by doubling whenever an estimate turns out to be too small, so
/// these are performance knobs, not limits.
#[derive(Debug, Clone, Copy)]
pub struct SerializerOptions {
    /// Initial capacity of the output buffer, in bytes.
    ///
    /// Documents larger than this still serialize correctly; they just pay
    /// for reallocation on the way. Pick something close to the expected
    /// document size to avoid early doubling.
    ///
    /// # Default
    ///
    /// 16 KiB.
    pub initial_buffer_capacity: usize,

    /// Initial capacity of the nesting stack, in frames.
    ///
    /// One frame is held per open object or array. Twenty levels covers
    /// virtually all real-world documents without reallocation.
    ///
    /// # Default
    ///
    /// `20`
    pub initial_nesting_depth: usize,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            initial_buffer_capacity: 16 * 1024,
            initial_nesting_depth: 20,
        }
    }
}
