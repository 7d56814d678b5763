pub enum Action {
    /// Forward one prompt to the completion backend. The UI guarantees at
    /// most one of these is outstanding at a time; the service does not
    /// enforce it.
    CompletionRequest(String),

    CopyText(String),
}
